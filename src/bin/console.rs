//! LineKV Console
//!
//! Reads `write` / `read` / `delete` commands from stdin.

use std::io;
use std::path::PathBuf;

use clap::Parser;
use linekv::bootstrap::ensure_storage_files;
use linekv::{console, Config, RecordStore};
use tracing_subscriber::{fmt, EnvFilter};

/// LineKV interactive console
#[derive(Parser, Debug)]
#[command(name = "linekv")]
#[command(about = "Append-only text log key-value store")]
#[command(version)]
struct Args {
    /// Directory holding `store` and `store.meta` (overrides --log/--meta)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Primary log file
    #[arg(short, long, default_value = "./store")]
    log: PathBuf,

    /// Offset metadata file
    #[arg(short, long, default_value = "./store.meta")]
    meta: PathBuf,
}

fn main() {
    // Logs go to stderr; stdout carries command results
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,linekv=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let config = match args.data_dir {
        Some(dir) => Config::in_dir(dir),
        None => Config::builder().log_path(args.log).meta_path(args.meta).build(),
    };

    tracing::info!("LineKV v{}", linekv::VERSION);
    tracing::info!("Log file: {}", config.log_path.display());
    tracing::info!("Metadata file: {}", config.meta_path.display());

    if let Err(e) = ensure_storage_files(&config) {
        tracing::error!("Failed to prepare storage files: {}", e);
        std::process::exit(1);
    }

    let store = RecordStore::open(&config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = console::run(&store, stdin.lock(), stdout.lock()) {
        println!("quit due to error: {e}");
        std::process::exit(1);
    }

    println!("bye~");
}
