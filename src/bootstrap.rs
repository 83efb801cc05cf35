//! Storage bootstrap
//!
//! Run once before constructing a `RecordStore` so reads against a fresh
//! installation see an empty log instead of a missing file.

use std::fs::{self, OpenOptions};
use std::path::Path;

use crate::config::Config;
use crate::error::Result;

/// Create the log and metadata files (and their parent directories) if
/// they do not exist yet. Existing files are left untouched.
pub fn ensure_storage_files(config: &Config) -> Result<()> {
    for path in [&config.log_path, &config.meta_path] {
        ensure_file(path)?;
    }
    Ok(())
}

fn ensure_file(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    if !path.exists() {
        // create + append: never truncates
        OpenOptions::new().create(true).append(true).open(path)?;
        tracing::info!(path = %path.display(), "created storage file");
    }
    Ok(())
}
