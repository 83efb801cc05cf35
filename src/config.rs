//! Configuration for LineKV
//!
//! Centralized configuration with sensible defaults.

use std::path::{Path, PathBuf};

/// Main configuration for a LineKV instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Primary append-only log (one `key : value,` record per line)
    pub log_path: PathBuf,

    /// Offset metadata stream (concatenated pretty-printed JSON objects)
    pub meta_path: PathBuf,
}

impl Config {
    /// Default primary log file name
    pub const LOG_FILENAME: &'static str = "store";

    /// Default metadata file name
    pub const META_FILENAME: &'static str = "store.meta";

    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Config with both files placed inside `dir`
    ///
    /// ```text
    /// {dir}/
    ///   ├── store        (primary log)
    ///   └── store.meta   (offset index)
    /// ```
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::builder().data_dir(dir).build()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from(".").join(Self::LOG_FILENAME),
            meta_path: PathBuf::from(".").join(Self::META_FILENAME),
        }
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Place both storage files inside a directory, using default names
    pub fn data_dir(mut self, dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        self.config.log_path = dir.join(Config::LOG_FILENAME);
        self.config.meta_path = dir.join(Config::META_FILENAME);
        self
    }

    /// Set the primary log path
    pub fn log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.log_path = path.into();
        self
    }

    /// Set the metadata (offset index) path
    pub fn meta_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.meta_path = path.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
