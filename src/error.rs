//! Error types for LineKV
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using LineKvError
pub type Result<T> = std::result::Result<T, LineKvError>;

/// Unified error type for LineKV operations
#[derive(Debug, Error)]
pub enum LineKvError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Lookup Errors
    // -------------------------------------------------------------------------
    #[error("no record found for key '{key}'")]
    NotFound { key: String },

    // -------------------------------------------------------------------------
    // Store / Index Consistency Errors
    // -------------------------------------------------------------------------
    /// The log append went through but the index update did not.
    /// The appended record is not rolled back.
    #[error("wrote {written} bytes to log but index update failed: {source}")]
    IndexDesync {
        written: usize,
        #[source]
        source: Box<LineKvError>,
    },

    #[error("unable to remove record because line {line} is out of bound (1..={line_count})")]
    BoundsViolation { line: usize, line_count: usize },

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(String),

    // -------------------------------------------------------------------------
    // Input Errors
    // -------------------------------------------------------------------------
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Command error: {0}")]
    Command(String),
}

impl From<serde_json::Error> for LineKvError {
    fn from(err: serde_json::Error) -> Self {
        // serde_json wraps I/O failures from the underlying reader/writer
        if err.is_io() {
            return LineKvError::Io(err.into());
        }
        LineKvError::Serialization(err.to_string())
    }
}

impl LineKvError {
    /// Whether this error means the key was absent from the log
    pub fn is_not_found(&self) -> bool {
        matches!(self, LineKvError::NotFound { .. })
    }
}
