//! Telbook Error Types
//!
//! Centralized error handling for the address book.

use std::path::PathBuf;
use thiserror::Error;

/// Central error type for Telbook
#[derive(Error, Debug)]
pub enum BookError {
    #[error("Resource exhausted: {0}")]
    Resource(String),

    #[error("Cannot access the record book file '{}': {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed record on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("Invalid {field} '{value}': must be non-empty and contain no whitespace")]
    InvalidField { field: &'static str, value: String },

    #[error("Bad argument: {0}")]
    BadArgument(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Telbook operations
pub type BookResult<T> = Result<T, BookError>;

impl From<std::collections::TryReserveError> for BookError {
    fn from(err: std::collections::TryReserveError) -> Self {
        BookError::Resource(err.to_string())
    }
}

impl BookError {
    /// Wrap an I/O failure on the backing file
    pub fn file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BookError::File {
            path: path.into(),
            source,
        }
    }
}
