//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a roster file
///
/// Malformed lines are not errors; the parser skips them.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Cannot read roster file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ParseError {
    /// True when the roster file does not exist
    pub fn is_not_found(&self) -> bool {
        match self {
            ParseError::Io { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
        }
    }
}

/// Errors that can occur during report output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to access report file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
