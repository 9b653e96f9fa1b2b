//! Error type definitions.

use std::path::PathBuf;

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for reading and decoding the RDAP input document.
#[derive(Error, Debug)]
pub enum InputError {
    /// The input document could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// Path that failed to read ("-" for stdin)
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The input document is not well-formed JSON or does not match the
    /// RDAP domain record shape.
    #[error("Invalid RDAP JSON: {0}")]
    Json(#[from] serde_json::Error),
}
