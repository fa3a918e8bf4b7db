//! Error types for netmerge-cli

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for netmerge-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in netmerge-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from netmerge-core
    #[error(transparent)]
    Core(#[from] netmerge_core::Error),

    /// Configuration file could not be parsed
    #[error("Invalid configuration in {}: {message}", path.display())]
    Config {
        /// Configuration file that was rejected
        path: PathBuf,
        /// Parser message
        message: String,
    },

    /// Progress or report output could not be written
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl Error {
    /// Creates a configuration error for the given file.
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Error::Config {
            path: path.into(),
            message: message.into(),
        }
    }
}
