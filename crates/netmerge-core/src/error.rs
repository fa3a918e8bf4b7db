//! Error types for netmerge-core.

use std::path::{Path, PathBuf};

/// Errors that can occur while reading or writing net group files.
///
/// Malformed input lines are never errors; the parser skips them.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// I/O failure tied to a specific file.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File being read or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Convenience `Result` type alias for netmerge operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates an I/O error for the given path.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Returns the file this error concerns.
    pub fn path(&self) -> &Path {
        match self {
            Error::Io { path, .. } => path,
        }
    }
}
