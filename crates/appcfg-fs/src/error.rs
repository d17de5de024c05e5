//! Error types for appcfg-fs

use std::path::PathBuf;

/// Result type for appcfg-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in appcfg-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON at {path}: {message}")]
    JsonParse { path: PathBuf, message: String },

    #[error("Failed to serialize JSON for {path}: {message}")]
    JsonSerialize { path: PathBuf, message: String },

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error means the file simply does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}
