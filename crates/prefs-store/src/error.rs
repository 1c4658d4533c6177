//! Error types for prefs-store

use std::path::PathBuf;

/// Result type for prefs-store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading or writing a preference node
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} preferences at {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Failed to serialize {format} preferences for {path}: {message}")]
    ConfigSerialize {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Unsupported preferences format: {extension}")]
    UnsupportedFormat { extension: String },

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },

    /// The backend behind a preference node refused an operation
    #[error("Backing store failure in node '{node}': {message}")]
    BackingStore { node: String, message: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn backing_store(node: impl Into<String>, message: impl Into<String>) -> Self {
        Self::BackingStore {
            node: node.into(),
            message: message.into(),
        }
    }
}
