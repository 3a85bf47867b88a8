//! Snapshot storage error types

use thiserror::Error;

/// Errors that can occur during snapshot load/save operations
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Underlying storage I/O failed
    #[error("Snapshot I/O failed for key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// The stored document could not be handled
    #[error("Snapshot for key '{key}' is unusable: {message}")]
    Corrupt { key: String, message: String },
}

impl SnapshotError {
    /// Creates an I/O error for a specific key
    pub fn io(key: impl Into<String>, source: std::io::Error) -> Self {
        SnapshotError::Io {
            key: key.into(),
            source,
        }
    }

    /// Creates a corrupt-document error for a specific key
    pub fn corrupt(key: impl Into<String>, message: impl Into<String>) -> Self {
        SnapshotError::Corrupt {
            key: key.into(),
            message: message.into(),
        }
    }
}
