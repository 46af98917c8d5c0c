//! Store error types for acad-store.

use std::path::PathBuf;

use acad_core::errors::CoreError;
use thiserror::Error;

/// Errors from snapshot persistence and store mutations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing a snapshot file failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A collection could not be serialized.
    #[error("Serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Keys must be non-empty and use only `[A-Za-z0-9_-]`.
    #[error("Invalid store key: {0:?}")]
    InvalidKey(String),

    /// Domain error (missing reference, validation).
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
