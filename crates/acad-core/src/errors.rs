//! Cross-cutting error types for AcademiSync.
//!
//! Domain-specific errors (e.g., `StoreError`, `AiError`) are defined in their
//! respective crates. Errors converge into `anyhow` in `acad-cli`.

use thiserror::Error;

/// Errors that can be raised by any AcademiSync crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Data failed validation (marks, empty drafts, malformed input).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    pub(crate) fn not_found(entity_type: &str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: entity_type.to_string(),
            id: id.into(),
        }
    }
}
