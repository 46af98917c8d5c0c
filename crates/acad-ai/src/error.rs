//! AI client error types.

use acad_core::errors::CoreError;
use thiserror::Error;

/// Errors that can occur when talking to the generative-AI service.
///
/// Malformed response *content* is not an error: it parses to an empty
/// result. These variants cover transport and protocol failures only.
#[derive(Debug, Error)]
pub enum AiError {
    /// HTTP transport error (connect failure, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the service.
        status: u16,
        /// Error message extracted from the response body.
        message: String,
    },

    /// The service returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// No API key is configured.
    #[error("AI service not configured: set ai.api_key or ACAD_AI__API_KEY")]
    NotConfigured,

    /// The response envelope could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),

    /// Post-processing of a parsed result failed (id generation).
    #[error(transparent)]
    Core(#[from] CoreError),
}
