//! Generative-AI service configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default model used for all three AI operations.
fn default_model() -> String {
    String::from("gemini-3-flash-preview")
}

/// Default Gemini REST endpoint.
fn default_endpoint() -> String {
    String::from("https://generativelanguage.googleapis.com")
}

/// Default per-request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    60
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AiConfig {
    /// API key for the generative-AI service.
    #[serde(default)]
    pub api_key: String,

    /// Model name, e.g. `gemini-3-flash-preview`.
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the REST API (no trailing path).
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Per-request timeout enforced by the HTTP transport.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl AiConfig {
    /// Check if the AI config has the minimum required fields.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Return an error unless the section is usable.
    ///
    /// # Errors
    ///
    /// [`ConfigError::NotConfigured`] without an API key,
    /// [`ConfigError::InvalidValue`] for an empty model or zero timeout.
    pub fn ensure_configured(&self) -> Result<(), ConfigError> {
        if !self.is_configured() {
            return Err(ConfigError::NotConfigured {
                section: "ai",
                hint: "set ai.api_key or ACAD_AI__API_KEY",
            });
        }
        if self.model.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "ai.model",
                reason: "must not be empty",
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "ai.timeout_secs",
                reason: "must be greater than zero",
            });
        }
        Ok(())
    }
}
