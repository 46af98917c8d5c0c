use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be parsed or a value has the wrong type.
    #[error("failed to load configuration: {0}")]
    Figment(#[from] figment::Error),

    /// A section the command needs is missing its required values.
    #[error("'{section}' is not configured: {hint}")]
    NotConfigured {
        section: &'static str,
        hint: &'static str,
    },

    #[error("invalid value for '{field}': {reason}")]
    InvalidValue {
        field: &'static str,
        reason: &'static str,
    },
}
