//! ID prefix constants and generation.
//!
//! Generated IDs have the form `{prefix}-{8 hex chars}`, e.g. `sub-a3f8b2c1`.
//! Topic IDs returned by the AI collaborator are kept verbatim when present.

use crate::errors::CoreError;

pub const PREFIX_SUBJECT: &str = "sub";
pub const PREFIX_TOPIC: &str = "top";
pub const PREFIX_SUBTOPIC: &str = "stp";
pub const PREFIX_PAPER: &str = "pap";
pub const PREFIX_QUESTION: &str = "qst";

/// Generate a random ID with the given prefix.
///
/// # Errors
///
/// Returns [`CoreError::Other`] if the OS random source is unavailable.
pub fn gen_id(prefix: &str) -> Result<String, CoreError> {
    let mut bytes = [0u8; 4];
    getrandom::fill(&mut bytes)
        .map_err(|e| CoreError::Other(anyhow::anyhow!("failed to generate id: {e}")))?;
    let suffix: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
    Ok(format!("{prefix}-{suffix}"))
}
