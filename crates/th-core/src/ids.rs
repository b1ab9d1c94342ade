//! Prefixed random IDs for identities and history entries.
//!
//! IDs look like `usr-a3f8b2c1`: a short prefix, a dash, and 4 random bytes
//! hex-encoded. Uniqueness is all that is required; ordering comes from the
//! timestamps stored alongside.

use crate::errors::CoreError;

pub const PREFIX_IDENTITY: &str = "usr";
pub const PREFIX_HISTORY: &str = "hst";

/// Generate a fresh prefixed ID.
///
/// # Errors
///
/// Returns `CoreError::IdGeneration` if the OS entropy source fails.
pub fn generate_id(prefix: &str) -> Result<String, CoreError> {
    let mut bytes = [0u8; 4];
    getrandom::fill(&mut bytes).map_err(|e| CoreError::IdGeneration(format!("{e}")))?;
    let hex: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
    Ok(format!("{prefix}-{hex}"))
}
