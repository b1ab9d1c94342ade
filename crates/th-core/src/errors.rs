//! Cross-cutting error types for TrustHire.
//!
//! Domain-specific errors (`GeminiError`, `SessionError`, `VerifyError`) are
//! defined in their respective crates; only errors that can originate from
//! this crate's helpers live here.

use thiserror::Error;

/// Errors raised by th-core helpers.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The OS entropy source failed while generating an ID.
    #[error("ID generation failed: {0}")]
    IdGeneration(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
