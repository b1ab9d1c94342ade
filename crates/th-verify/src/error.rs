//! Facade error types.
//!
//! Service and decode failures both surface as `Gemini`; callers treat them
//! as "analysis failed, try again"; the split inside [`th_gemini::GeminiError`]
//! exists for diagnostics. `EmailRejected` is the one business-rule refusal:
//! it carries the human-readable reason used to abort sign-up. Every failure
//! is local to one call and leaves the store untouched.

use th_core::enums::AnalysisKind;
use th_core::errors::CoreError;
use th_gemini::GeminiError;
use th_session::SessionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VerifyError {
    /// The external call failed or its reply did not decode.
    #[error(transparent)]
    Gemini(#[from] GeminiError),

    /// The session store failed.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// Error from a th-core helper (ID generation).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A scam audit was requested with neither text nor an attachment.
    #[error("scam audit requires text or an attachment")]
    MissingEvidence,

    /// A required input was empty.
    #[error("{what} must not be empty")]
    EmptyInput { what: &'static str },

    /// The email-safety gate refused a sign-up.
    #[error("email security check refused: {reason}")]
    EmailRejected { reason: String },

    /// The decoder returned a variant for a different kind than requested.
    #[error("decoder returned {got} for a {expected} request")]
    UnexpectedVariant {
        expected: AnalysisKind,
        got: AnalysisKind,
    },
}
