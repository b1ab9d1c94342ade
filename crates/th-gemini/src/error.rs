//! Reasoning service error types.

use thiserror::Error;

/// Errors that can occur during one analysis call.
///
/// `Http`, `Api`, `RateLimited` and `EmptyReply` are service failures; the
/// call itself did not produce a usable reply. `Decode` means the service
/// replied but the body did not conform to the declared output shape;
/// callers treat both families as "analysis failed, try again", the split
/// exists for diagnostics.
#[derive(Debug, Error)]
pub enum GeminiError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the service.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The service returned a 429 Too Many Requests response.
    #[error("rate limited — retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds the service asked us to wait. Informational only; no
        /// retry is performed.
        retry_after_secs: u64,
    },

    /// The reply carried no candidates or no text content.
    #[error("service reply contained no content")]
    EmptyReply,

    /// The reply body did not conform to the declared output shape.
    #[error("decode error: {reason}")]
    Decode {
        /// What went wrong (parse failure, validation errors, type mismatch).
        reason: String,
        /// The raw reply body, kept verbatim for diagnostics.
        raw: String,
    },

    /// No API key is configured for the service.
    #[error("reasoning service is not configured (missing API key)")]
    NotConfigured,
}
