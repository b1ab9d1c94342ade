//! Session store error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    /// File I/O against the session slot failed. The message carries the
    /// path and the underlying cause.
    #[error("session store error: {0}")]
    Store(String),

    /// The persisted record could not be deserialized.
    #[error("corrupt session record: {0}")]
    Corrupt(#[from] serde_json::Error),

    /// Error from a th-core helper (ID generation).
    #[error(transparent)]
    Core(#[from] th_core::errors::CoreError),
}
