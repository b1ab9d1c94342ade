//! Schema validation error types.

use th_core::enums::AnalysisKind;
use thiserror::Error;

/// Errors from the schema registry.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The analysis kind declares no output shape.
    #[error("No output shape declared for analysis kind: {0}")]
    Undeclared(AnalysisKind),

    /// JSON value did not pass schema validation.
    #[error("Validation failed: {errors:?}")]
    ValidationFailed {
        /// Individual error messages from the validator.
        errors: Vec<String>,
    },

    /// Schema generation or compilation error.
    #[error("Schema generation error: {0}")]
    Generation(String),
}
