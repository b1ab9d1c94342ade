//! Structured reply decoding.
//!
//! When a kind declares an output shape, decoding is all-or-nothing: the
//! body must parse as JSON, pass validation against the declared shape, and
//! deserialize into the typed result. Any failure yields
//! [`GeminiError::Decode`] with the raw body attached, never a partially
//! populated result, because downstream code (history titles, risk badges)
//! indexes required fields unconditionally.
//!
//! The company-legitimacy kind declares no shape; its body passes through
//! verbatim as narrative text.

use serde::de::DeserializeOwned;

use th_core::analysis::{
    AnalysisResult, CareerSuggestion, EmailSecurityVerdict, ScamVerdict, UpskillingResource,
};
use th_core::enums::AnalysisKind;
use th_schema::{SchemaError, SchemaRegistry};

use crate::error::GeminiError;

/// Decode a raw reply body into the result variant for `kind`.
///
/// # Errors
///
/// Returns [`GeminiError::Decode`] if the body is not valid JSON, fails
/// validation against the declared shape, or does not deserialize into the
/// kind's result type.
pub fn decode(
    kind: AnalysisKind,
    body: &str,
    schemas: &SchemaRegistry,
) -> Result<AnalysisResult, GeminiError> {
    match kind {
        AnalysisKind::EmailSecurity => {
            decode_structured::<EmailSecurityVerdict>(kind, body, schemas)
                .map(AnalysisResult::EmailSecurity)
        }
        AnalysisKind::ScamAudit => {
            decode_structured::<ScamVerdict>(kind, body, schemas).map(AnalysisResult::Scam)
        }
        AnalysisKind::CareerGuidance => {
            decode_structured::<Vec<CareerSuggestion>>(kind, body, schemas)
                .map(AnalysisResult::CareerGuidance)
        }
        AnalysisKind::Upskilling => decode_structured::<Vec<UpskillingResource>>(kind, body, schemas)
            .map(AnalysisResult::Upskilling),
        // No declared shape: the narrative text is the result, verbatim.
        AnalysisKind::CompanyLegitimacy => {
            Ok(AnalysisResult::CompanyLegitimacy(body.to_string()))
        }
    }
}

/// Parse, validate against the declared shape, then deserialize.
fn decode_structured<T: DeserializeOwned>(
    kind: AnalysisKind,
    body: &str,
    schemas: &SchemaRegistry,
) -> Result<T, GeminiError> {
    let value: serde_json::Value = serde_json::from_str(body.trim())
        .map_err(|e| decode_error(format!("reply is not valid JSON: {e}"), body))?;

    schemas.validate(kind, &value).map_err(|e| match e {
        SchemaError::ValidationFailed { errors } => decode_error(
            format!("reply violates the declared shape: {}", errors.join("; ")),
            body,
        ),
        other => decode_error(format!("{other}"), body),
    })?;

    serde_json::from_value(value)
        .map_err(|e| decode_error(format!("reply does not deserialize: {e}"), body))
}

fn decode_error(reason: String, raw: &str) -> GeminiError {
    GeminiError::Decode {
        reason,
        raw: raw.to_string(),
    }
}
