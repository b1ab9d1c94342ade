//! Declared output shapes per analysis kind.
//!
//! The `SchemaRegistry` builds JSON Schemas from th-core result types at
//! construction time using [`schemars::schema_for!`] and provides validation
//! via `jsonschema`.

use std::collections::HashMap;

use schemars::schema_for;

use th_core::analysis::{CareerSuggestion, EmailSecurityVerdict, ScamVerdict, UpskillingResource};
use th_core::enums::AnalysisKind;

use crate::error::SchemaError;

/// The output shape declared for each structured analysis kind.
///
/// Built from th-core types via [`schemars::schema_for!`]. Provides lookup by
/// kind and validation of raw reply values against the declared shape.
/// `CompanyLegitimacy` has no entry: that kind returns free narrative text.
pub struct SchemaRegistry {
    schemas: HashMap<AnalysisKind, serde_json::Value>,
}

/// Insert a shape into the map, converting the `schemars` output to a
/// `serde_json::Value`. Panics if `serde_json::to_value` fails (should be
/// infallible for valid `schemars` output).
macro_rules! declare {
    ($map:expr, $kind:expr, $ty:ty) => {
        $map.insert($kind, serde_json::to_value(schema_for!($ty)).unwrap());
    };
}

impl SchemaRegistry {
    /// Build a new registry containing the declared shape for every
    /// structured analysis kind.
    ///
    /// # Panics
    ///
    /// Panics if `serde_json::to_value` fails on any `schemars`-generated
    /// schema. This is not expected in practice because `schemars` always
    /// produces valid JSON-serialisable output.
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = HashMap::new();

        declare!(schemas, AnalysisKind::EmailSecurity, EmailSecurityVerdict);
        declare!(schemas, AnalysisKind::ScamAudit, ScamVerdict);
        declare!(schemas, AnalysisKind::CareerGuidance, Vec<CareerSuggestion>);
        declare!(schemas, AnalysisKind::Upskilling, Vec<UpskillingResource>);
        // AnalysisKind::CompanyLegitimacy: intentionally undeclared; the
        // reply is narrative text, not a schema-validated object.

        Self { schemas }
    }

    /// Get the declared shape for a kind. Returns `None` for kinds without
    /// one (company legitimacy).
    #[must_use]
    pub fn get(&self, kind: AnalysisKind) -> Option<&serde_json::Value> {
        self.schemas.get(&kind)
    }

    /// Validate a JSON value against a kind's declared shape.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Undeclared` if the kind has no declared shape,
    /// or `SchemaError::ValidationFailed` if validation produces errors.
    pub fn validate(
        &self,
        kind: AnalysisKind,
        instance: &serde_json::Value,
    ) -> Result<(), SchemaError> {
        let schema = self.get(kind).ok_or(SchemaError::Undeclared(kind))?;

        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SchemaError::Generation(format!("{e}")))?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{e}"))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { errors })
        }
    }

    /// Number of declared shapes.
    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn registry() -> SchemaRegistry {
        SchemaRegistry::new()
    }

    #[test]
    fn four_of_five_kinds_declare_a_shape() {
        let reg = registry();
        assert_eq!(reg.schema_count(), 4);
        assert!(reg.get(AnalysisKind::EmailSecurity).is_some());
        assert!(reg.get(AnalysisKind::ScamAudit).is_some());
        assert!(reg.get(AnalysisKind::CareerGuidance).is_some());
        assert!(reg.get(AnalysisKind::Upskilling).is_some());
    }

    #[test]
    fn company_legitimacy_is_undeclared() {
        let reg = registry();
        assert!(reg.get(AnalysisKind::CompanyLegitimacy).is_none());
        let err = reg
            .validate(AnalysisKind::CompanyLegitimacy, &json!({}))
            .unwrap_err();
        assert!(matches!(
            err,
            SchemaError::Undeclared(AnalysisKind::CompanyLegitimacy)
        ));
    }

    #[test]
    fn full_email_verdict_validates() {
        let reg = registry();
        let instance = json!({
            "isValid": true,
            "isSafe": false,
            "reason": "disposable domain",
            "domainTrustScore": 8
        });
        reg.validate(AnalysisKind::EmailSecurity, &instance)
            .expect("full verdict should validate");
    }

    #[test]
    fn missing_required_field_fails_validation() {
        let reg = registry();
        let instance = json!({
            "isValid": true,
            "isSafe": true,
            "reason": "ok"
            // domainTrustScore missing
        });
        let err = reg
            .validate(AnalysisKind::EmailSecurity, &instance)
            .unwrap_err();
        assert!(matches!(err, SchemaError::ValidationFailed { .. }));
    }

    #[test]
    fn mistyped_field_fails_validation() {
        let reg = registry();
        let instance = json!({
            "isValid": "yes",
            "isSafe": true,
            "reason": "ok",
            "domainTrustScore": 80
        });
        let err = reg
            .validate(AnalysisKind::EmailSecurity, &instance)
            .unwrap_err();
        assert!(matches!(err, SchemaError::ValidationFailed { .. }));
    }

    #[test]
    fn career_guidance_shape_is_an_array() {
        let reg = registry();
        let instance = json!([{
            "role": "Data Engineer",
            "description": "Builds pipelines.",
            "matchingSkills": ["SQL", "Python"],
            "topCompanies": ["Snowflake"]
        }]);
        reg.validate(AnalysisKind::CareerGuidance, &instance)
            .expect("array of suggestions should validate");

        let not_an_array = json!({"role": "Data Engineer"});
        assert!(reg
            .validate(AnalysisKind::CareerGuidance, &not_an_array)
            .is_err());
    }
}
