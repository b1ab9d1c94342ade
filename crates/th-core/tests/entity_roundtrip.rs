//! Serde roundtrip and JsonSchema validation tests for entity and analysis types.

use chrono::Utc;
use schemars::schema_for;
use th_core::analysis::*;
use th_core::entities::*;
use th_core::enums::*;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            // Serde roundtrip
            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            // Schema validation
            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

roundtrip_and_validate!(
    identity_record_roundtrip,
    IdentityRecord,
    IdentityRecord {
        id: "usr-a3f8b2c1".into(),
        display_name: "Jane Doe".into(),
        email: "jane.doe@example.com".into(),
        skills: vec!["Research".into(), "Analysis".into()],
        authenticated: true,
        avatar_ref: "https://api.dicebear.com/7.x/initials/svg?seed=Jane%20Doe".into(),
        history: vec![HistoryEntry {
            id: "hst-deadbeef".into(),
            kind: HistoryKind::ScamCheck,
            title: "Likely recruitment fraud...".into(),
            status: HistoryStatus::HighRisk,
            timestamp: Utc::now(),
        }],
    }
);

roundtrip_and_validate!(
    history_entry_roundtrip,
    HistoryEntry,
    HistoryEntry {
        id: "hst-00c0ffee".into(),
        kind: HistoryKind::CareerGuidance,
        title: "Path analysis for 3 skills".into(),
        status: HistoryStatus::Safe,
        timestamp: Utc::now(),
    }
);

roundtrip_and_validate!(
    citation_roundtrip,
    Citation,
    Citation {
        title: "Better Business Bureau".into(),
        url: "https://bbb.org/some-company".into(),
    }
);

roundtrip_and_validate!(
    email_security_verdict_roundtrip,
    EmailSecurityVerdict,
    EmailSecurityVerdict {
        is_valid: true,
        is_safe: false,
        reason: "disposable domain".into(),
        domain_trust_score: 8,
    }
);

roundtrip_and_validate!(
    scam_verdict_roundtrip,
    ScamVerdict,
    ScamVerdict {
        score: 12,
        risk_level: RiskLevel::High,
        red_flags: vec!["upfront payment request".into()],
        verdict: "Likely recruitment fraud".into(),
        recommendations: vec!["Do not wire money".into(), "Report the posting".into()],
    }
);

roundtrip_and_validate!(
    career_suggestion_roundtrip,
    CareerSuggestion,
    CareerSuggestion {
        role: "Site Reliability Engineer".into(),
        description: "Keeps large distributed systems healthy.".into(),
        matching_skills: vec!["Linux".into(), "Rust".into()],
        top_companies: vec!["Cloudflare".into(), "Fastly".into()],
    }
);

roundtrip_and_validate!(
    upskilling_resource_roundtrip,
    UpskillingResource,
    UpskillingResource {
        title: "Rust async deep dive".into(),
        description: "Playlist covering tokio from scratch".into(),
        provider: "YouTube".into(),
        url: "https://youtube.com/playlist?list=abc".into(),
        kind: ResourceKind::Video,
        rating_info: Some("4.9/5".into()),
    }
);

#[test]
fn email_verdict_missing_field_fails_schema_validation() {
    let schema = serde_json::to_value(schema_for!(EmailSecurityVerdict)).unwrap();
    let instance = serde_json::json!({
        "isValid": true,
        "isSafe": true,
        "reason": "ok"
        // domainTrustScore missing
    });
    let errors = validate_against_schema(&schema, &instance);
    assert!(!errors.is_empty());
}
