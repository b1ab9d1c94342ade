//! Analysis kinds and status enums for TrustHire.
//!
//! Enums that only live in the local store serialize as `snake_case`.
//! Enums that appear inside declared response shapes (`RiskLevel`,
//! `ResourceKind`) keep their capitalized variant names, because those are
//! the exact strings the reasoning service is instructed to return.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// AnalysisKind
// ---------------------------------------------------------------------------

/// One of the five verification/guidance operations the orchestration layer
/// exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisKind {
    EmailSecurity,
    ScamAudit,
    CareerGuidance,
    Upskilling,
    CompanyLegitimacy,
}

impl AnalysisKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EmailSecurity => "email_security",
            Self::ScamAudit => "scam_audit",
            Self::CareerGuidance => "career_guidance",
            Self::Upskilling => "upskilling",
            Self::CompanyLegitimacy => "company_legitimacy",
        }
    }

    /// Fallback title for a grounding chunk that carries a URI but no title.
    #[must_use]
    pub const fn citation_fallback_title(self) -> &'static str {
        match self {
            Self::EmailSecurity => "Security Context",
            Self::ScamAudit => "External Source",
            Self::CareerGuidance | Self::Upskilling => "Source",
            Self::CompanyLegitimacy => "Verification Link",
        }
    }
}

impl fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RiskLevel
// ---------------------------------------------------------------------------

/// Risk level assigned by a scam audit.
///
/// Wire strings are the capitalized variant names (`"Low"`, `"Medium"`,
/// `"High"`), matching the declared response shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// History status recorded for a scam audit at this risk level.
    #[must_use]
    pub const fn history_status(self) -> HistoryStatus {
        match self {
            Self::Low => HistoryStatus::Safe,
            Self::Medium => HistoryStatus::Warning,
            Self::High => HistoryStatus::HighRisk,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// HistoryKind
// ---------------------------------------------------------------------------

/// Category of a recorded activity entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum HistoryKind {
    ScamCheck,
    CompanyVerify,
    CareerGuidance,
}

impl HistoryKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ScamCheck => "scam_check",
            Self::CompanyVerify => "company_verify",
            Self::CareerGuidance => "career_guidance",
        }
    }
}

impl fmt::Display for HistoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// HistoryStatus
// ---------------------------------------------------------------------------

/// Outcome badge attached to a history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum HistoryStatus {
    Safe,
    Warning,
    HighRisk,
    Verified,
}

impl HistoryStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::Warning => "warning",
            Self::HighRisk => "high_risk",
            Self::Verified => "verified",
        }
    }
}

impl fmt::Display for HistoryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ResourceKind
// ---------------------------------------------------------------------------

/// Kind of a suggested learning resource.
///
/// Wire strings are the capitalized variant names (`"Video"`, `"Course"`,
/// `"Article"`), matching the declared response shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum ResourceKind {
    Video,
    Course,
    Article,
}

impl ResourceKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Video => "Video",
            Self::Course => "Course",
            Self::Article => "Article",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
