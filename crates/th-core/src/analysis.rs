//! Analysis result types for every verification kind.
//!
//! The structured types use camelCase wire names because the reasoning
//! service produces them against our declared response shapes. The closed
//! [`AnalysisResult`] sum type is what the reply decoder returns: one
//! variant per analysis kind, each either fully populated or not at all.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Citation;
use crate::enums::{AnalysisKind, ResourceKind, RiskLevel};

/// Verdict on the security and validity of an email address.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmailSecurityVerdict {
    pub is_valid: bool,
    pub is_safe: bool,
    pub reason: String,
    /// Trust score for the address's domain, 0–100.
    pub domain_trust_score: u8,
}

/// Risk assessment of a job posting or recruiter communication.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScamVerdict {
    /// Trust score 0–100, 100 being most trustworthy.
    pub score: u8,
    pub risk_level: RiskLevel,
    pub red_flags: Vec<String>,
    /// Short summary of the findings.
    pub verdict: String,
    pub recommendations: Vec<String>,
}

/// One suggested career path for a skill set.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CareerSuggestion {
    pub role: String,
    pub description: String,
    pub matching_skills: Vec<String>,
    pub top_companies: Vec<String>,
}

/// One suggested learning resource for an interest list.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpskillingResource {
    pub title: String,
    pub description: String,
    pub provider: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating_info: Option<String>,
}

/// Decoded reply from the reasoning service, one variant per analysis kind.
///
/// Every structured variant fully satisfies its declared field set; the
/// decoder never produces a partially populated value. `CompanyLegitimacy`
/// carries the reply text verbatim; it is the one kind without a declared shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisResult {
    EmailSecurity(EmailSecurityVerdict),
    Scam(ScamVerdict),
    CareerGuidance(Vec<CareerSuggestion>),
    Upskilling(Vec<UpskillingResource>),
    CompanyLegitimacy(String),
}

impl AnalysisResult {
    /// The analysis kind that produced this result.
    #[must_use]
    pub const fn kind(&self) -> AnalysisKind {
        match self {
            Self::EmailSecurity(_) => AnalysisKind::EmailSecurity,
            Self::Scam(_) => AnalysisKind::ScamAudit,
            Self::CareerGuidance(_) => AnalysisKind::CareerGuidance,
            Self::Upskilling(_) => AnalysisKind::Upskilling,
            Self::CompanyLegitimacy(_) => AnalysisKind::CompanyLegitimacy,
        }
    }
}

/// An analysis result paired with the web citations that grounded it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grounded<T> {
    pub analysis: T,
    pub citations: Vec<Citation>,
}
