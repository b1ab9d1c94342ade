//! The per-kind analysis operations.

use th_config::TrustHireConfig;
use th_core::analysis::{
    AnalysisResult, CareerSuggestion, EmailSecurityVerdict, Grounded, ScamVerdict,
    UpskillingResource,
};
use th_core::entities::Citation;
use th_core::enums::{AnalysisKind, HistoryKind, HistoryStatus};
use th_gemini::{AnalysisRequest, GeminiClient, InlineMedia, citations, decode};
use th_schema::SchemaRegistry;
use th_session::SessionStore;

use crate::error::VerifyError;

/// Number of verdict characters kept in a scam-check history title.
const SCAM_TITLE_LEN: usize = 40;

/// Composes the verification pipeline for every analysis kind.
///
/// Construct once per session and pass by reference; the store it wraps is
/// the single owner of the persisted identity record.
pub struct VerifyService {
    client: GeminiClient,
    schemas: SchemaRegistry,
    store: SessionStore,
}

impl VerifyService {
    /// Build a service from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns `VerifyError` if the service client is unconfigured or the
    /// default store location cannot be resolved.
    pub fn from_config(config: &TrustHireConfig) -> Result<Self, VerifyError> {
        let client = GeminiClient::from_config(&config.gemini)?;
        let store = match config.session.store_path() {
            Some(path) => SessionStore::open(path),
            None => SessionStore::open_default()?,
        };
        Ok(Self::new(client, SchemaRegistry::new(), store))
    }

    /// Assemble a service from parts. This is the composition seam used by
    /// tests and by callers that manage their own store location.
    #[must_use]
    pub fn new(client: GeminiClient, schemas: SchemaRegistry, store: SessionStore) -> Self {
        Self {
            client,
            schemas,
            store,
        }
    }

    /// Check the security and validity of an email address. Does not record
    /// history; the sign-up gate uses this internally.
    ///
    /// # Errors
    ///
    /// Returns `VerifyError::EmptyInput` for an empty email, or a service
    /// or decode failure.
    pub async fn check_email_security(
        &self,
        email: &str,
    ) -> Result<Grounded<EmailSecurityVerdict>, VerifyError> {
        if email.trim().is_empty() {
            return Err(VerifyError::EmptyInput { what: "email" });
        }
        let request = AnalysisRequest::email_security(email, &self.schemas);
        let (result, citations) = self.run(&request).await?;
        let analysis = match result {
            AnalysisResult::EmailSecurity(verdict) => verdict,
            other => return Err(unexpected(AnalysisKind::EmailSecurity, &other)),
        };
        Ok(Grounded {
            analysis,
            citations,
        })
    }

    /// Audit a job posting or recruiter communication for scam signals.
    ///
    /// At least one of `text` / `media` must be present. On success a
    /// scam-check history entry is recorded with the status derived from the
    /// verdict's risk level.
    ///
    /// # Errors
    ///
    /// Returns `VerifyError::MissingEvidence` when both inputs are empty, or
    /// a service, decode, or store failure.
    pub async fn audit_job_posting(
        &self,
        text: &str,
        media: Option<InlineMedia>,
    ) -> Result<Grounded<ScamVerdict>, VerifyError> {
        if text.trim().is_empty() && media.is_none() {
            return Err(VerifyError::MissingEvidence);
        }
        let request = AnalysisRequest::scam_audit(text, media, &self.schemas);
        let (result, citations) = self.run(&request).await?;
        let analysis = match result {
            AnalysisResult::Scam(verdict) => verdict,
            other => return Err(unexpected(AnalysisKind::ScamAudit, &other)),
        };

        self.store.append_history(
            HistoryKind::ScamCheck,
            scam_history_title(&analysis.verdict),
            analysis.risk_level.history_status(),
        )?;

        Ok(Grounded {
            analysis,
            citations,
        })
    }

    /// Suggest career paths for a skill list. The one kind that reasons
    /// without web grounding, so no citations accompany the result. Records
    /// a career-guidance history entry.
    ///
    /// # Errors
    ///
    /// Returns `VerifyError::EmptyInput` for an empty skill list, or a
    /// service, decode, or store failure.
    pub async fn career_guidance(
        &self,
        skills: &[String],
    ) -> Result<Vec<CareerSuggestion>, VerifyError> {
        if skills.is_empty() {
            return Err(VerifyError::EmptyInput { what: "skills" });
        }
        let request = AnalysisRequest::career_guidance(skills, &self.schemas);
        let (result, _) = self.run(&request).await?;
        let suggestions = match result {
            AnalysisResult::CareerGuidance(suggestions) => suggestions,
            other => return Err(unexpected(AnalysisKind::CareerGuidance, &other)),
        };

        self.store.append_history(
            HistoryKind::CareerGuidance,
            format!("Path analysis for {} skills", skills.len()),
            HistoryStatus::Safe,
        )?;

        Ok(suggestions)
    }

    /// Discover learning resources for an interest list. Records a
    /// career-guidance history entry.
    ///
    /// # Errors
    ///
    /// Returns `VerifyError::EmptyInput` for an empty interest list, or a
    /// service, decode, or store failure.
    pub async fn upskilling_resources(
        &self,
        interests: &[String],
    ) -> Result<Grounded<Vec<UpskillingResource>>, VerifyError> {
        if interests.is_empty() {
            return Err(VerifyError::EmptyInput { what: "interests" });
        }
        let request = AnalysisRequest::upskilling(interests, &self.schemas);
        let (result, citations) = self.run(&request).await?;
        let resources = match result {
            AnalysisResult::Upskilling(resources) => resources,
            other => return Err(unexpected(AnalysisKind::Upskilling, &other)),
        };

        self.store.append_history(
            HistoryKind::CareerGuidance,
            format!("Curated {} learning resources", resources.len()),
            HistoryStatus::Safe,
        )?;

        Ok(Grounded {
            analysis: resources,
            citations,
        })
    }

    /// Investigate the legitimacy of a company name or website. Returns the
    /// service's narrative text with citations; records no history.
    ///
    /// # Errors
    ///
    /// Returns `VerifyError::EmptyInput` for an empty query, or a service
    /// failure.
    pub async fn investigate_company(
        &self,
        query: &str,
    ) -> Result<Grounded<String>, VerifyError> {
        if query.trim().is_empty() {
            return Err(VerifyError::EmptyInput { what: "query" });
        }
        let request = AnalysisRequest::company_legitimacy(query);
        let (result, citations) = self.run(&request).await?;
        let narrative = match result {
            AnalysisResult::CompanyLegitimacy(text) => text,
            other => return Err(unexpected(AnalysisKind::CompanyLegitimacy, &other)),
        };
        Ok(Grounded {
            analysis: narrative,
            citations,
        })
    }

    /// One request/reply cycle: call the service, extract citations, decode.
    async fn run(
        &self,
        request: &AnalysisRequest,
    ) -> Result<(AnalysisResult, Vec<Citation>), VerifyError> {
        let reply = self.client.generate(request).await?;
        let citations =
            citations::extract(&reply.grounding, request.kind.citation_fallback_title());
        let result = decode::decode(request.kind, &reply.text, &self.schemas)?;
        tracing::debug!(
            kind = %request.kind,
            citations = citations.len(),
            "analysis decoded"
        );
        Ok((result, citations))
    }

    pub(crate) fn store(&self) -> &SessionStore {
        &self.store
    }
}

fn unexpected(expected: AnalysisKind, got: &AnalysisResult) -> VerifyError {
    VerifyError::UnexpectedVariant {
        expected,
        got: got.kind(),
    }
}

/// History title for a scam check: the leading verdict characters with a
/// trailing ellipsis.
fn scam_history_title(verdict: &str) -> String {
    let head: String = verdict.chars().take(SCAM_TITLE_LEN).collect();
    format!("{head}...")
}
