//! Analysis request construction.
//!
//! Pure construction, no side effects: each constructor produces the full
//! request descriptor for one analysis kind: the natural-language
//! instruction, an optional inline media blob, whether web grounding is
//! enabled, and the declared output shape (taken from the
//! [`SchemaRegistry`] so the request and the decoder can never disagree).

use base64::{Engine as _, engine::general_purpose::STANDARD};

use th_core::enums::AnalysisKind;
use th_schema::SchemaRegistry;

/// An inline media attachment (screenshot of a job posting, email, chat).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineMedia {
    /// IANA media type, e.g. `image/png`.
    pub mime_type: String,
    /// Base64-encoded payload.
    pub data: String,
}

impl InlineMedia {
    /// Build an attachment from raw bytes.
    #[must_use]
    pub fn from_bytes(mime_type: impl Into<String>, bytes: &[u8]) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: STANDARD.encode(bytes),
        }
    }
}

/// A fully constructed request for one analysis call.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub kind: AnalysisKind,
    /// Natural-language instruction describing what evidence to weigh and
    /// what judgement to render.
    pub prompt: String,
    pub media: Option<InlineMedia>,
    /// Whether the web-grounding capability is enabled for this call.
    pub grounding: bool,
    /// Declared output shape; `None` for the company-legitimacy kind.
    pub response_schema: Option<serde_json::Value>,
}

impl AnalysisRequest {
    /// Email-safety check: burner-domain, MX, and abuse screening for one
    /// address. Web grounding on.
    #[must_use]
    pub fn email_security(email: &str, schemas: &SchemaRegistry) -> Self {
        let kind = AnalysisKind::EmailSecurity;
        Self {
            kind,
            prompt: format!(
                "Analyze the security and validity of this email address: \"{email}\".\n\
                 Check if the domain is a known burner/disposable email provider, if it has \
                 a valid MX record (simulate check), and if it has been associated with \
                 malicious activity.\n\
                 Return a JSON object with: isValid (boolean), isSafe (boolean), \
                 reason (string), domainTrustScore (number 0-100)."
            ),
            media: None,
            grounding: true,
            response_schema: schemas.get(kind).cloned(),
        }
    }

    /// Scam audit of a job posting or recruiter communication. Web grounding
    /// on; at least one of text/media should be present, but that
    /// precondition belongs to the caller, so an empty text payload is allowed
    /// here (media-only audits).
    #[must_use]
    pub fn scam_audit(text: &str, media: Option<InlineMedia>, schemas: &SchemaRegistry) -> Self {
        let kind = AnalysisKind::ScamAudit;
        let mut prompt = String::from(
            "Perform a deep security analysis on this job posting or communication.\n\
             IMPORTANT: If a URL or link is detected in the text, use web search to:\n\
             1. Check the domain's registration date and owner (Whois).\n\
             2. Search for \"scam\", \"phishing\", or \"fake\" reports associated with this specific URL.\n\
             3. Verify if the company mentioned actually owns this domain.\n\
             4. Analyze the language for common phishing or recruitment fraud patterns.\n\
             5. Extract text from the image if provided and analyze it.\n\
             Provide a detailed risk assessment in JSON format.",
        );
        if !text.trim().is_empty() {
            prompt.push_str("\n\nContent to analyze: ");
            prompt.push_str(text);
        }
        Self {
            kind,
            prompt,
            media,
            grounding: true,
            response_schema: schemas.get(kind).cloned(),
        }
    }

    /// Career-path guidance for a skill list. The one kind with web
    /// grounding off: it reasons from the supplied skills alone.
    #[must_use]
    pub fn career_guidance(skills: &[String], schemas: &SchemaRegistry) -> Self {
        let kind = AnalysisKind::CareerGuidance;
        Self {
            kind,
            prompt: format!(
                "As a professional career advisor, analyze these skills: {}.\n\
                 Suggest 3-4 specific job roles and legitimate, high-trust companies that \
                 actively hire for these skills. Explain why they match and provide a \
                 description for each path.",
                skills.join(", ")
            ),
            media: None,
            grounding: false,
            response_schema: schemas.get(kind).cloned(),
        }
    }

    /// Upskilling-resource discovery for an interest list. Web grounding on.
    #[must_use]
    pub fn upskilling(interests: &[String], schemas: &SchemaRegistry) -> Self {
        let kind = AnalysisKind::Upskilling;
        Self {
            kind,
            prompt: format!(
                "Find high-rated learning resources for these interests: {}.\n\
                 I specifically need direct YouTube tutorial links (playlists or popular \
                 videos) and free courses. For each resource, provide a clear title, \
                 description, the provider name, and the direct URL.\n\
                 Return the data in a structured JSON format.",
                interests.join(", ")
            ),
            media: None,
            grounding: true,
            response_schema: schemas.get(kind).cloned(),
        }
    }

    /// Company-legitimacy investigation. Web grounding on; no declared
    /// output shape; the reply is free narrative text.
    #[must_use]
    pub fn company_legitimacy(query: &str) -> Self {
        Self {
            kind: AnalysisKind::CompanyLegitimacy,
            prompt: format!(
                "Investigate the legitimacy of this input: \"{query}\".\n\
                 It may be a company name or a website URL. Use web search to cross-reference:\n\
                 1. Official domain history and safety records.\n\
                 2. Physical registration and corporate headquarters.\n\
                 3. User reviews and scam alerts.\n\
                 4. Recent news.\n\
                 Summarize findings clearly and assign a status: 'Legitimate', 'Suspicious', \
                 or 'Verified'."
            ),
            media: None,
            grounding: true,
            response_schema: None,
        }
    }
}
