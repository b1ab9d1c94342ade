//! HTTP transport to the `generateContent` endpoint.
//!
//! Translates an [`AnalysisRequest`] into the service's wire format, posts
//! it, and maps the reply into a [`RawReply`]: the candidate text plus its
//! grounding chunks. No retries and no timeouts: a call completes or fails
//! exactly once.

use serde::{Deserialize, Serialize};

use th_config::GeminiConfig;
use th_core::enums::AnalysisKind;

use crate::citations::GroundingChunk;
use crate::error::GeminiError;
use crate::http::check_response;
use crate::request::{AnalysisRequest, InlineMedia};

/// Raw reply from one analysis call: the body text (parseable as structured
/// data when a shape was declared) and the grounding metadata, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawReply {
    pub text: String,
    pub grounding: Vec<GroundingChunk>,
}

/// HTTP client for the reasoning service.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    flash_model: String,
    pro_model: String,
}

impl GeminiClient {
    /// Create a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GeminiError::NotConfigured`] if no API key is set.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    pub fn from_config(config: &GeminiConfig) -> Result<Self, GeminiError> {
        if !config.is_configured() {
            return Err(GeminiError::NotConfigured);
        }
        Ok(Self {
            http: reqwest::Client::builder()
                .user_agent("trusthire/0.1")
                .build()
                .expect("reqwest client should build"),
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            flash_model: config.flash_model.clone(),
            pro_model: config.pro_model.clone(),
        })
    }

    /// The model serving a given analysis kind: the fast model for the
    /// email-safety gate, the heavier model for everything else.
    #[must_use]
    pub fn model_for(&self, kind: AnalysisKind) -> &str {
        match kind {
            AnalysisKind::EmailSecurity => &self.flash_model,
            _ => &self.pro_model,
        }
    }

    /// Execute one analysis request.
    ///
    /// # Errors
    ///
    /// Returns [`GeminiError`] if the HTTP request fails, the service
    /// returns a non-success status, or the reply carries no content.
    pub async fn generate(&self, request: &AnalysisRequest) -> Result<RawReply, GeminiError> {
        let model = self.model_for(request.kind);
        let url = format!("{}/models/{model}:generateContent", self.base_url);
        let body = WireRequest::from_analysis(request);

        tracing::debug!(
            kind = %request.kind,
            model,
            grounding = request.grounding,
            "dispatching analysis request"
        );

        let resp = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;
        let resp = check_response(resp).await?;

        let reply: WireReply = resp.json().await?;
        reply.into_raw()
    }
}

// ── Wire format ────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WireRequest {
    contents: Vec<WireContent>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<WireTool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<WireGenerationConfig>,
}

#[derive(Serialize)]
struct WireContent {
    parts: Vec<WirePart>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WirePart {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_data: Option<WireInlineData>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WireInlineData {
    mime_type: String,
    data: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WireTool {
    google_search: serde_json::Value,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WireGenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

impl WireRequest {
    fn from_analysis(request: &AnalysisRequest) -> Self {
        let mut parts = vec![WirePart {
            text: Some(request.prompt.clone()),
            inline_data: None,
        }];
        if let Some(InlineMedia { mime_type, data }) = &request.media {
            parts.push(WirePart {
                text: None,
                inline_data: Some(WireInlineData {
                    mime_type: mime_type.clone(),
                    data: data.clone(),
                }),
            });
        }

        let tools = if request.grounding {
            vec![WireTool {
                google_search: serde_json::json!({}),
            }]
        } else {
            Vec::new()
        };

        let generation_config = request
            .response_schema
            .as_ref()
            .map(|schema| WireGenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: schema.clone(),
            });

        Self {
            contents: vec![WireContent { parts }],
            tools,
            generation_config,
        }
    }
}

#[derive(Deserialize)]
struct WireReply {
    #[serde(default)]
    candidates: Vec<WireCandidate>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireCandidate {
    content: Option<WireCandidateContent>,
    grounding_metadata: Option<WireGroundingMetadata>,
}

#[derive(Deserialize)]
struct WireCandidateContent {
    #[serde(default)]
    parts: Vec<WireCandidatePart>,
}

#[derive(Deserialize)]
struct WireCandidatePart {
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireGroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<GroundingChunk>,
}

impl WireReply {
    /// Collapse the first candidate into a [`RawReply`].
    fn into_raw(self) -> Result<RawReply, GeminiError> {
        let Some(candidate) = self.candidates.into_iter().next() else {
            return Err(GeminiError::EmptyReply);
        };

        let text: String = candidate
            .content
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect()
            })
            .unwrap_or_default();
        if text.is_empty() {
            return Err(GeminiError::EmptyReply);
        }

        let grounding = candidate
            .grounding_metadata
            .map(|metadata| metadata.grounding_chunks)
            .unwrap_or_default();

        Ok(RawReply { text, grounding })
    }
}
