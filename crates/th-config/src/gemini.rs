//! Reasoning service configuration.

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

/// Fast model used for the email-safety gate.
fn default_flash_model() -> String {
    "gemini-3-flash-preview".to_string()
}

/// Heavier model used for every other analysis kind.
fn default_pro_model() -> String {
    "gemini-3-pro-preview".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeminiConfig {
    /// API key for the generative-language endpoint.
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_flash_model")]
    pub flash_model: String,

    #[serde(default = "default_pro_model")]
    pub pro_model: String,
}

impl GeminiConfig {
    /// Whether enough is configured to make service calls.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            flash_model: default_flash_model(),
            pro_model: default_pro_model(),
        }
    }
}
