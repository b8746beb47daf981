pub mod parser;
pub mod service;

use serde::{Deserialize, Serialize};
pub use service::{TranslationService, TranslationServiceApi};

/// Request for POST /api/translate
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub target_language: Option<String>,
}

/// Response for POST /api/translate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResult {
    pub translated_text: String,
}

/// Placeholder returned when no inference credential is configured
pub fn demo_translation(target_language: &str) -> String {
    format!(
        "[Demo Mode] This is a simulated translation of your content to {}. \
         To enable real translations, add your Hugging Face API key to the environment variables.",
        target_language
    )
}
