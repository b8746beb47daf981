use super::parser::translated_text_or;
use super::{demo_translation, TranslateRequest, TranslationResult};
use crate::domain::shared::gateway_error::require_field;
use crate::domain::shared::GatewayError;
use crate::infrastructure::repositories::InferenceRepository;
use async_trait::async_trait;
use std::sync::Arc;

pub struct TranslationService {
    inference_repo: Option<Arc<dyn InferenceRepository>>,
    source_language: String,
}

impl TranslationService {
    /// `inference_repo` is `None` in demo mode
    pub fn new(
        inference_repo: Option<Arc<dyn InferenceRepository>>,
        source_language: String,
    ) -> Self {
        Self {
            inference_repo,
            source_language,
        }
    }
}

#[async_trait]
pub trait TranslationServiceApi: Send + Sync {
    /// Translate text into the target language
    ///
    /// This operation:
    /// - Rejects requests missing text or target language
    /// - Answers with a demo placeholder when no credential is configured
    /// - Otherwise forwards to the translation model
    async fn translate(
        &self,
        request: TranslateRequest,
    ) -> Result<TranslationResult, GatewayError>;
}

#[async_trait]
impl TranslationServiceApi for TranslationService {
    async fn translate(
        &self,
        request: TranslateRequest,
    ) -> Result<TranslationResult, GatewayError> {
        let (text, target_language) = match (
            require_field(request.text),
            require_field(request.target_language),
        ) {
            (Some(text), Some(target_language)) => (text, target_language),
            _ => {
                return Err(GatewayError::InvalidInput(
                    "Text and target language are required".to_string(),
                ))
            }
        };

        tracing::info!(
            text_length = text.chars().count(),
            target_language = %target_language,
            "Translation request"
        );

        let Some(inference_repo) = &self.inference_repo else {
            tracing::info!(
                target_language = %target_language,
                "No inference credential configured, returning demo translation"
            );
            return Ok(TranslationResult {
                translated_text: demo_translation(&target_language),
            });
        };

        let body = inference_repo
            .translate(&text, &self.source_language, &target_language)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Translation upstream call failed");
                GatewayError::Upstream("Translation failed".to_string())
            })?;

        Ok(TranslationResult {
            translated_text: translated_text_or(&body, &text),
        })
    }
}
