use super::inference_repository::{InferenceError, InferenceRepository};
use crate::domain::shared::language::speech_model_for;
use crate::infrastructure::config::Config;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::json;
use std::time::Instant;

/// Hugging Face Inference API implementation of the inference repository
pub struct HuggingFaceRepository {
    http_client: reqwest::Client,
    api_key: String,
    base_url: String,
    translation_model: String,
    quiz_model: String,
    speech_model: String,
    speech_language_models: bool,
}

impl HuggingFaceRepository {
    pub fn new(config: &Config, api_key: String) -> Result<Self, InferenceError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.upstream_timeout())
            .build()
            .map_err(|e| InferenceError::Transport(e.to_string()))?;

        Ok(Self {
            http_client,
            api_key,
            base_url: config.inference_base_url.trim_end_matches('/').to_string(),
            translation_model: config.translation_model.clone(),
            quiz_model: config.quiz_model.clone(),
            speech_model: config.speech_model.clone(),
            speech_language_models: config.speech_language_models,
        })
    }

    fn model_url(&self, model: &str) -> String {
        format!("{}/{}", self.base_url, model)
    }

    /// Pick the speech model for a language, falling back to the configured default
    fn speech_model_for_language(&self, language: &str) -> String {
        if !self.speech_language_models {
            return self.speech_model.clone();
        }

        speech_model_for(language)
            .map(str::to_string)
            .unwrap_or_else(|| self.speech_model.clone())
    }

    /// POST a JSON payload to a model and return the raw response body
    async fn call_model<T: Serialize + ?Sized>(
        &self,
        model: &str,
        payload: &T,
    ) -> Result<Vec<u8>, InferenceError> {
        let start_time = Instant::now();

        let response = self
            .http_client
            .post(self.model_url(model))
            .bearer_auth(&self.api_key)
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    model = model,
                    "Inference API call failed"
                );
                InferenceError::Transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!(
                model = model,
                status = status.as_u16(),
                body = %body,
                "Inference API returned an error status"
            );
            return Err(InferenceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| InferenceError::Transport(e.to_string()))?;

        tracing::info!(
            provider = "huggingface",
            model = model,
            latency_ms = start_time.elapsed().as_millis(),
            response_size_bytes = bytes.len(),
            "Inference API call completed"
        );

        Ok(bytes.to_vec())
    }

    async fn call_model_text<T: Serialize + ?Sized>(
        &self,
        model: &str,
        payload: &T,
    ) -> Result<String, InferenceError> {
        let bytes = self.call_model(model, payload).await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

#[async_trait]
impl InferenceRepository for HuggingFaceRepository {
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, InferenceError> {
        let payload = json!({
            "inputs": text,
            "parameters": {
                "src_lang": source_language,
                "tgt_lang": target_language,
            },
        });

        self.call_model_text(&self.translation_model, &payload).await
    }

    async fn generate_text(
        &self,
        prompt: &str,
        max_new_tokens: u32,
        temperature: f32,
    ) -> Result<String, InferenceError> {
        let payload = json!({
            "inputs": prompt,
            "parameters": {
                "max_new_tokens": max_new_tokens,
                "temperature": temperature,
            },
        });

        self.call_model_text(&self.quiz_model, &payload).await
    }

    async fn synthesize_speech(
        &self,
        text: &str,
        language: &str,
    ) -> Result<Vec<u8>, InferenceError> {
        let model = self.speech_model_for_language(language);
        tracing::info!(
            language = language,
            model = %model,
            text_length = text.chars().count(),
            "Starting speech synthesis"
        );

        self.call_model(&model, &json!({ "inputs": text })).await
    }
}
