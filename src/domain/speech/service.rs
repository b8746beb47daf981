use super::text::clean_text;
use super::{SpeechAudio, SpeechRequest};
use crate::domain::shared::gateway_error::{require_field, truncate_chars};
use crate::domain::shared::GatewayError;
use crate::infrastructure::repositories::InferenceRepository;
use async_trait::async_trait;
use std::sync::Arc;

/// Characters forwarded to the speech model per request
pub const MAX_SPEECH_CHARS: usize = 500;

pub struct SpeechService {
    inference_repo: Option<Arc<dyn InferenceRepository>>,
}

impl SpeechService {
    /// `inference_repo` is `None` in demo mode
    pub fn new(inference_repo: Option<Arc<dyn InferenceRepository>>) -> Self {
        Self { inference_repo }
    }
}

#[async_trait]
pub trait SpeechServiceApi: Send + Sync {
    /// Synthesize speech for a piece of text
    ///
    /// There is no placeholder audio: demo mode fails with `ServiceUnavailable`.
    async fn synthesize(&self, request: SpeechRequest) -> Result<SpeechAudio, GatewayError>;
}

#[async_trait]
impl SpeechServiceApi for SpeechService {
    async fn synthesize(&self, request: SpeechRequest) -> Result<SpeechAudio, GatewayError> {
        let (text, language) = match (require_field(request.text), require_field(request.language)) {
            (Some(text), Some(language)) => (text, language),
            _ => {
                return Err(GatewayError::InvalidInput(
                    "Text and language are required".to_string(),
                ))
            }
        };

        let Some(inference_repo) = &self.inference_repo else {
            return Err(GatewayError::ServiceUnavailable(
                "TTS requires Hugging Face API key".to_string(),
            ));
        };

        let cleaned_text = clean_text(&text);
        let speech_text = truncate_chars(&cleaned_text, MAX_SPEECH_CHARS);
        if speech_text.is_empty() {
            return Err(GatewayError::InvalidInput(
                "Text has nothing to speak".to_string(),
            ));
        }

        tracing::info!(
            original_length = text.chars().count(),
            speech_length = speech_text.chars().count(),
            language = %language,
            "Speech synthesis request"
        );

        let audio_data = inference_repo
            .synthesize_speech(speech_text, &language)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Speech synthesis upstream call failed");
                GatewayError::Upstream("Text-to-speech failed".to_string())
            })?;

        if audio_data.is_empty() {
            tracing::error!("Speech synthesis returned an empty audio body");
            return Err(GatewayError::Upstream("Text-to-speech failed".to_string()));
        }

        Ok(SpeechAudio { audio_data })
    }
}
