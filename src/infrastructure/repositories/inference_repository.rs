use async_trait::async_trait;

/// Failure talking to the hosted inference provider.
#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error("inference API returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("inference API request failed: {0}")]
    Transport(String),
}

/// Repository for the hosted inference models.
/// Abstracts the provider behind three model endpoints.
///
/// Implementations only move bytes: they authenticate, send the request and
/// hand back the raw response body. Interpreting the body is the job of the
/// domain services, which know what each model is expected to return.
#[async_trait]
pub trait InferenceRepository: Send + Sync {
    /// Call the translation model. Returns the raw JSON body.
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, InferenceError>;

    /// Call the text-generation model with a prompt. Returns the raw JSON body.
    async fn generate_text(
        &self,
        prompt: &str,
        max_new_tokens: u32,
        temperature: f32,
    ) -> Result<String, InferenceError>;

    /// Call the speech-synthesis model. Returns raw audio bytes.
    ///
    /// # Arguments
    /// * `text` - Cleaned and truncated text to speak
    /// * `language` - ISO 639-1 code used to pick a voice model
    async fn synthesize_speech(&self, text: &str, language: &str)
        -> Result<Vec<u8>, InferenceError>;
}
