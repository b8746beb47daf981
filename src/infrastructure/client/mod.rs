use anyhow::{bail, Context};
use async_trait::async_trait;
use serde_json::json;
use std::time::Duration;

use crate::domain::quiz::{QuizItem, QuizResponse};
use crate::domain::session::StudyGateway;
use crate::domain::translation::TranslationResult;
use crate::error::ErrorResponse;

const TRANSLATE_PATH: &str = "/api/translate";
const QUIZ_PATH: &str = "/api/quiz";
const TTS_PATH: &str = "/api/tts";

/// Study gateway reached over HTTP, as the browser does
pub struct HttpStudyClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl HttpStudyClient {
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client,
        })
    }

    async fn post(&self, path: &str, body: serde_json::Value) -> anyhow::Result<reqwest::Response> {
        let response = self
            .http_client
            .post(format!("{}{}", self.base_url, path))
            .json(&body)
            .send()
            .await
            .with_context(|| format!("Request to {} failed", path))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorResponse>()
                .await
                .map(|body| body.error)
                .unwrap_or_else(|_| "Unknown error".to_string());
            bail!("{} returned {}: {}", path, status.as_u16(), message);
        }

        Ok(response)
    }
}

#[async_trait]
impl StudyGateway for HttpStudyClient {
    async fn translate(&self, text: &str, target_language: &str) -> anyhow::Result<String> {
        let result: TranslationResult = self
            .post(
                TRANSLATE_PATH,
                json!({ "text": text, "targetLanguage": target_language }),
            )
            .await?
            .json()
            .await
            .context("Failed to parse translation response")?;

        Ok(result.translated_text)
    }

    async fn generate_quiz(&self, content: &str) -> anyhow::Result<Vec<QuizItem>> {
        let result: QuizResponse = self
            .post(QUIZ_PATH, json!({ "content": content }))
            .await?
            .json()
            .await
            .context("Failed to parse quiz response")?;

        Ok(result.quizzes)
    }

    async fn synthesize_speech(&self, text: &str, language: &str) -> anyhow::Result<Vec<u8>> {
        let audio = self
            .post(TTS_PATH, json!({ "text": text, "language": language }))
            .await?
            .bytes()
            .await
            .context("Failed to read audio response")?;

        Ok(audio.to_vec())
    }
}
