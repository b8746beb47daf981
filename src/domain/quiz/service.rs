use super::parser::parse_generated_quizzes;
use super::placeholder::{demo_quizzes, fallback_quizzes};
use super::{QuizRequest, QuizResponse};
use crate::domain::shared::gateway_error::{require_field, truncate_chars};
use crate::domain::shared::GatewayError;
use crate::infrastructure::repositories::InferenceRepository;
use async_trait::async_trait;
use std::sync::Arc;

/// Characters of study content embedded in the prompt
pub const MAX_PROMPT_CONTENT_CHARS: usize = 1000;
const MAX_NEW_TOKENS: u32 = 500;
const TEMPERATURE: f32 = 0.7;

pub struct QuizService {
    inference_repo: Option<Arc<dyn InferenceRepository>>,
}

impl QuizService {
    /// `inference_repo` is `None` in demo mode
    pub fn new(inference_repo: Option<Arc<dyn InferenceRepository>>) -> Self {
        Self { inference_repo }
    }
}

#[async_trait]
pub trait QuizServiceApi: Send + Sync {
    /// Generate multiple-choice comprehension questions for study content
    ///
    /// Always yields a displayable quiz unless the request is invalid or the
    /// model call itself fails: unusable model output becomes the fallback quiz.
    async fn generate(&self, request: QuizRequest) -> Result<QuizResponse, GatewayError>;
}

#[async_trait]
impl QuizServiceApi for QuizService {
    async fn generate(&self, request: QuizRequest) -> Result<QuizResponse, GatewayError> {
        let content = require_field(request.content)
            .ok_or_else(|| GatewayError::InvalidInput("Content is required".to_string()))?;

        tracing::info!(
            content_length = content.chars().count(),
            "Quiz generation request"
        );

        let Some(inference_repo) = &self.inference_repo else {
            tracing::info!("No inference credential configured, returning demo quiz");
            return Ok(QuizResponse {
                quizzes: demo_quizzes(),
            });
        };

        let prompt = build_prompt(&content);
        let body = inference_repo
            .generate_text(&prompt, MAX_NEW_TOKENS, TEMPERATURE)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Quiz generation upstream call failed");
                GatewayError::Upstream("Quiz generation failed".to_string())
            })?;

        let quizzes = match parse_generated_quizzes(&body) {
            Ok(quizzes) => {
                tracing::info!(question_count = quizzes.len(), "Quiz generated");
                quizzes
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    body_length = body.len(),
                    "Model output was not a usable quiz, returning fallback quiz"
                );
                fallback_quizzes()
            }
        };

        Ok(QuizResponse { quizzes })
    }
}

/// Prompt asking the model for three 4-option questions as JSON
pub fn build_prompt(content: &str) -> String {
    format!(
        "Based on the following content, generate 3 multiple choice questions with 4 options each. \
         Format as JSON with question, options array, and correctAnswer index.\n\n\
         Content: {}\n\n\
         Generate questions that test comprehension and key concepts. Return only valid JSON.",
        truncate_chars(content, MAX_PROMPT_CONTENT_CHARS)
    )
}
