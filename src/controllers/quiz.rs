use axum::{extract::rejection::JsonRejection, extract::State, Json};
use std::sync::Arc;

use super::json_body;
use crate::{
    domain::quiz::{QuizRequest, QuizResponse, QuizService, QuizServiceApi},
    error::AppResult,
};

pub struct QuizController {
    quiz_service: Arc<QuizService>,
}

impl QuizController {
    pub fn new(quiz_service: Arc<QuizService>) -> Self {
        Self { quiz_service }
    }

    /// POST /api/quiz - Generate comprehension questions for content
    pub async fn generate(
        State(controller): State<Arc<QuizController>>,
        payload: Result<Json<QuizRequest>, JsonRejection>,
    ) -> AppResult<Json<QuizResponse>> {
        let request = json_body(payload)?;
        let response = controller.quiz_service.generate(request).await?;
        Ok(Json(response))
    }
}
