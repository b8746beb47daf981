use axum::{extract::rejection::JsonRejection, extract::State, Json};
use std::sync::Arc;

use super::json_body;
use crate::{
    domain::translation::{TranslateRequest, TranslationResult, TranslationService, TranslationServiceApi},
    error::AppResult,
};

pub struct TranslateController {
    translation_service: Arc<TranslationService>,
}

impl TranslateController {
    pub fn new(translation_service: Arc<TranslationService>) -> Self {
        Self {
            translation_service,
        }
    }

    /// POST /api/translate - Translate text into a target language
    pub async fn translate(
        State(controller): State<Arc<TranslateController>>,
        payload: Result<Json<TranslateRequest>, JsonRejection>,
    ) -> AppResult<Json<TranslationResult>> {
        let request = json_body(payload)?;
        let result = controller.translation_service.translate(request).await?;
        Ok(Json(result))
    }
}
