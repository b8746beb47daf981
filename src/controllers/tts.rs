use axum::{
    body::Body,
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    Json,
};
use std::sync::Arc;

use super::json_body;
use crate::{
    domain::speech::{SpeechRequest, SpeechService, SpeechServiceApi, AUDIO_CONTENT_TYPE},
    error::AppResult,
};

pub struct TtsController {
    speech_service: Arc<SpeechService>,
}

impl TtsController {
    pub fn new(speech_service: Arc<SpeechService>) -> Self {
        Self { speech_service }
    }

    /// POST /api/tts - Convert text to speech
    pub async fn synthesize(
        State(controller): State<Arc<TtsController>>,
        payload: Result<Json<SpeechRequest>, JsonRejection>,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        let request = json_body(payload)?;
        let result = controller.speech_service.synthesize(request).await?;

        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(AUDIO_CONTENT_TYPE));
        headers.insert(
            header::CONTENT_LENGTH,
            HeaderValue::from(result.audio_data.len()),
        );

        Ok((StatusCode::OK, headers, Body::from(result.audio_data)))
    }
}
