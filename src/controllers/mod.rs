pub mod health;
pub mod quiz;
pub mod translate;
pub mod tts;

use axum::{extract::rejection::JsonRejection, Json};

use crate::error::{AppError, AppResult};

/// Unwrap a JSON body, reporting unreadable bodies as a bad request
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}
