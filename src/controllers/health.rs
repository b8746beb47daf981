use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::infrastructure::config::Config;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Readiness plus which gateways answer with real model output
pub async fn health_ready(State(config): State<Arc<Config>>) -> impl IntoResponse {
    let body = if config.is_demo_mode() {
        json!({
            "status": "ready",
            "mode": "demo",
            "translation": "placeholder",
            "quiz": "placeholder",
            "speech": "unavailable"
        })
    } else {
        json!({
            "status": "ready",
            "mode": "live",
            "translation": "available",
            "quiz": "available",
            "speech": "available"
        })
    };

    (StatusCode::OK, Json(body))
}
