pub mod request_id;

use axum::{
    http::HeaderValue,
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::controllers::{
    health, quiz::QuizController, translate::TranslateController, tts::TtsController,
};
use crate::domain::{quiz::QuizService, speech::SpeechService, translation::TranslationService};
use crate::infrastructure::config::Config;
use crate::infrastructure::repositories::{HuggingFaceRepository, InferenceRepository};

pub use request_id::{request_id_middleware, RequestId};

/// Wire repositories, services and controllers into the application router
pub fn build_app(config: Arc<Config>) -> Result<Router, Box<dyn std::error::Error>> {
    // 1. Inference repository, only when a credential is configured
    let inference_repo: Option<Arc<dyn InferenceRepository>> = match &config.hf_api_key {
        Some(api_key) => {
            tracing::info!(
                base_url = %config.inference_base_url,
                translation_model = %config.translation_model,
                quiz_model = %config.quiz_model,
                speech_model = %config.speech_model,
                timeout_secs = config.upstream_timeout_secs,
                "Inference API credential found, gateways run in live mode"
            );
            Some(Arc::new(HuggingFaceRepository::new(&config, api_key.clone())?))
        }
        None => {
            tracing::warn!("HUGGING_FACE_API_KEY not set, gateways run in demo mode");
            None
        }
    };

    // 2. Services
    let translation_service = Arc::new(TranslationService::new(
        inference_repo.clone(),
        config.translation_source_language.clone(),
    ));
    let quiz_service = Arc::new(QuizService::new(inference_repo.clone()));
    let speech_service = Arc::new(SpeechService::new(inference_repo));

    // 3. Controllers
    let translate_controller = Arc::new(TranslateController::new(translation_service));
    let quiz_controller = Arc::new(QuizController::new(quiz_service));
    let tts_controller = Arc::new(TtsController::new(speech_service));

    let translate_routes = Router::new()
        .route("/api/translate", post(TranslateController::translate))
        .with_state(translate_controller);

    let quiz_routes = Router::new()
        .route("/api/quiz", post(QuizController::generate))
        .with_state(quiz_controller);

    let tts_routes = Router::new()
        .route("/api/tts", post(TtsController::synthesize))
        .with_state(tts_controller);

    let app = Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(config.clone())
        .merge(translate_routes)
        .merge(quiz_routes)
        .merge(tts_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config));

    Ok(app)
}

fn cors_layer(config: &Config) -> CorsLayer {
    if config.cors_allowed_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any)
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    app: Router,
) -> Result<(), Box<dyn std::error::Error>> {
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
