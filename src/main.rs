use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use lingualearn_backend::infrastructure::config::{Config, LogFormat};
use lingualearn_backend::infrastructure::http::{build_app, start_http_server};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        development = config.is_development(),
        "Starting LinguaLearn Backend on {}:{}",
        config.host,
        config.port
    );

    if config.is_demo_mode() {
        tracing::warn!(
            "Running in demo mode: translations and quizzes are placeholders, speech is unavailable"
        );
    } else {
        tracing::info!(
            translation_model = %config.translation_model,
            quiz_model = %config.quiz_model,
            speech_model = %config.speech_model,
            "Running in live mode"
        );
    }

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    tracing::info!("Building application router...");
    let app = build_app(config.clone())?;

    // Start HTTP server with all routes
    start_http_server(config, app).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "lingualearn_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "lingualearn_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
