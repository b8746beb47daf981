use serde::Deserialize;
use std::env;
use std::time::Duration;

pub const DEFAULT_INFERENCE_BASE_URL: &str = "https://api-inference.huggingface.co/models";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    /// Bearer credential for the inference API. `None` runs the gateways in demo mode.
    pub hf_api_key: Option<String>,
    pub inference_base_url: String,
    pub translation_model: String,
    pub translation_source_language: String,
    pub quiz_model: String,
    pub speech_model: String,
    pub speech_language_models: bool,
    pub upstream_timeout_secs: u64,
    pub cors_allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            environment: Environment::Development,
            log_format: LogFormat::Pretty,
            hf_api_key: None,
            inference_base_url: DEFAULT_INFERENCE_BASE_URL.to_string(),
            translation_model: "facebook/m2m100_418M".to_string(),
            translation_source_language: "en".to_string(),
            quiz_model: "google/flan-t5-large".to_string(),
            speech_model: "facebook/mms-tts-eng".to_string(),
            speech_language_models: true,
            upstream_timeout_secs: 30,
            cors_allowed_origins: Vec::new(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup; unset keys take their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Box<dyn std::error::Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let config = Config {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: lookup("PORT")
                .unwrap_or_else(|| defaults.port.to_string())
                .parse()?,
            environment: match lookup("ENVIRONMENT").as_deref() {
                Some("production") => Environment::Production,
                _ => Environment::Development,
            },
            log_format: match lookup("LOG_FORMAT").as_deref() {
                Some("json") => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            hf_api_key: lookup("HUGGING_FACE_API_KEY")
                .map(|key| key.trim().to_string())
                .filter(|key| !key.is_empty()),
            inference_base_url: lookup("INFERENCE_BASE_URL").unwrap_or(defaults.inference_base_url),
            translation_model: lookup("TRANSLATION_MODEL").unwrap_or(defaults.translation_model),
            translation_source_language: lookup("TRANSLATION_SOURCE_LANGUAGE")
                .unwrap_or(defaults.translation_source_language),
            quiz_model: lookup("QUIZ_MODEL").unwrap_or(defaults.quiz_model),
            speech_model: lookup("SPEECH_MODEL").unwrap_or(defaults.speech_model),
            speech_language_models: lookup("SPEECH_LANGUAGE_MODELS")
                .map(|s| s.to_lowercase() != "false")
                .unwrap_or(defaults.speech_language_models),
            upstream_timeout_secs: lookup("UPSTREAM_TIMEOUT_SECS")
                .unwrap_or_else(|| defaults.upstream_timeout_secs.to_string())
                .parse()?,
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                .map(|s| parse_origins(&s))
                .unwrap_or_default(),
        };

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }

    /// Demo mode: no credential, gateways answer with placeholders
    pub fn is_demo_mode(&self) -> bool {
        self.hf_api_key.is_none()
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|origin| origin.trim().to_string())
        .filter(|origin| !origin.is_empty())
        .collect()
}
