pub mod service;
pub mod text;

use serde::{Deserialize, Serialize};
pub use service::{SpeechService, SpeechServiceApi};

/// Content type of synthesized audio
pub const AUDIO_CONTENT_TYPE: &str = "audio/wav";

/// Request for POST /api/tts
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SpeechRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SpeechAudio {
    pub audio_data: Vec<u8>,
}
