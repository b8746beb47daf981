use serde::{Deserialize, Serialize};

/// ISO 639-1 codes offered as translation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LanguageCode {
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "de")]
    German,
    #[serde(rename = "it")]
    Italian,
    #[serde(rename = "pt")]
    Portuguese,
    #[serde(rename = "ru")]
    Russian,
    #[serde(rename = "ja")]
    Japanese,
    #[serde(rename = "ko")]
    Korean,
    #[serde(rename = "zh")]
    Chinese,
    #[serde(rename = "ar")]
    Arabic,
    #[serde(rename = "hi")]
    Hindi,
    #[serde(rename = "tr")]
    Turkish,
}

pub const SUPPORTED_LANGUAGES: [LanguageCode; 12] = [
    LanguageCode::Spanish,
    LanguageCode::French,
    LanguageCode::German,
    LanguageCode::Italian,
    LanguageCode::Portuguese,
    LanguageCode::Russian,
    LanguageCode::Japanese,
    LanguageCode::Korean,
    LanguageCode::Chinese,
    LanguageCode::Arabic,
    LanguageCode::Hindi,
    LanguageCode::Turkish,
];

impl LanguageCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageCode::Spanish => "es",
            LanguageCode::French => "fr",
            LanguageCode::German => "de",
            LanguageCode::Italian => "it",
            LanguageCode::Portuguese => "pt",
            LanguageCode::Russian => "ru",
            LanguageCode::Japanese => "ja",
            LanguageCode::Korean => "ko",
            LanguageCode::Chinese => "zh",
            LanguageCode::Arabic => "ar",
            LanguageCode::Hindi => "hi",
            LanguageCode::Turkish => "tr",
        }
    }

    /// English display name
    pub fn name(&self) -> &'static str {
        match self {
            LanguageCode::Spanish => "Spanish",
            LanguageCode::French => "French",
            LanguageCode::German => "German",
            LanguageCode::Italian => "Italian",
            LanguageCode::Portuguese => "Portuguese",
            LanguageCode::Russian => "Russian",
            LanguageCode::Japanese => "Japanese",
            LanguageCode::Korean => "Korean",
            LanguageCode::Chinese => "Chinese",
            LanguageCode::Arabic => "Arabic",
            LanguageCode::Hindi => "Hindi",
            LanguageCode::Turkish => "Turkish",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        SUPPORTED_LANGUAGES
            .iter()
            .copied()
            .find(|language| language.as_str() == code)
    }
}

impl std::fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Display name for a language code, or the code itself when unknown
pub fn language_name(code: &str) -> String {
    LanguageCode::from_code(code)
        .map(|language| language.name().to_string())
        .unwrap_or_else(|| code.to_string())
}

/// MMS speech model for a language, if a dedicated voice is published
pub fn speech_model_for(code: &str) -> Option<&'static str> {
    let model = match LanguageCode::from_code(code)? {
        LanguageCode::Spanish => "facebook/mms-tts-spa",
        LanguageCode::French => "facebook/mms-tts-fra",
        LanguageCode::German => "facebook/mms-tts-deu",
        LanguageCode::Portuguese => "facebook/mms-tts-por",
        LanguageCode::Russian => "facebook/mms-tts-rus",
        LanguageCode::Korean => "facebook/mms-tts-kor",
        LanguageCode::Arabic => "facebook/mms-tts-ara",
        LanguageCode::Hindi => "facebook/mms-tts-hin",
        LanguageCode::Turkish => "facebook/mms-tts-tur",
        LanguageCode::Italian | LanguageCode::Japanese | LanguageCode::Chinese => return None,
    };
    Some(model)
}
