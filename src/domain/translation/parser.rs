use serde::Deserialize;

/// What a translation model response turned out to contain, in priority order
#[derive(Debug, Clone, PartialEq)]
pub enum TranslationShape {
    /// `[{"translation_text": ...}]`, the translation pipeline output
    Translation(String),
    /// `{"generated_text": ...}` or `[{"generated_text": ...}]`, text2text output
    Generated(String),
    /// Anything else, including bodies that are not JSON at all
    Unrecognized,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Payload {
    Batch(Vec<Candidate>),
    Single(Candidate),
}

#[derive(Debug, Default, Deserialize)]
struct Candidate {
    #[serde(default)]
    translation_text: Option<String>,
    #[serde(default)]
    generated_text: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.is_empty())
}

/// Classify a raw model response body
pub fn classify(body: &str) -> TranslationShape {
    let payload = match serde_json::from_str::<Payload>(body) {
        Ok(payload) => payload,
        Err(_) => return TranslationShape::Unrecognized,
    };

    let (primary, secondary) = match payload {
        Payload::Batch(candidates) => {
            let first = candidates.into_iter().next().unwrap_or_default();
            (non_empty(first.translation_text), non_empty(first.generated_text))
        }
        Payload::Single(candidate) => (None, non_empty(candidate.generated_text)),
    };

    match (primary, secondary) {
        (Some(text), _) => TranslationShape::Translation(text),
        (None, Some(text)) => TranslationShape::Generated(text),
        (None, None) => TranslationShape::Unrecognized,
    }
}

/// Extract the translated text, defaulting to the untranslated input
pub fn translated_text_or(body: &str, original: &str) -> String {
    match classify(body) {
        TranslationShape::Translation(text) | TranslationShape::Generated(text) => text,
        TranslationShape::Unrecognized => {
            tracing::warn!(
                body_length = body.len(),
                "Translation response had no recognizable text, echoing input"
            );
            original.to_string()
        }
    }
}
