use super::QuizItem;
use serde::Deserialize;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum QuizParseError {
    #[error("model response is not JSON: {0}")]
    Envelope(String),
    #[error("model response has no generated_text")]
    MissingGeneratedText,
    #[error("generated text is not a quiz array: {0}")]
    InvalidQuiz(String),
    #[error("generated quiz is empty")]
    Empty,
    #[error("question {0} is malformed")]
    MalformedItem(usize),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Envelope {
    Batch(Vec<Generation>),
    Single(Generation),
}

#[derive(Debug, Deserialize)]
struct Generation {
    #[serde(default)]
    generated_text: Option<String>,
}

/// Pull the quiz array out of a text-generation response body.
///
/// The body is `[{"generated_text": "..."}]` or `{"generated_text": "..."}`,
/// and the generated text itself must be a JSON array of quiz items.
pub fn parse_generated_quizzes(body: &str) -> Result<Vec<QuizItem>, QuizParseError> {
    let envelope: Envelope =
        serde_json::from_str(body).map_err(|e| QuizParseError::Envelope(e.to_string()))?;

    let generated_text = match envelope {
        Envelope::Batch(generations) => generations.into_iter().next().and_then(|g| g.generated_text),
        Envelope::Single(generation) => generation.generated_text,
    }
    .filter(|text| !text.trim().is_empty())
    .ok_or(QuizParseError::MissingGeneratedText)?;

    let quizzes: Vec<QuizItem> = serde_json::from_str(generated_text.trim())
        .map_err(|e| QuizParseError::InvalidQuiz(e.to_string()))?;

    if quizzes.is_empty() {
        return Err(QuizParseError::Empty);
    }

    if let Some(index) = quizzes.iter().position(|quiz| !quiz.is_well_formed()) {
        return Err(QuizParseError::MalformedItem(index));
    }

    Ok(quizzes)
}
