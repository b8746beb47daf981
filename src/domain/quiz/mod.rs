pub mod parser;
pub mod placeholder;
pub mod service;

use serde::{Deserialize, Serialize};
pub use service::{QuizService, QuizServiceApi};

/// Options every quiz question must offer
pub const OPTIONS_PER_QUESTION: usize = 4;

/// Request for POST /api/quiz
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub content: Option<String>,
}

/// One multiple-choice comprehension question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizItem {
    pub question: String,
    pub options: Vec<String>,
    #[serde(rename = "correctAnswer")]
    pub correct_answer: usize,
}

impl QuizItem {
    pub fn new(question: &str, options: [&str; OPTIONS_PER_QUESTION], correct_answer: usize) -> Self {
        Self {
            question: question.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_answer,
        }
    }

    /// Whether the item can be shown as-is: a question, four options and an in-range answer
    pub fn is_well_formed(&self) -> bool {
        !self.question.trim().is_empty()
            && self.options.len() == OPTIONS_PER_QUESTION
            && self.correct_answer < self.options.len()
    }
}

/// Response for POST /api/quiz
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizResponse {
    pub quizzes: Vec<QuizItem>,
}
