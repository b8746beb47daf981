use crate::domain::quiz::QuizItem;

/// Translation shown when the translate gateway fails
pub fn translation_placeholder(target_language: &str) -> String {
    format!(
        "{} In production, this would be translated using Hugging Face AI models.",
        history_placeholder(target_language)
    )
}

/// Shorter form of the translation placeholder kept in history
pub fn history_placeholder(target_language: &str) -> String {
    format!(
        "[Demo Translation] This is a simulated translation of your content to {}.",
        target_language
    )
}

/// Quiz shown when the quiz gateway fails
pub fn quiz_placeholder(target_language: &str) -> Vec<QuizItem> {
    vec![
        QuizItem::new(
            "What is the main topic of the translated content?",
            ["Science", "History", "Literature", "Mathematics"],
            0,
        ),
        QuizItem::new(
            "Which language was the content translated to?",
            ["French", "Spanish", "German", "Italian"],
            if target_language == "es" { 1 } else { 0 },
        ),
    ]
}
