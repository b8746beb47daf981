use super::QuizItem;

/// Quiz served when no inference credential is configured
pub fn demo_quizzes() -> Vec<QuizItem> {
    vec![
        QuizItem::new(
            "What is the main topic discussed in the content?",
            ["Education", "Technology", "Science", "History"],
            0,
        ),
        QuizItem::new(
            "Which of the following best describes the content's purpose?",
            ["Entertainment", "Information", "Advertisement", "News"],
            1,
        ),
        QuizItem::new(
            "What type of learning approach is mentioned?",
            [
                "Visual learning",
                "Audio learning",
                "Interactive learning",
                "All of the above",
            ],
            3,
        ),
    ]
}

/// Quiz served when the model output could not be used
pub fn fallback_quizzes() -> Vec<QuizItem> {
    demo_quizzes().into_iter().take(2).collect()
}
