use super::placeholder::{quiz_placeholder, translation_placeholder};
use crate::domain::history::HistoryEntry;
use crate::domain::quiz::QuizItem;

pub const DEFAULT_TARGET_LANGUAGE: &str = "es";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum TranslationPhase {
    #[default]
    Idle,
    Translating,
    Ready(String),
    /// The gateway failed; the placeholder translation is displayed
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum QuizPhase {
    #[default]
    Empty,
    Generating,
    Ready(Vec<QuizItem>),
    /// The gateway failed; the placeholder quiz is displayed
    Failed(Vec<QuizItem>),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum AudioPhase {
    #[default]
    Idle,
    Playing,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    ContentChanged(String),
    TargetLanguageChanged(String),
    TranslateRequested,
    TranslationSucceeded(String),
    TranslationFailed,
    QuizRequested,
    QuizSucceeded(Vec<QuizItem>),
    QuizFailed,
    AudioRequested,
    AudioFinished,
    AudioFailed(String),
    SessionLoaded(HistoryEntry),
}

impl TranslationPhase {
    /// Text on display, real or placeholder
    pub fn text(&self) -> Option<&str> {
        match self {
            TranslationPhase::Ready(text) | TranslationPhase::Failed(text) => Some(text),
            TranslationPhase::Idle | TranslationPhase::Translating => None,
        }
    }
}

impl QuizPhase {
    pub fn items(&self) -> &[QuizItem] {
        match self {
            QuizPhase::Ready(items) | QuizPhase::Failed(items) => items,
            QuizPhase::Empty | QuizPhase::Generating => &[],
        }
    }
}

/// Everything the study screen shows, driven only by [`SessionEvent`]s
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub content: String,
    pub target_language: String,
    pub translation: TranslationPhase,
    pub quiz: QuizPhase,
    pub audio: AudioPhase,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            content: String::new(),
            target_language: DEFAULT_TARGET_LANGUAGE.to_string(),
            translation: TranslationPhase::default(),
            quiz: QuizPhase::default(),
            audio: AudioPhase::default(),
        }
    }
}

impl SessionState {
    pub fn can_translate(&self) -> bool {
        !self.content.trim().is_empty() && self.translation != TranslationPhase::Translating
    }

    pub fn can_generate_quiz(&self) -> bool {
        self.translation.text().is_some_and(|text| !text.is_empty())
            && self.quiz != QuizPhase::Generating
    }

    pub fn can_play_audio(&self) -> bool {
        self.translation.text().is_some_and(|text| !text.is_empty())
            && self.audio != AudioPhase::Playing
    }

    /// Pure transition function. Events that are not valid in the current
    /// state leave it unchanged.
    pub fn apply(self, event: SessionEvent) -> SessionState {
        match event {
            SessionEvent::ContentChanged(content) => SessionState { content, ..self },
            SessionEvent::TargetLanguageChanged(target_language) => SessionState {
                target_language,
                ..self
            },
            SessionEvent::TranslateRequested if self.can_translate() => SessionState {
                translation: TranslationPhase::Translating,
                quiz: QuizPhase::Empty,
                ..self
            },
            SessionEvent::TranslationSucceeded(text)
                if self.translation == TranslationPhase::Translating =>
            {
                SessionState {
                    translation: TranslationPhase::Ready(text),
                    ..self
                }
            }
            SessionEvent::TranslationFailed if self.translation == TranslationPhase::Translating => {
                let placeholder = translation_placeholder(&self.target_language);
                SessionState {
                    translation: TranslationPhase::Failed(placeholder),
                    ..self
                }
            }
            SessionEvent::QuizRequested if self.can_generate_quiz() => SessionState {
                quiz: QuizPhase::Generating,
                ..self
            },
            SessionEvent::QuizSucceeded(items) if self.quiz == QuizPhase::Generating => {
                SessionState {
                    quiz: QuizPhase::Ready(items),
                    ..self
                }
            }
            SessionEvent::QuizFailed if self.quiz == QuizPhase::Generating => {
                let placeholder = quiz_placeholder(&self.target_language);
                SessionState {
                    quiz: QuizPhase::Failed(placeholder),
                    ..self
                }
            }
            SessionEvent::AudioRequested if self.can_play_audio() => SessionState {
                audio: AudioPhase::Playing,
                ..self
            },
            SessionEvent::AudioFinished if self.audio == AudioPhase::Playing => SessionState {
                audio: AudioPhase::Idle,
                ..self
            },
            SessionEvent::AudioFailed(reason) if self.audio == AudioPhase::Playing => {
                SessionState {
                    audio: AudioPhase::Failed(reason),
                    ..self
                }
            }
            SessionEvent::SessionLoaded(entry) => SessionState {
                content: entry.original_content,
                target_language: entry.target_language_code,
                translation: TranslationPhase::Ready(entry.translated_content),
                quiz: QuizPhase::Empty,
                ..self
            },
            _ => self,
        }
    }
}
