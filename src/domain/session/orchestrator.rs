use super::placeholder::history_placeholder;
use super::state::{AudioPhase, SessionEvent, SessionState};
use crate::domain::history::{HistoryBackend, HistoryError, HistoryStore};
use crate::domain::quiz::QuizItem;
use async_trait::async_trait;

/// Client view of the three gateways
#[async_trait]
pub trait StudyGateway: Send + Sync {
    async fn translate(&self, text: &str, target_language: &str) -> anyhow::Result<String>;

    async fn generate_quiz(&self, content: &str) -> anyhow::Result<Vec<QuizItem>>;

    async fn synthesize_speech(&self, text: &str, language: &str) -> anyhow::Result<Vec<u8>>;
}

/// Sequences gateway calls for one study session and keeps its history
pub struct SessionOrchestrator<G: StudyGateway, B: HistoryBackend> {
    gateway: G,
    history: HistoryStore<B>,
    state: SessionState,
}

impl<G: StudyGateway, B: HistoryBackend> SessionOrchestrator<G, B> {
    pub fn new(gateway: G, history: HistoryStore<B>) -> Self {
        Self {
            gateway,
            history,
            state: SessionState::default(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn history(&self) -> &HistoryStore<B> {
        &self.history
    }

    fn dispatch(&mut self, event: SessionEvent) {
        let state = std::mem::take(&mut self.state);
        self.state = state.apply(event);
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.dispatch(SessionEvent::ContentChanged(content.into()));
    }

    pub fn set_target_language(&mut self, target_language: impl Into<String>) {
        self.dispatch(SessionEvent::TargetLanguageChanged(target_language.into()));
    }

    /// Translate the current content. Always leaves a translation on display
    /// and records it in history, placeholder or not.
    pub async fn translate(&mut self) -> Result<(), HistoryError> {
        if !self.state.can_translate() {
            return Ok(());
        }
        self.dispatch(SessionEvent::TranslateRequested);

        let content = self.state.content.clone();
        let target_language = self.state.target_language.clone();

        let saved_translation = match self.gateway.translate(&content, &target_language).await {
            Ok(translated) => {
                self.dispatch(SessionEvent::TranslationSucceeded(translated.clone()));
                translated
            }
            Err(e) => {
                tracing::warn!(error = %e, "Translation failed, showing placeholder");
                self.dispatch(SessionEvent::TranslationFailed);
                history_placeholder(&target_language)
            }
        };

        self.history
            .record(&content, &saved_translation, &target_language)?;
        Ok(())
    }

    /// Generate a quiz from the displayed translation
    pub async fn generate_quiz(&mut self) {
        if !self.state.can_generate_quiz() {
            return;
        }
        let Some(translated) = self.state.translation.text().map(str::to_string) else {
            return;
        };
        self.dispatch(SessionEvent::QuizRequested);

        match self.gateway.generate_quiz(&translated).await {
            Ok(items) => self.dispatch(SessionEvent::QuizSucceeded(items)),
            Err(e) => {
                tracing::warn!(error = %e, "Quiz generation failed, showing placeholder");
                self.dispatch(SessionEvent::QuizFailed);
            }
        }
    }

    /// Fetch audio for the displayed translation. Returns the audio for the
    /// player; the session stays `Playing` until [`Self::finish_audio`].
    pub async fn play_audio(&mut self) -> Option<Vec<u8>> {
        if !self.state.can_play_audio() {
            return None;
        }
        let translated = self.state.translation.text().map(str::to_string)?;
        let language = self.state.target_language.clone();
        self.dispatch(SessionEvent::AudioRequested);

        match self.gateway.synthesize_speech(&translated, &language).await {
            Ok(audio) => Some(audio),
            Err(e) => {
                tracing::warn!(error = %e, "Speech synthesis failed");
                self.dispatch(SessionEvent::AudioFailed(e.to_string()));
                None
            }
        }
    }

    /// Playback ended or was stopped by the user
    pub fn finish_audio(&mut self) {
        if self.state.audio == AudioPhase::Playing {
            self.dispatch(SessionEvent::AudioFinished);
        }
    }

    /// Restore a past session without calling any gateway
    pub fn load_session(&mut self, id: &str) -> bool {
        match self.history.get(id).cloned() {
            Some(entry) => {
                self.dispatch(SessionEvent::SessionLoaded(entry));
                true
            }
            None => false,
        }
    }

    pub fn delete_history_entry(&mut self, id: &str) -> Result<bool, HistoryError> {
        self.history.remove(id)
    }

    pub fn clear_history(&mut self) -> Result<(), HistoryError> {
        self.history.clear()
    }
}
