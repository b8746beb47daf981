use crate::e2e::helpers;

use helpers::{LiveContext, TestContext, QUIZ_MODEL_PATH, TRANSLATION_MODEL_PATH};
use lingualearn_backend::domain::history::{HistoryStore, MemoryHistoryBackend};
use lingualearn_backend::domain::session::{
    AudioPhase, QuizPhase, SessionOrchestrator, TranslationPhase,
};
use lingualearn_backend::infrastructure::client::HttpStudyClient;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::time::Duration;
use test_context::test_context;

type Session = SessionOrchestrator<HttpStudyClient, MemoryHistoryBackend>;

fn session(base_url: &str) -> Session {
    let client = HttpStudyClient::new(base_url, Duration::from_secs(5)).unwrap();
    let history = HistoryStore::open(MemoryHistoryBackend::new()).unwrap();
    SessionOrchestrator::new(client, history)
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_run_a_demo_session_end_to_end(ctx: &TestContext) {
    let mut session = session(&ctx.base_url);

    session.set_content("Photosynthesis turns light into chemical energy.");
    session.set_target_language("fr");
    session.translate().await.unwrap();

    let translated = session.state().translation.text().unwrap().to_string();
    assert!(matches!(session.state().translation, TranslationPhase::Ready(_)));
    assert!(translated.starts_with("[Demo Mode]"));

    // The demo translation is recorded as returned
    let entries = session.history().list();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].translated_content, translated);
    assert_eq!(entries[0].target_language_code, "fr");

    session.generate_quiz().await;
    assert!(matches!(session.state().quiz, QuizPhase::Ready(_)));
    assert_eq!(session.state().quiz.items().len(), 3);

    // Speech has no demo audio
    let audio = session.play_audio().await;
    assert!(audio.is_none());
    assert!(matches!(session.state().audio, AudioPhase::Failed(_)));
}

#[test_context(LiveContext)]
#[tokio::test]
async fn it_should_show_placeholders_when_gateways_fail(ctx: &mut LiveContext) {
    ctx.mock_model_error(TRANSLATION_MODEL_PATH, 500).await;
    ctx.mock_model_error(QUIZ_MODEL_PATH, 500).await;

    let mut session = session(&ctx.base_url);
    session.set_content("Hello world");
    session.set_target_language("es");
    session.translate().await.unwrap();

    assert!(matches!(session.state().translation, TranslationPhase::Failed(_)));
    assert_eq!(
        session.history().list()[0].translated_content,
        "[Demo Translation] This is a simulated translation of your content to es."
    );

    session.generate_quiz().await;
    let QuizPhase::Failed(items) = &session.state().quiz else {
        panic!("expected placeholder quiz, got {:?}", session.state().quiz);
    };
    assert_eq!(items.len(), 2);
    assert_eq!(items[1].correct_answer, 1);
}

#[test_context(LiveContext)]
#[tokio::test]
async fn it_should_restore_a_past_session_without_calling_gateways(ctx: &mut LiveContext) {
    let translate_mock = ctx
        .mock_model_json(
            TRANSLATION_MODEL_PATH,
            &json!([{ "translation_text": "Hola mundo" }]),
        )
        .await;

    let mut session = session(&ctx.base_url);
    session.set_content("Hello world");
    session.set_target_language("es");
    session.translate().await.unwrap();
    translate_mock.assert_async().await;

    let id = session.history().list()[0].id.clone();

    session.set_content("Something else");
    assert!(session.load_session(&id));

    let state = session.state();
    assert_eq!(state.content, "Hello world");
    assert_eq!(state.target_language, "es");
    assert_eq!(state.translation, TranslationPhase::Ready("Hola mundo".to_string()));
    assert_eq!(state.quiz, QuizPhase::Empty);

    // Only the original translate call reached the model
    translate_mock.assert_async().await;

    assert!(session.delete_history_entry(&id).unwrap());
    assert!(!session.load_session(&id));
}
