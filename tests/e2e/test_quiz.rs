use crate::e2e::helpers;

use helpers::assertions::assert_quiz_response;
use helpers::{LiveContext, TestContext, QUIZ_MODEL_PATH};
use hyper::StatusCode;
use mockito::Matcher;
use serde_json::json;
use test_context::test_context;

fn generated(quiz: serde_json::Value) -> serde_json::Value {
    json!([{ "generated_text": quiz.to_string() }])
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_missing_content(ctx: &TestContext) {
    for body in [json!({}), json!({ "content": "" })] {
        let response = ctx.client.post("/api/quiz", &body).await.unwrap();

        response
            .assert_status(StatusCode::BAD_REQUEST)
            .assert_error_message("Content is required");
    }
}

#[test_context(LiveContext)]
#[tokio::test]
async fn it_should_not_call_model_for_empty_content(ctx: &mut LiveContext) {
    let mock = ctx
        .upstream
        .mock("POST", QUIZ_MODEL_PATH)
        .expect(0)
        .create_async()
        .await;

    let response = ctx
        .client
        .post("/api/quiz", &json!({ "content": "   " }))
        .await
        .unwrap();

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.json_field("error").is_some());
    mock.assert_async().await;
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_demo_quiz_without_credential(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/api/quiz", &json!({ "content": "La fotosíntesis convierte la luz en energía." }))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body.as_ref().unwrap();
    assert_quiz_response(body, 3);
    assert_eq!(
        body["quizzes"][2]["options"][3].as_str(),
        Some("All of the above")
    );
}

#[test_context(LiveContext)]
#[tokio::test]
async fn it_should_return_model_quiz(ctx: &mut LiveContext) {
    let quiz = json!([
        {
            "question": "¿Qué convierte la fotosíntesis?",
            "options": ["Luz", "Agua", "Sal", "Roca"],
            "correctAnswer": 0
        }
    ]);
    let mock = ctx
        .upstream
        .mock("POST", QUIZ_MODEL_PATH)
        .match_body(Matcher::PartialJson(json!({
            "parameters": { "max_new_tokens": 500 }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(generated(quiz).to_string())
        .create_async()
        .await;

    let response = ctx
        .client
        .post("/api/quiz", &json!({ "content": "La fotosíntesis convierte la luz." }))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body.as_ref().unwrap();
    assert_quiz_response(body, 1);
    assert_eq!(body["quizzes"][0]["options"][0].as_str(), Some("Luz"));
    mock.assert_async().await;
}

#[test_context(LiveContext)]
#[tokio::test]
async fn it_should_fall_back_when_model_returns_prose(ctx: &mut LiveContext) {
    ctx.mock_model_json(
        QUIZ_MODEL_PATH,
        &json!([{ "generated_text": "Here are some questions about the text." }]),
    )
    .await;

    let response = ctx
        .client
        .post("/api/quiz", &json!({ "content": "Some content" }))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_quiz_response(response.body.as_ref().unwrap(), 2);
}

#[test_context(LiveContext)]
#[tokio::test]
async fn it_should_fall_back_when_item_is_malformed(ctx: &mut LiveContext) {
    let quiz = json!([
        {
            "question": "Only three options?",
            "options": ["A", "B", "C"],
            "correctAnswer": 0
        }
    ]);
    ctx.mock_model_json(QUIZ_MODEL_PATH, &generated(quiz)).await;

    let response = ctx
        .client
        .post("/api/quiz", &json!({ "content": "Some content" }))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_quiz_response(response.body.as_ref().unwrap(), 2);
}

#[test_context(LiveContext)]
#[tokio::test]
async fn it_should_report_model_failure(ctx: &mut LiveContext) {
    ctx.mock_model_error(QUIZ_MODEL_PATH, 500).await;

    let response = ctx
        .client
        .post("/api/quiz", &json!({ "content": "Some content" }))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR)
        .assert_error_message("Quiz generation failed");
}
