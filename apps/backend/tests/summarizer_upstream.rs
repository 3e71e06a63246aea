//! Gemini client tests against a local mock upstream.

mod common;

use std::time::Duration;

use axum::http::StatusCode;
use axum_test::TestServer;

use common::{fixtures, spawn_mock_gemini};
use study_planner_backend::config::SummarizerConfig;
use study_planner_backend::services::summarizer::{
    GeminiSummarizer, NoteSummarizer, SummarizerError,
};
use study_planner_backend::{build_router, AppState};

fn config_for(base_url: String) -> SummarizerConfig {
    SummarizerConfig {
        api_key: Some("test-key".to_string()),
        model: "gemini-pro".to_string(),
        base_url,
        timeout: Duration::from_secs(5),
    }
}

/// Fenced model output is unwrapped and parsed.
#[tokio::test]
async fn test_gemini_fenced_response() {
    let text = "```json\n{\"summary\": \"Traits define shared behavior.\", \"keyPoints\": [\"impl blocks\", \"generics\", \"dyn\"]}\n```";
    let (base_url, keys) = spawn_mock_gemini(StatusCode::OK, fixtures::gemini_envelope(text)).await;

    let summarizer = GeminiSummarizer::new(&config_for(base_url)).unwrap();
    let summary = summarizer.summarize("notes about traits").await.unwrap();

    assert_eq!(summary.summary, "Traits define shared behavior.");
    assert_eq!(summary.key_points.len(), 3);
    assert_eq!(keys.lock().unwrap().as_slice(), ["test-key".to_string()]);
}

/// Non-success status keeps the upstream body.
#[tokio::test]
async fn test_gemini_error_status() {
    let (base_url, _) = spawn_mock_gemini(
        StatusCode::TOO_MANY_REQUESTS,
        "{\"error\":{\"code\":429}}".to_string(),
    )
    .await;

    let summarizer = GeminiSummarizer::new(&config_for(base_url)).unwrap();
    let error = summarizer.summarize("notes").await.unwrap_err();

    assert!(matches!(error, SummarizerError::Upstream { status: 429, .. }));
    assert_eq!(error.upstream_body(), Some("{\"error\":{\"code\":429}}"));
}

/// Empty candidate list is an upstream contract failure.
#[tokio::test]
async fn test_gemini_no_candidates() {
    let (base_url, _) =
        spawn_mock_gemini(StatusCode::OK, "{\"candidates\": []}".to_string()).await;

    let summarizer = GeminiSummarizer::new(&config_for(base_url)).unwrap();
    let error = summarizer.summarize("notes").await.unwrap_err();

    assert!(matches!(error, SummarizerError::NoCandidates { .. }));
}

/// Unreachable upstream is a network error.
#[tokio::test]
async fn test_gemini_unreachable() {
    let summarizer =
        GeminiSummarizer::new(&config_for("http://127.0.0.1:9".to_string())).unwrap();
    let error = summarizer.summarize("notes").await.unwrap_err();

    assert!(matches!(error, SummarizerError::Network(_)));
}

/// End to end through the HTTP route.
#[tokio::test]
async fn test_summarize_route_with_gemini() {
    let text = "{\"summary\": \"Lifetimes name borrow scopes.\", \"keyPoints\": [\"'a\"]}";
    let (base_url, _) = spawn_mock_gemini(StatusCode::OK, fixtures::gemini_envelope(text)).await;

    let summarizer = GeminiSummarizer::new(&config_for(base_url)).unwrap();
    let server = TestServer::new(build_router(AppState::new(std::sync::Arc::new(summarizer)))).unwrap();

    let response = server
        .post("/api/notes/summarize")
        .json(&fixtures::summarize_request("notes about lifetimes"))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["summary"], "Lifetimes name borrow scopes.");
    assert_eq!(body["keyPoints"][0], "'a");
}
