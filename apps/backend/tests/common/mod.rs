//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext wiring the router with a stub summarizer
//! - A mock Gemini upstream served on a local port

pub mod fixtures;

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    extract::{Path, Query},
    http::StatusCode,
    routing::post,
    Router,
};
use axum_test::TestServer;

use study_planner_backend::services::summarizer::{NoteSummarizer, NoteSummary, SummarizerError};
use study_planner_backend::{build_router, AppState};

/// Summarizer returning canned results and recording inputs.
pub struct StubSummarizer {
    result: fn() -> Result<NoteSummary, SummarizerError>,
    pub calls: Mutex<Vec<String>>,
}

impl StubSummarizer {
    pub fn succeeding() -> Self {
        Self {
            result: || {
                Ok(NoteSummary {
                    summary: "Ownership moves values between bindings.".to_string(),
                    key_points: vec![
                        "Each value has one owner".to_string(),
                        "Borrows must not outlive the owner".to_string(),
                    ],
                })
            },
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            result: || {
                Err(SummarizerError::Upstream {
                    status: 503,
                    body: "{\"error\":\"overloaded\"}".to_string(),
                })
            },
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn unconfigured() -> Self {
        Self {
            result: || Err(SummarizerError::NotConfigured),
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl NoteSummarizer for StubSummarizer {
    async fn summarize(&self, content: &str) -> Result<NoteSummary, SummarizerError> {
        self.calls.lock().unwrap().push(content.to_string());
        (self.result)()
    }
}

/// Test context holding the stub summarizer behind the router.
pub struct TestContext {
    pub summarizer: Arc<StubSummarizer>,
    app: Router,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_summarizer(StubSummarizer::succeeding())
    }

    pub fn with_summarizer(summarizer: StubSummarizer) -> Self {
        let summarizer = Arc::new(summarizer);
        let app = build_router(AppState::new(summarizer.clone()));
        Self { summarizer, app }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).unwrap()
    }
}

/// Serve a fake `generateContent` endpoint answering with `status` and `body`.
///
/// Returns the base URL and the `key` query values received.
pub async fn spawn_mock_gemini(
    status: StatusCode,
    body: String,
) -> (String, Arc<Mutex<Vec<String>>>) {
    let seen_keys = Arc::new(Mutex::new(Vec::new()));
    let keys = seen_keys.clone();

    let app = Router::new().route(
        "/v1beta/models/:model",
        post(
            move |Path(model): Path<String>, Query(query): Query<HashMap<String, String>>| {
                let keys = keys.clone();
                let body = body.clone();
                async move {
                    assert!(model.ends_with(":generateContent"));
                    if let Some(key) = query.get("key") {
                        keys.lock().unwrap().push(key.clone());
                    }
                    (status, body)
                }
            },
        ),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), seen_keys)
}
