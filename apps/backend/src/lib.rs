pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{routing::{get, post}, Router};
use review_core::ReviewScheduler;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::services::summarizer::{GeminiSummarizer, NoteSummarizer};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub scheduler: Arc<ReviewScheduler>,
    pub summarizer: Arc<dyn NoteSummarizer>,
}

impl AppState {
    pub fn new(summarizer: Arc<dyn NoteSummarizer>) -> Self {
        Self {
            scheduler: Arc::new(ReviewScheduler::default()),
            summarizer,
        }
    }
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Review routes
        .route("/api/review/next-state", post(routes::review::next_state))
        .route("/api/review/queue", post(routes::review::queue))
        .route("/api/review/due-count", post(routes::review::due_count))
        // Note routes
        .route("/api/notes/summarize", post(routes::notes::summarize))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    if config.summarizer.api_key.is_none() {
        tracing::warn!("GEMINI_API_KEY is not set; note summarization will fail");
    }

    tracing::info!(model = %config.summarizer.model, "Initializing note summarizer...");
    let summarizer = GeminiSummarizer::new(&config.summarizer)?;

    let app = build_router(AppState::new(Arc::new(summarizer)));

    let addr = config.bind_addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
