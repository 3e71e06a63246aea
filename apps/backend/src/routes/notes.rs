//! Note summarization endpoint

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// POST /api/notes/summarize
pub async fn summarize(
    State(state): State<AppState>,
    payload: std::result::Result<Json<SummarizeNoteRequest>, JsonRejection>,
) -> Result<Json<NoteSummary>> {
    let Json(payload) = payload?;
    if payload.content.trim().is_empty() {
        return Err(ApiError::BadRequest("Note content is empty".to_string()));
    }

    let summary = state
        .summarizer
        .summarize(&payload.content)
        .await
        .map_err(|e| {
            tracing::error!("Error in summarize-note: {}", e);
            ApiError::from(e)
        })?;

    Ok(Json(summary))
}
