//! Review endpoints
//!
//! Stateless: the caller sends the authoritative card records and writes the
//! returned outcome back to its own store.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use chrono::Utc;
use review_core::{build_due_queue, count_due};

use crate::error::Result;
use crate::models::*;
use crate::AppState;

/// POST /api/review/next-state
pub async fn next_state(
    State(state): State<AppState>,
    payload: std::result::Result<Json<NextStateRequest>, JsonRejection>,
) -> Result<Json<ReviewOutcome>> {
    let Json(payload) = payload?;
    // Unknown judgments fail here rather than defaulting
    let judgment: Judgment = payload.judgment.parse()?;
    let reviewed_at = payload.reviewed_at.unwrap_or_else(Utc::now);

    let outcome = state
        .scheduler
        .compute_next_state(&payload.card, judgment, reviewed_at)?;

    tracing::debug!(
        card_id = %outcome.card_id,
        judgment = %judgment,
        next_review_date = %outcome.next_review_date,
        memory_strength = outcome.memory_strength,
        "Scheduled card"
    );

    Ok(Json(outcome))
}

/// POST /api/review/queue
pub async fn queue(
    payload: std::result::Result<Json<DueCardsRequest>, JsonRejection>,
) -> Result<Json<DueQueueResponse>> {
    let Json(payload) = payload?;
    let today = payload.today_or(Utc::now());
    let queue = build_due_queue(&payload.cards, today);

    Ok(Json(DueQueueResponse {
        today,
        due_count: queue.len(),
        cards: queue.into_cards(),
    }))
}

/// POST /api/review/due-count
pub async fn due_count(
    payload: std::result::Result<Json<DueCardsRequest>, JsonRejection>,
) -> Result<Json<DueCountResponse>> {
    let Json(payload) = payload?;
    let today = payload.today_or(Utc::now());

    Ok(Json(DueCountResponse {
        today,
        due_count: count_due(&payload.cards, today),
    }))
}
