//! API request and response types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// Re-export shared types from review-core
pub use review_core::{Flashcard, Judgment, ReviewOutcome};

pub use crate::services::summarizer::NoteSummary;

// Review types

/// Body of POST /api/review/next-state.
///
/// `judgment` stays a string so unknown values reach the scheduler's
/// validation instead of a generic deserialization rejection.
#[derive(Debug, Serialize, Deserialize)]
pub struct NextStateRequest {
    pub card: Flashcard,
    pub judgment: String,
    pub reviewed_at: Option<DateTime<Utc>>,
}

/// Card collection sent by the client for queue computations.
#[derive(Debug, Serialize, Deserialize)]
pub struct DueCardsRequest {
    pub cards: Vec<Flashcard>,
    /// Defaults to the current UTC date.
    pub today: Option<NaiveDate>,
}

impl DueCardsRequest {
    pub fn today_or(&self, now: DateTime<Utc>) -> NaiveDate {
        self.today.unwrap_or_else(|| now.date_naive())
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DueQueueResponse {
    pub today: NaiveDate,
    pub due_count: usize,
    pub cards: Vec<Flashcard>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DueCountResponse {
    pub today: NaiveDate,
    pub due_count: usize,
}

// Note types

#[derive(Debug, Serialize, Deserialize)]
pub struct SummarizeNoteRequest {
    pub content: String,
}
