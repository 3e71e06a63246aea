//! Test fixtures and factory functions for creating test data.

use chrono::NaiveDate;
use serde_json::json;
use uuid::Uuid;

use study_planner_backend::models::Flashcard;

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// Card with the given review state, as a store would return it.
pub fn card(question: &str, next_review_date: &str, memory_strength: u8, review_count: u32) -> Flashcard {
    let mut card = Flashcard::new(question, format!("Answer to {}", question), date(next_review_date));
    card.memory_strength = memory_strength;
    card.review_count = review_count;
    card
}

/// Card as raw JSON, for payloads a typed client could not build.
pub fn card_json(id: Uuid, memory_strength: i64, review_count: i64) -> serde_json::Value {
    json!({
        "id": id,
        "question": "What does the borrow checker enforce?",
        "answer": "Aliasing XOR mutability.",
        "memory_strength": memory_strength,
        "review_count": review_count,
        "next_review_date": "2024-01-01"
    })
}

/// Create a next-state request body.
pub fn next_state_request(card: &Flashcard, judgment: &str, reviewed_at: &str) -> serde_json::Value {
    json!({
        "card": card,
        "judgment": judgment,
        "reviewed_at": reviewed_at
    })
}

/// Create a queue or due-count request body.
pub fn due_cards_request(cards: &[Flashcard], today: Option<&str>) -> serde_json::Value {
    json!({
        "cards": cards,
        "today": today
    })
}

/// Create a summarize request body.
pub fn summarize_request(content: &str) -> serde_json::Value {
    json!({ "content": content })
}

/// Wrap model text in a `generateContent` response envelope.
pub fn gemini_envelope(text: &str) -> String {
    json!({
        "candidates": [{
            "content": { "parts": [{ "text": text }], "role": "model" },
            "finishReason": "STOP"
        }]
    })
    .to_string()
}
