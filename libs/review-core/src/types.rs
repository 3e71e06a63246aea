//! Core types for the review engine.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::SchedulerError;

/// Upper bound of a card's memory strength.
pub const MAX_MEMORY_STRENGTH: u8 = 100;

/// Learner's self-assessment of recall difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Judgment {
    Easy,
    Hard,
}

impl Judgment {
    /// Get the judgment name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Judgment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Judgment {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "hard" => Ok(Self::Hard),
            other => Err(SchedulerError::invalid(format!(
                "judgment must be \"easy\" or \"hard\", got {other:?}"
            ))),
        }
    }
}

/// Flashcard as stored by the persistence layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub id: Uuid,
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default)]
    pub memory_strength: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_reviewed_at: Option<DateTime<Utc>>,
    pub next_review_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note_id: Option<Uuid>,
}

impl Flashcard {
    /// Create an unreviewed card first due on `next_review_date`.
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        next_review_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            question: question.into(),
            answer: answer.into(),
            review_count: 0,
            memory_strength: 0,
            last_reviewed_at: None,
            next_review_date,
            note_id: None,
        }
    }

    /// Link the card to the note it was written from.
    pub fn with_note(mut self, note_id: Uuid) -> Self {
        self.note_id = Some(note_id);
        self
    }

    /// Whether the card should be reviewed on `today`.
    pub fn is_due(&self, today: NaiveDate) -> bool {
        self.next_review_date <= today
    }

    /// Reject state a well-behaved store could never hold.
    pub fn validate(&self) -> crate::Result<()> {
        if self.memory_strength > MAX_MEMORY_STRENGTH {
            return Err(SchedulerError::invalid(format!(
                "card {} has memory_strength {} outside 0..={}",
                self.id, self.memory_strength, MAX_MEMORY_STRENGTH
            )));
        }
        Ok(())
    }
}

/// Fields to write back to a card after a review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewOutcome {
    pub card_id: Uuid,
    pub judgment: Judgment,
    pub next_review_date: NaiveDate,
    pub memory_strength: u8,
    pub review_count: u32,
    pub last_reviewed_at: DateTime<Utc>,
}

impl ReviewOutcome {
    /// Apply the outcome to the card it was computed for.
    pub fn apply_to(&self, card: &mut Flashcard) -> crate::Result<()> {
        if card.id != self.card_id {
            return Err(SchedulerError::invalid(format!(
                "outcome for card {} applied to card {}",
                self.card_id, card.id
            )));
        }
        card.next_review_date = self.next_review_date;
        card.memory_strength = self.memory_strength;
        card.review_count = self.review_count;
        card.last_reviewed_at = Some(self.last_reviewed_at);
        Ok(())
    }
}
