//! Fixed-interval review scheduler.
//!
//! Easy recalls push a card a week out and raise its memory strength;
//! hard recalls bring it back tomorrow and lower it.

use chrono::{DateTime, Days, Utc};

use crate::error::{Result, SchedulerError};
use crate::types::{Flashcard, Judgment, ReviewOutcome, MAX_MEMORY_STRENGTH};

/// Review scheduler with configurable intervals and strength deltas.
#[derive(Debug, Clone)]
pub struct ReviewScheduler {
    pub easy_interval_days: u32,
    pub hard_interval_days: u32,
    pub easy_strength_gain: u8,
    pub hard_strength_loss: u8,
}

impl Default for ReviewScheduler {
    fn default() -> Self {
        Self {
            easy_interval_days: 7,
            hard_interval_days: 1,
            easy_strength_gain: 20,
            hard_strength_loss: 10,
        }
    }
}

impl ReviewScheduler {
    /// Compute the state a card moves to after being judged at `now`.
    ///
    /// The next review date is counted from the UTC date of `now`, not from
    /// the card's previous due date.
    pub fn compute_next_state(
        &self,
        card: &Flashcard,
        judgment: Judgment,
        now: DateTime<Utc>,
    ) -> Result<ReviewOutcome> {
        card.validate()?;

        let (interval_days, memory_strength) = match judgment {
            Judgment::Easy => (
                self.easy_interval_days,
                card.memory_strength
                    .saturating_add(self.easy_strength_gain)
                    .min(MAX_MEMORY_STRENGTH),
            ),
            Judgment::Hard => (
                self.hard_interval_days,
                card.memory_strength.saturating_sub(self.hard_strength_loss),
            ),
        };

        // Must land strictly after the review day.
        let interval = Days::new(u64::from(interval_days.max(1)));
        let next_review_date = now
            .date_naive()
            .checked_add_days(interval)
            .ok_or_else(|| {
                SchedulerError::invalid(format!("next review date out of range for review at {now}"))
            })?;

        Ok(ReviewOutcome {
            card_id: card.id,
            judgment,
            next_review_date,
            memory_strength,
            review_count: card.review_count.saturating_add(1),
            last_reviewed_at: now,
        })
    }
}

/// Schedule with the default intervals.
pub fn compute_next_state(
    card: &Flashcard,
    judgment: Judgment,
    now: DateTime<Utc>,
) -> Result<ReviewOutcome> {
    ReviewScheduler::default().compute_next_state(card, judgment, now)
}
