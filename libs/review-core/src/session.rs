//! Review session state machine.
//!
//! A session walks a [`DueQueue`] one card at a time:
//!
//! ```text
//! NotStarted -> Presenting(card) <-> AwaitingJudgment(card) -> Presenting(next) ... -> Completed
//! ```
//!
//! Revealing the answer is a presentation toggle; it only gates when a
//! judgment may be recorded. A card the scheduler rejects can be skipped.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SchedulerError};
use crate::queue::DueQueue;
use crate::scheduler::ReviewScheduler;
use crate::types::{Flashcard, Judgment, ReviewOutcome};

/// Where the session currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    NotStarted,
    /// Question shown, answer hidden.
    Presenting(Flashcard),
    /// Answer shown, waiting for Easy/Hard.
    AwaitingJudgment(Flashcard),
    Completed,
}

impl SessionState {
    fn name(&self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::Presenting(_) => "presenting",
            Self::AwaitingJudgment(_) => "awaiting_judgment",
            Self::Completed => "completed",
        }
    }
}

/// "Card i of n" for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionProgress {
    /// 1-based index of the card on screen, 0 before start.
    pub current: usize,
    pub total: usize,
}

/// Tally reported when the session completes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub reviewed: usize,
    pub easy: usize,
    pub hard: usize,
    /// Cards passed over without a judgment.
    pub skipped: usize,
}

/// One pass over a due queue.
#[derive(Debug, Clone)]
pub struct ReviewSession {
    queue: DueQueue,
    scheduler: ReviewScheduler,
    state: SessionState,
    summary: SessionSummary,
}

impl ReviewSession {
    pub fn new(queue: DueQueue) -> Self {
        Self::with_scheduler(queue, ReviewScheduler::default())
    }

    pub fn with_scheduler(queue: DueQueue, scheduler: ReviewScheduler) -> Self {
        Self {
            queue,
            scheduler,
            state: SessionState::NotStarted,
            summary: SessionSummary::default(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Card currently on screen, if any.
    pub fn current_card(&self) -> Option<&Flashcard> {
        match &self.state {
            SessionState::Presenting(card) | SessionState::AwaitingJudgment(card) => Some(card),
            SessionState::NotStarted | SessionState::Completed => None,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.state == SessionState::Completed
    }

    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            current: self.queue.position(),
            total: self.queue.len(),
        }
    }

    pub fn summary(&self) -> SessionSummary {
        self.summary
    }

    /// Present the first due card, or complete immediately on an empty queue.
    pub fn start(&mut self) -> Result<&SessionState> {
        if self.state != SessionState::NotStarted {
            return Err(self.wrong_state("start"));
        }
        self.present_next()?;
        Ok(&self.state)
    }

    /// Show the answer of the current card.
    pub fn reveal(&mut self) -> Result<()> {
        match std::mem::replace(&mut self.state, SessionState::NotStarted) {
            SessionState::Presenting(card) => {
                self.state = SessionState::AwaitingJudgment(card);
                Ok(())
            }
            other => {
                self.state = other;
                Err(self.wrong_state("reveal"))
            }
        }
    }

    /// Flip the current card back to its question.
    pub fn hide(&mut self) -> Result<()> {
        match std::mem::replace(&mut self.state, SessionState::NotStarted) {
            SessionState::AwaitingJudgment(card) => {
                self.state = SessionState::Presenting(card);
                Ok(())
            }
            other => {
                self.state = other;
                Err(self.wrong_state("hide"))
            }
        }
    }

    /// Record the learner's judgment and move on.
    ///
    /// Returns the outcome the caller must persist for the judged card.
    pub fn judge(&mut self, judgment: Judgment, now: DateTime<Utc>) -> Result<ReviewOutcome> {
        let card = match &self.state {
            SessionState::AwaitingJudgment(card) => card,
            _ => return Err(self.wrong_state("judge")),
        };
        let outcome = self.scheduler.compute_next_state(card, judgment, now)?;

        self.summary.reviewed += 1;
        match judgment {
            Judgment::Easy => self.summary.easy += 1,
            Judgment::Hard => self.summary.hard += 1,
        }

        self.present_next()?;
        Ok(outcome)
    }

    /// Move past the current card without recording a judgment.
    ///
    /// Leaves the card's stored state untouched.
    pub fn skip(&mut self) -> Result<()> {
        match self.state {
            SessionState::Presenting(_) | SessionState::AwaitingJudgment(_) => {
                self.summary.skipped += 1;
                self.present_next()
            }
            SessionState::NotStarted | SessionState::Completed => Err(self.wrong_state("skip")),
        }
    }

    fn present_next(&mut self) -> Result<()> {
        self.state = match self.queue.advance() {
            Ok(card) => SessionState::Presenting(card.clone()),
            Err(SchedulerError::EmptyQueue) => SessionState::Completed,
            Err(other) => return Err(other),
        };
        Ok(())
    }

    fn wrong_state(&self, action: &str) -> SchedulerError {
        SchedulerError::invalid(format!("cannot {action} while {}", self.state.name()))
    }
}
