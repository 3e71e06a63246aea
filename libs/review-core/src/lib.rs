//! Spaced repetition review engine shared by the study planner backend.
//!
//! Provides:
//! - Review scheduling (fixed Easy/Hard intervals, bounded memory strength)
//! - Due queue construction with an explicit cursor
//! - Review session state machine (present, reveal, judge, complete)
//! - Shared types (Flashcard, Judgment, ReviewOutcome)

pub mod error;
pub mod queue;
pub mod scheduler;
pub mod session;
pub mod types;

pub use error::{Result, SchedulerError};
pub use queue::{build_due_queue, count_due, DueQueue};
pub use scheduler::{compute_next_state, ReviewScheduler};
pub use session::{ReviewSession, SessionProgress, SessionState, SessionSummary};
pub use types::{Flashcard, Judgment, ReviewOutcome, MAX_MEMORY_STRENGTH};
