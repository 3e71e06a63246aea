//! Due queue construction and cursor.

use chrono::NaiveDate;

use crate::error::{Result, SchedulerError};
use crate::types::Flashcard;

/// Snapshot of a learner's due cards with a caller-owned cursor.
///
/// Cards are ordered by `next_review_date`, ties in input order. The queue
/// owns copies of the records, so later edits to the source list are not
/// observed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DueQueue {
    cards: Vec<Flashcard>,
    cursor: usize,
}

impl DueQueue {
    /// Pop the card under the cursor.
    pub fn advance(&mut self) -> Result<&Flashcard> {
        let card = self.cards.get(self.cursor).ok_or(SchedulerError::EmptyQueue)?;
        self.cursor += 1;
        Ok(card)
    }

    /// Card that `advance` would return next.
    pub fn peek(&self) -> Option<&Flashcard> {
        self.cards.get(self.cursor)
    }

    /// Move the cursor back to the first card.
    pub fn restart(&mut self) {
        self.cursor = 0;
    }

    /// Total number of due cards, advanced or not.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards already handed out.
    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn remaining(&self) -> usize {
        self.cards.len() - self.cursor
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.cards.len()
    }

    /// Iterate over every due card without moving the cursor.
    pub fn iter(&self) -> std::slice::Iter<'_, Flashcard> {
        self.cards.iter()
    }

    pub fn into_cards(self) -> Vec<Flashcard> {
        self.cards
    }
}

impl<'a> IntoIterator for &'a DueQueue {
    type Item = &'a Flashcard;
    type IntoIter = std::slice::Iter<'a, Flashcard>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Build the queue of cards due on or before `today`.
pub fn build_due_queue(cards: &[Flashcard], today: NaiveDate) -> DueQueue {
    let mut due: Vec<Flashcard> = cards.iter().filter(|c| c.is_due(today)).cloned().collect();
    // sort_by_key is stable
    due.sort_by_key(|c| c.next_review_date);
    DueQueue { cards: due, cursor: 0 }
}

/// Number of cards due on or before `today`.
pub fn count_due(cards: &[Flashcard], today: NaiveDate) -> usize {
    cards.iter().filter(|c| c.is_due(today)).count()
}
