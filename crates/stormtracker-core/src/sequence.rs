use std::sync::atomic::{AtomicI64, Ordering};

use thiserror::Error;

/// Default first id handed out by a fresh sequence.
pub const DEFAULT_ID_OFFSET: i64 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    #[error("id offset must be non-negative, got {0}")]
    NegativeOffset(i64),
    #[error("id sequence exhausted at {0}")]
    Exhausted(i64),
}

/// A monotonically increasing, non-negative id source with step 1.
///
/// Ids are never reused within a single instance; concurrent callers are
/// serialized by the atomic counter alone. The counter never wraps: once it
/// cannot advance, every call fails with [`SequenceError::Exhausted`].
#[derive(Debug)]
pub struct IdSequence {
    next: AtomicI64,
}

impl IdSequence {
    /// Creates a sequence whose first id is `offset`.
    pub fn starting_at(offset: i64) -> Result<Self, SequenceError> {
        if offset < 0 {
            return Err(SequenceError::NegativeOffset(offset));
        }
        Ok(Self {
            next: AtomicI64::new(offset),
        })
    }

    /// Returns the next id.
    pub fn next_id(&self) -> Result<i64, SequenceError> {
        self.next
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |next| next.checked_add(1))
            .map_err(SequenceError::Exhausted)
    }

    /// Returns the id the next call to [`IdSequence::next_id`] will produce.
    pub fn peek(&self) -> i64 {
        self.next.load(Ordering::SeqCst)
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self {
            next: AtomicI64::new(DEFAULT_ID_OFFSET),
        }
    }
}
