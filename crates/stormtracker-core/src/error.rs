use thiserror::Error;

use crate::sequence::SequenceError;

/// Result type for storm store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("storm not found: {0}")]
    NotFound(i64),
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage operation timed out: {0}")]
    Timeout(String),
    #[error("storage query failed: {0}")]
    Query(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
    #[error(transparent)]
    Sequence(#[from] SequenceError),
}
