//! Error types for Shelfboard Core

use crate::types::{BookId, Status};
use thiserror::Error;

/// Result type alias using ShelfError
pub type Result<T> = std::result::Result<T, ShelfError>;

/// Top-level error type for all Shelfboard operations
#[derive(Debug, Error)]
pub enum ShelfError {
    #[error("Form rejected: {0}")]
    Form(#[from] FormError),

    #[error("Move rejected: {0}")]
    Move(#[from] MoveError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Invalid script: {0}")]
    Script(#[from] serde_json::Error),
}

/// Reasons a form submission is turned away
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("title is empty")]
    MissingTitle,

    #[error("author is empty")]
    MissingAuthor,
}

/// Reasons a drag or move cannot be reconciled against the store
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error("no book at position {index} of column '{status}'")]
    UnknownSource { status: Status, index: usize },

    #[error("no book at position {index} of column '{status}'")]
    UnknownTarget { status: Status, index: usize },

    #[error("cross-column move stays in column '{0}'")]
    SameColumn(Status),

    #[error("unknown book {0}")]
    UnknownBook(BookId),
}

/// Errors from direct store access
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("index {index} out of range for store of {len} books")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("unknown book {0}")]
    UnknownBook(BookId),
}

/// Error returned when a status label cannot be parsed
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown status: {0}")]
pub struct ParseStatusError(pub String);
