//! The book record - one card on the board

use super::Status;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Stable identifier assigned to a book when it is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(pub Uuid);

impl BookId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BookId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for BookId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// A tracked book
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookRecord {
    /// Unique identifier for this book
    #[serde(default)]
    pub id: BookId,

    pub title: String,

    pub author: String,

    /// Column the book currently sits in
    pub status: Status,

    /// When the book was added to the board
    #[serde(default = "Utc::now")]
    pub added_at: DateTime<Utc>,
}

impl BookRecord {
    /// Create a new book with a fresh identifier
    pub fn new(title: impl Into<String>, author: impl Into<String>, status: Status) -> Self {
        Self {
            id: BookId::new(),
            title: title.into(),
            author: author.into(),
            status,
            added_at: Utc::now(),
        }
    }

    /// Copy of this record moved to another column
    pub fn with_status(&self, status: Status) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }

    /// Records without a title render as nothing
    pub fn is_renderable(&self) -> bool {
        !self.title.is_empty()
    }
}
