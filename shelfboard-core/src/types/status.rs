//! Reading status, one per board column

use crate::error::ParseStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Reading status of a book. Each status is rendered as its own column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[default]
    #[serde(rename = "To Read", alias = "to_read")]
    ToRead,

    #[serde(rename = "Reading", alias = "reading")]
    Reading,

    #[serde(rename = "Completed", alias = "completed")]
    Completed,
}

impl Status {
    /// All statuses in column order
    pub const ALL: [Status; 3] = [Status::ToRead, Status::Reading, Status::Completed];

    /// Display label, also used as the column's container tag
    pub fn label(self) -> &'static str {
        match self {
            Status::ToRead => "To Read",
            Status::Reading => "Reading",
            Status::Completed => "Completed",
        }
    }

    /// Position of this status's column on the board
    pub fn column(self) -> usize {
        match self {
            Status::ToRead => 0,
            Status::Reading => 1,
            Status::Completed => 2,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Status {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "toread" => Ok(Status::ToRead),
            "reading" => Ok(Status::Reading),
            "completed" => Ok(Status::Completed),
            _ => Err(ParseStatusError(s.to_string())),
        }
    }
}
