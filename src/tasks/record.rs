//! Task record types.

use std::fmt;

use serde::{Serialize, Serializer};

/// Task identifier: the letter `T` followed by exactly three digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskId(String);

impl TaskId {
    /// Prefix letter shared by every task identifier.
    pub const PREFIX: char = 'T';

    /// Parse an identifier such as `T007`.
    ///
    /// Returns `None` unless the input is the prefix followed by three ASCII digits.
    pub fn parse(raw: &str) -> Option<Self> {
        let digits = raw.strip_prefix(Self::PREFIX)?;
        if digits.len() == 3 && digits.bytes().all(|b| b.is_ascii_digit()) {
            Some(Self(raw.to_string()))
        } else {
            None
        }
    }

    /// The identifier as written in the document.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of the three-digit suffix (`T008` is 8).
    pub fn number(&self) -> u16 {
        self.0[1..].bytes().fold(0, |acc, b| acc * 10 + u16::from(b - b'0'))
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for TaskId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// A single task extracted from a task list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRecord {
    /// Task identifier (`T001`)
    pub id: TaskId,

    /// Title text following the identifier
    pub title: String,

    /// Whether the task carries the `[P]` parallel marker
    pub parallelizable: bool,

    /// Free-text description, acceptance criteria excluded
    pub description: String,

    /// One entry per `- Acceptance:` line
    pub acceptance_criteria: Vec<String>,
}

impl TaskRecord {
    /// Create a record with an empty description and no acceptance criteria.
    pub fn new(id: TaskId, title: impl Into<String>, parallelizable: bool) -> Self {
        Self {
            id,
            title: title.into(),
            parallelizable,
            description: String::new(),
            acceptance_criteria: Vec::new(),
        }
    }

    /// Issue title: `<id>: <title>`.
    pub fn issue_title(&self) -> String {
        format!("{}: {}", self.id, self.title)
    }
}
