//! Item identifiers
//!
//! IDs are plain integers seeded from the creation time in milliseconds.
//! The generator never hands out the same value twice: when the clock has
//! not advanced (or stepped backwards) it falls back to `last + 1`.

use std::fmt;
use std::str::FromStr;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum IdError {
    #[error("Invalid item ID: expected an integer, got '{0}'")]
    InvalidId(String),

    #[error("No item IDs left after {0}")]
    Exhausted(i64),
}

/// Primary key of a [`TodoItem`](super::TodoItem)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(i64);

impl TodoId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw integer value
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TodoId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        s.parse::<i64>()
            .map(Self)
            .map_err(|_| IdError::InvalidId(s.to_string()))
    }
}

/// Hands out strictly increasing IDs
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: Option<i64>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raises the floor so the next ID is greater than `id`
    pub fn observe(&mut self, id: TodoId) {
        self.last = Some(self.last.map_or(id.0, |last| last.max(id.0)));
    }

    /// Returns the next ID using the current wall clock
    pub fn next(&mut self) -> Result<TodoId, IdError> {
        self.next_at(Utc::now().timestamp_millis())
    }

    /// Returns the next ID given an explicit clock reading in milliseconds
    ///
    /// Fails once the floor has reached `i64::MAX`; the floor is left as is.
    pub fn next_at(&mut self, now_ms: i64) -> Result<TodoId, IdError> {
        let value = match self.last {
            Some(last) if now_ms <= last => {
                last.checked_add(1).ok_or(IdError::Exhausted(last))?
            }
            _ => now_ms,
        };
        self.last = Some(value);
        Ok(TodoId(value))
    }
}
