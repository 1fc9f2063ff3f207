//! Identifier types for the board domain.

use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a task record, assigned by the record store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(i64);

impl TaskId {
    /// Creates a task identifier from its raw value.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a calendar preset record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PresetId(i64);

impl PresetId {
    /// Creates a preset identifier from its raw value.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for PresetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Issues identifiers for records the record store failed to number.
///
/// Identifiers are the clock's milliseconds since the Unix epoch, bumped so
/// that every issued value is strictly greater than the previous one.
#[derive(Debug, Clone, Default)]
pub struct FallbackIds {
    last: Option<i64>,
}

impl FallbackIds {
    /// Creates a generator that has not issued anything yet.
    #[must_use]
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Returns the next fallback identifier.
    pub fn next_id(&mut self, clock: &impl Clock) -> i64 {
        let now = clock.utc().timestamp_millis();
        let id = match self.last {
            Some(last) => now.max(last.saturating_add(1)),
            None => now,
        };
        self.last = Some(id);
        id
    }
}
