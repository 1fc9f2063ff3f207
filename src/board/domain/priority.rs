//! Task priority levels.

use super::BoardDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task priority. Serialized as its numeric level.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "i64", into = "i64")]
pub enum Priority {
    /// Level 0.
    #[default]
    Normal,
    /// Level 1.
    Medium,
    /// Level 2.
    High,
}

impl Priority {
    /// Every priority, lowest first.
    pub const ALL: [Self; 3] = [Self::Normal, Self::Medium, Self::High];

    /// Returns the numeric level.
    #[must_use]
    pub const fn level(self) -> i64 {
        match self {
            Self::Normal => 0,
            Self::Medium => 1,
            Self::High => 2,
        }
    }

    /// Returns the next priority, wrapping from high back to normal.
    #[must_use]
    pub const fn cycled(self) -> Self {
        match self {
            Self::Normal => Self::Medium,
            Self::Medium => Self::High,
            Self::High => Self::Normal,
        }
    }

    /// Returns the badge label shown on task cards.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl TryFrom<i64> for Priority {
    type Error = BoardDomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Normal),
            1 => Ok(Self::Medium),
            2 => Ok(Self::High),
            other => Err(BoardDomainError::InvalidPriority(other)),
        }
    }
}

impl From<Priority> for i64 {
    fn from(value: Priority) -> Self {
        value.level()
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
