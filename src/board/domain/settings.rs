//! User settings and the time budget they define.

use super::{BoardDomainError, ParseTimeModeError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Theme selected when no settings could be loaded.
pub const DEFAULT_THEME: &str = "cool-blues";

/// Hours available when no settings could be loaded.
pub const DEFAULT_AVAILABLE_HOURS: u32 = 12;

/// Period the available time budget covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeMode {
    /// Budget per day.
    #[default]
    Daily,
    /// Budget per week.
    Weekly,
}

impl TimeMode {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
        }
    }
}

impl fmt::Display for TimeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TimeMode {
    type Error = ParseTimeModeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            _ => Err(ParseTimeModeError(value.to_owned())),
        }
    }
}

/// Application settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    theme: String,
    time_mode: TimeMode,
    available_time: u32,
}

impl Settings {
    /// Creates validated settings.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidAvailableTime`] when
    /// `available_time` is not positive.
    pub fn new(
        theme: impl Into<String>,
        time_mode: TimeMode,
        available_time: i64,
    ) -> Result<Self, BoardDomainError> {
        Ok(Self {
            theme: theme.into(),
            time_mode,
            available_time: validate_available_time(available_time)?,
        })
    }

    /// Returns the theme identifier.
    #[must_use]
    pub fn theme(&self) -> &str {
        &self.theme
    }

    /// Returns the budget period.
    #[must_use]
    pub const fn time_mode(&self) -> TimeMode {
        self.time_mode
    }

    /// Returns the hours available to the doing column.
    #[must_use]
    pub const fn available_time(&self) -> u32 {
        self.available_time
    }

    /// Returns the doing-column capacity in minutes.
    #[must_use]
    pub const fn capacity_minutes(&self) -> u32 {
        self.available_time.saturating_mul(60)
    }

    /// Returns a copy of these settings with `patch` merged in.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidAvailableTime`] when the patch
    /// sets a non-positive budget.
    pub fn merged(&self, patch: &SettingsPatch) -> Result<Self, BoardDomainError> {
        let available_time = match patch.available_time {
            Some(hours) => validate_available_time(hours)?,
            None => self.available_time,
        };
        Ok(Self {
            theme: patch.theme.clone().unwrap_or_else(|| self.theme.clone()),
            time_mode: patch.time_mode.unwrap_or(self.time_mode),
            available_time,
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_owned(),
            time_mode: TimeMode::Daily,
            available_time: DEFAULT_AVAILABLE_HOURS,
        }
    }
}

/// Partial settings update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsPatch {
    theme: Option<String>,
    time_mode: Option<TimeMode>,
    available_time: Option<i64>,
}

impl SettingsPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Changes the theme.
    #[must_use]
    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    /// Changes the budget period.
    #[must_use]
    pub const fn with_time_mode(mut self, time_mode: TimeMode) -> Self {
        self.time_mode = Some(time_mode);
        self
    }

    /// Changes the available hours; validated when merged.
    #[must_use]
    pub const fn with_available_time(mut self, hours: i64) -> Self {
        self.available_time = Some(hours);
        self
    }
}

fn validate_available_time(hours: i64) -> Result<u32, BoardDomainError> {
    match u32::try_from(hours) {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(BoardDomainError::InvalidAvailableTime(hours)),
    }
}
