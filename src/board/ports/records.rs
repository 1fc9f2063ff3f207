//! Wire records exchanged with the record store and their domain mapping.
//!
//! Records keep the store's natural shapes: strings for enumerations and
//! timestamps, integers for priorities and durations, and a JSON array
//! string for tag lists.

use crate::board::domain::{
    BoardDomainError, CalendarPreset, CompletionChange, ParseStatusError, ParseTimeModeError,
    PersistedTaskData, PresetDraft, PresetId, Priority, Settings, Status, TagSet, Task,
    TaskDraft, TaskId, TaskPatch, TimeMode,
};
use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const LEGACY_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Stored task row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    /// Task identifier.
    pub id: i64,
    /// Task text.
    pub content: String,
    /// Column name.
    pub status: String,
    /// Priority level, 0 to 2.
    pub priority: i64,
    /// Creation timestamp.
    pub created_at: String,
    /// Completion timestamp.
    pub completed_at: Option<String>,
    /// Due date.
    pub due_date: Option<String>,
    /// Time estimate in minutes.
    pub time_duration: Option<i64>,
    /// JSON array of tag names.
    pub tags: String,
}

/// Payload for inserting a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTaskRecord {
    /// Task text.
    pub content: String,
    /// Column name.
    pub status: String,
    /// Priority level, 0 to 2.
    pub priority: i64,
    /// JSON array of tag names.
    pub tags: String,
    /// Time estimate in minutes.
    pub time_duration: Option<i64>,
    /// Due date.
    pub due_date: Option<String>,
    /// Creation timestamp stamped by the board store.
    pub created_at: String,
    /// Completion timestamp, set when the task is created as done.
    pub completed_at: Option<String>,
}

/// Change to a nullable column in a partial update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", content = "value", rename_all = "snake_case")]
pub enum FieldUpdate<T> {
    /// Leave the stored value alone.
    #[default]
    Keep,
    /// Store a new value.
    Set(T),
    /// Store null.
    Clear,
}

impl<T> FieldUpdate<T> {
    /// Applies the update to a nullable slot.
    pub fn apply_to(self, slot: &mut Option<T>) {
        match self {
            Self::Keep => {}
            Self::Set(value) => *slot = Some(value),
            Self::Clear => *slot = None,
        }
    }

    /// Returns `true` when the stored value is left alone.
    #[must_use]
    pub const fn is_keep(&self) -> bool {
        matches!(self, Self::Keep)
    }

    fn from_change(change: Option<Option<T>>) -> Self {
        match change {
            None => Self::Keep,
            Some(Some(value)) => Self::Set(value),
            Some(None) => Self::Clear,
        }
    }
}

/// Payload for a partial task update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskUpdateRecord {
    /// Replacement text.
    pub content: Option<String>,
    /// Replacement column name.
    pub status: Option<String>,
    /// Replacement priority level.
    pub priority: Option<i64>,
    /// Replacement JSON tag array.
    pub tags: Option<String>,
    /// Time estimate change.
    pub time_duration: FieldUpdate<i64>,
    /// Due date change.
    pub due_date: FieldUpdate<String>,
    /// Completion timestamp change, derived from the status change.
    pub completed_at: FieldUpdate<String>,
}

/// Stored settings row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsRecord {
    /// Theme identifier.
    pub theme: String,
    /// Budget period name.
    pub time_mode: String,
    /// Available hours.
    pub available_time: i64,
}

/// Stored calendar preset row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetRecord {
    /// Preset identifier.
    pub id: i64,
    /// Preset name.
    pub name: String,
    /// JSON array of tag names.
    pub default_tags: String,
    /// Priority level, 0 to 2.
    pub default_priority: i64,
}

/// Payload for inserting a calendar preset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPresetRecord {
    /// Preset name.
    pub name: String,
    /// JSON array of tag names.
    pub default_tags: String,
    /// Priority level, 0 to 2.
    pub default_priority: i64,
}

/// Errors raised when a stored record cannot be mapped to the domain.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecordDecodeError {
    /// The status column holds an unknown value.
    #[error(transparent)]
    Status(#[from] ParseStatusError),

    /// The time mode column holds an unknown value.
    #[error(transparent)]
    TimeMode(#[from] ParseTimeModeError),

    /// A field failed domain validation.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),

    /// The tag column is not a JSON array of strings.
    #[error("invalid tag list {raw:?}: {message}")]
    Tags {
        /// Stored value.
        raw: String,
        /// Parser message.
        message: String,
    },

    /// A timestamp column could not be parsed.
    #[error("invalid timestamp {0:?}")]
    Timestamp(String),

    /// The due date column could not be parsed.
    #[error("invalid due date {0:?}")]
    DueDate(String),

    /// The time estimate is negative or too large.
    #[error("invalid time duration {0}")]
    TimeDuration(i64),
}

impl TryFrom<TaskRecord> for Task {
    type Error = RecordDecodeError;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        let time_duration = record
            .time_duration
            .map(|minutes| {
                u32::try_from(minutes).map_err(|_| RecordDecodeError::TimeDuration(minutes))
            })
            .transpose()?;
        Ok(Self::from_persisted(PersistedTaskData {
            id: TaskId::new(record.id),
            status: decode_status(&record.status)?,
            priority: Priority::try_from(record.priority)?,
            tags: decode_tags(&record.tags)?,
            time_duration,
            due_date: record.due_date.as_deref().map(parse_due_date).transpose()?,
            created_at: parse_timestamp(&record.created_at)?,
            completed_at: record
                .completed_at
                .as_deref()
                .map(parse_timestamp)
                .transpose()?,
            content: record.content,
        }))
    }
}

impl TryFrom<&Task> for TaskRecord {
    type Error = serde_json::Error;

    fn try_from(task: &Task) -> Result<Self, Self::Error> {
        Ok(Self {
            id: task.id().value(),
            content: task.content().to_owned(),
            status: task.status().as_str().to_owned(),
            priority: task.priority().level(),
            created_at: format_timestamp(task.created_at()),
            completed_at: task.completed_at().map(format_timestamp),
            due_date: task.due_date().map(format_due_date),
            time_duration: task.time_duration().map(i64::from),
            tags: task.tags().to_wire()?,
        })
    }
}

impl NewTaskRecord {
    /// Encodes a draft stamped at `created_at`.
    ///
    /// # Errors
    ///
    /// Returns the JSON error if the tag list cannot be encoded.
    pub fn from_draft(draft: &TaskDraft, created_at: DateTime<Utc>) -> Result<Self, serde_json::Error> {
        Ok(Self {
            content: draft.content().to_owned(),
            status: draft.status().as_str().to_owned(),
            priority: draft.priority().level(),
            tags: draft.tags().to_wire()?,
            time_duration: draft.time_duration().map(i64::from),
            due_date: draft.due_date().map(format_due_date),
            created_at: format_timestamp(created_at),
            completed_at: draft
                .status()
                .is_done()
                .then(|| format_timestamp(created_at)),
        })
    }
}

impl TaskUpdateRecord {
    /// Encodes a patch together with the completion change it caused.
    ///
    /// # Errors
    ///
    /// Returns the JSON error if the tag list cannot be encoded.
    pub fn from_patch(
        patch: &TaskPatch,
        completion: CompletionChange,
    ) -> Result<Self, serde_json::Error> {
        let completed_at = match completion {
            CompletionChange::Unchanged => FieldUpdate::Keep,
            CompletionChange::Stamped(at) => FieldUpdate::Set(format_timestamp(at)),
            CompletionChange::Cleared => FieldUpdate::Clear,
        };
        Ok(Self {
            content: patch.content().map(str::to_owned),
            status: patch.status().map(|status| status.as_str().to_owned()),
            priority: patch.priority().map(Priority::level),
            tags: patch.tags().map(TagSet::to_wire).transpose()?,
            time_duration: FieldUpdate::from_change(
                patch.time_duration().map(|change| change.map(i64::from)),
            ),
            due_date: FieldUpdate::from_change(
                patch.due_date().map(|change| change.map(format_due_date)),
            ),
            completed_at,
        })
    }

    /// Returns `true` if the update changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.content.is_none()
            && self.status.is_none()
            && self.priority.is_none()
            && self.tags.is_none()
            && self.time_duration.is_keep()
            && self.due_date.is_keep()
            && self.completed_at.is_keep()
    }
}

impl TryFrom<SettingsRecord> for Settings {
    type Error = RecordDecodeError;

    fn try_from(record: SettingsRecord) -> Result<Self, Self::Error> {
        let time_mode = TimeMode::try_from(record.time_mode.as_str())?;
        Ok(Self::new(record.theme, time_mode, record.available_time)?)
    }
}

impl From<&Settings> for SettingsRecord {
    fn from(settings: &Settings) -> Self {
        Self {
            theme: settings.theme().to_owned(),
            time_mode: settings.time_mode().as_str().to_owned(),
            available_time: i64::from(settings.available_time()),
        }
    }
}

impl TryFrom<PresetRecord> for CalendarPreset {
    type Error = RecordDecodeError;

    fn try_from(record: PresetRecord) -> Result<Self, Self::Error> {
        let draft = PresetDraft::new(record.name)?
            .with_default_tags(decode_tags(&record.default_tags)?)
            .with_default_priority(Priority::try_from(record.default_priority)?);
        Ok(Self::from_draft(PresetId::new(record.id), draft))
    }
}

impl NewPresetRecord {
    /// Encodes a preset draft.
    ///
    /// # Errors
    ///
    /// Returns the JSON error if the tag list cannot be encoded.
    pub fn from_draft(draft: &PresetDraft) -> Result<Self, serde_json::Error> {
        Ok(Self {
            name: draft.name().to_owned(),
            default_tags: draft.default_tags().to_wire()?,
            default_priority: draft.default_priority().level(),
        })
    }
}

/// Decodes a stored status.
///
/// A bare integer is a known corruption of older stores and decodes as
/// [`Status::Inbox`].
///
/// # Errors
///
/// Returns [`RecordDecodeError::Status`] for any other unknown value.
pub fn decode_status(raw: &str) -> Result<Status, RecordDecodeError> {
    if raw.trim().parse::<i64>().is_ok() {
        return Ok(Status::Inbox);
    }
    Ok(Status::try_from(raw)?)
}

/// Formats a timestamp as RFC 3339 with millisecond precision in UTC.
#[must_use]
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parses an RFC 3339 timestamp, or the store's legacy
/// `YYYY-MM-DD HH:MM:SS` default read as UTC.
///
/// # Errors
///
/// Returns [`RecordDecodeError::Timestamp`] when neither format matches.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, RecordDecodeError> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, LEGACY_TIMESTAMP_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| RecordDecodeError::Timestamp(raw.to_owned()))
}

fn format_due_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn parse_due_date(raw: &str) -> Result<NaiveDate, RecordDecodeError> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        return Ok(date);
    }
    parse_timestamp(raw)
        .map(|at| at.date_naive())
        .map_err(|_| RecordDecodeError::DueDate(raw.to_owned()))
}

fn decode_tags(raw: &str) -> Result<TagSet, RecordDecodeError> {
    TagSet::from_wire(raw).map_err(|err| RecordDecodeError::Tags {
        raw: raw.to_owned(),
        message: err.to_string(),
    })
}
