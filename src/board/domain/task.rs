//! Task aggregate, creation drafts, and typed update patches.

use super::{BoardDomainError, Priority, Status, TagSet, TaskId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Validated input for creating a task.
///
/// Carries every task field except identity and timestamps, which the store
/// assigns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    content: String,
    status: Status,
    priority: Priority,
    tags: TagSet,
    time_duration: Option<u32>,
    due_date: Option<NaiveDate>,
}

impl TaskDraft {
    /// Creates an inbox draft with normal priority.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTaskContent`] when `content` is blank.
    pub fn new(content: impl Into<String>) -> Result<Self, BoardDomainError> {
        Ok(Self {
            content: validate_content(content.into())?,
            status: Status::Inbox,
            priority: Priority::Normal,
            tags: TagSet::new(),
            time_duration: None,
            due_date: None,
        })
    }

    /// Sets the starting column.
    #[must_use]
    pub const fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the tags.
    #[must_use]
    pub fn with_tags(mut self, tags: TagSet) -> Self {
        self.tags = tags;
        self
    }

    /// Sets the time estimate in minutes.
    #[must_use]
    pub const fn with_time_duration(mut self, minutes: u32) -> Self {
        self.time_duration = Some(minutes);
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Returns the task text.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the starting column.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the tags.
    #[must_use]
    pub const fn tags(&self) -> &TagSet {
        &self.tags
    }

    /// Returns the time estimate in minutes, if any.
    #[must_use]
    pub const fn time_duration(&self) -> Option<u32> {
        self.time_duration
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    content: String,
    status: Status,
    priority: Priority,
    tags: TagSet,
    time_duration: Option<u32>,
    due_date: Option<NaiveDate>,
    created_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted task text.
    pub content: String,
    /// Persisted column.
    pub status: Status,
    /// Persisted priority.
    pub priority: Priority,
    /// Persisted tags.
    pub tags: TagSet,
    /// Persisted time estimate in minutes.
    pub time_duration: Option<u32>,
    /// Persisted due date.
    pub due_date: Option<NaiveDate>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted completion timestamp.
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates a task from a draft.
    ///
    /// A draft that starts in the done column is stamped as completed at
    /// `created_at`.
    #[must_use]
    pub fn from_draft(id: TaskId, draft: TaskDraft, created_at: DateTime<Utc>) -> Self {
        let completed_at = draft.status.is_done().then_some(created_at);
        Self {
            id,
            content: draft.content,
            status: draft.status,
            priority: draft.priority,
            tags: draft.tags,
            time_duration: draft.time_duration,
            due_date: draft.due_date,
            created_at,
            completed_at,
        }
    }

    /// Reconstructs a task from persisted storage.
    ///
    /// The completion timestamp is dropped for tasks outside the done column
    /// so the aggregate never carries a stale completion.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        let completed_at = if data.status.is_done() {
            data.completed_at
        } else {
            None
        };
        Self {
            id: data.id,
            content: data.content,
            status: data.status,
            priority: data.priority,
            tags: data.tags,
            time_duration: data.time_duration,
            due_date: data.due_date,
            created_at: data.created_at,
            completed_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task text.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the current column.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the tags.
    #[must_use]
    pub const fn tags(&self) -> &TagSet {
        &self.tags
    }

    /// Returns the time estimate in minutes, if any.
    #[must_use]
    pub const fn time_duration(&self) -> Option<u32> {
        self.time_duration
    }

    /// Returns the time estimate in minutes, counting a missing one as zero.
    #[must_use]
    pub fn estimated_minutes(&self) -> u32 {
        self.time_duration.unwrap_or_default()
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the completion timestamp; present only in the done column.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Merges a patch into the task.
    ///
    /// A status change into done stamps `completed_at` with `now`; any status
    /// outside done clears it. The returned value describes what happened to
    /// the completion timestamp so it can be forwarded to the record store.
    pub fn apply_patch(&mut self, patch: &TaskPatch, now: DateTime<Utc>) -> CompletionChange {
        if let Some(content) = &patch.content {
            self.content.clone_from(content);
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(tags) = &patch.tags {
            self.tags.clone_from(tags);
        }
        if let Some(time_duration) = patch.time_duration {
            self.time_duration = time_duration;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }

        let Some(status) = patch.status else {
            return CompletionChange::Unchanged;
        };
        let previous = self.status;
        self.status = status;
        match (previous.is_done(), status.is_done()) {
            (false, true) => {
                self.completed_at = Some(now);
                CompletionChange::Stamped(now)
            }
            (_, false) if self.completed_at.is_some() => {
                self.completed_at = None;
                CompletionChange::Cleared
            }
            _ => CompletionChange::Unchanged,
        }
    }
}

/// Effect of a patch on a task's completion timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionChange {
    /// The completion timestamp was left as it was.
    Unchanged,
    /// The task entered the done column at the given time.
    Stamped(DateTime<Utc>),
    /// The task left the done column.
    Cleared,
}

/// Typed partial update for a task.
///
/// Identity, creation time, and completion time are not patchable; the
/// completion time is derived from status changes by [`Task::apply_patch`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    content: Option<String>,
    status: Option<Status>,
    priority: Option<Priority>,
    tags: Option<TagSet>,
    time_duration: Option<Option<u32>>,
    due_date: Option<Option<NaiveDate>>,
}

impl TaskPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the task text.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTaskContent`] when `content` is blank.
    pub fn with_content(mut self, content: impl Into<String>) -> Result<Self, BoardDomainError> {
        self.content = Some(validate_content(content.into())?);
        Ok(self)
    }

    /// Moves the task to another column.
    #[must_use]
    pub const fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Changes the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Replaces the tags.
    #[must_use]
    pub fn with_tags(mut self, tags: TagSet) -> Self {
        self.tags = Some(tags);
        self
    }

    /// Sets the time estimate in minutes.
    #[must_use]
    pub const fn with_time_duration(mut self, minutes: u32) -> Self {
        self.time_duration = Some(Some(minutes));
        self
    }

    /// Removes the time estimate.
    #[must_use]
    pub const fn without_time_duration(mut self) -> Self {
        self.time_duration = Some(None);
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(Some(due_date));
        self
    }

    /// Removes the due date.
    #[must_use]
    pub const fn without_due_date(mut self) -> Self {
        self.due_date = Some(None);
        self
    }

    /// Returns the replacement text, if patched.
    #[must_use]
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Returns the target column, if patched.
    #[must_use]
    pub const fn status(&self) -> Option<Status> {
        self.status
    }

    /// Returns the new priority, if patched.
    #[must_use]
    pub const fn priority(&self) -> Option<Priority> {
        self.priority
    }

    /// Returns the replacement tags, if patched.
    #[must_use]
    pub const fn tags(&self) -> Option<&TagSet> {
        self.tags.as_ref()
    }

    /// Returns the time estimate change: `Some(None)` clears it.
    #[must_use]
    pub const fn time_duration(&self) -> Option<Option<u32>> {
        self.time_duration
    }

    /// Returns the due date change: `Some(None)` clears it.
    #[must_use]
    pub const fn due_date(&self) -> Option<Option<NaiveDate>> {
        self.due_date
    }

    /// Returns `true` if the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.content.is_none()
            && self.status.is_none()
            && self.priority.is_none()
            && self.tags.is_none()
            && self.time_duration.is_none()
            && self.due_date.is_none()
    }
}

fn validate_content(content: String) -> Result<String, BoardDomainError> {
    if content.trim().is_empty() {
        return Err(BoardDomainError::EmptyTaskContent);
    }
    Ok(content)
}
