//! Calendar presets: reusable templates for dated tasks.

use super::{BoardDomainError, PresetId, Priority, Status, TagSet, TaskDraft};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Validated input for creating a calendar preset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetDraft {
    name: String,
    default_tags: TagSet,
    default_priority: Priority,
}

impl PresetDraft {
    /// Creates a preset draft with no tags and normal priority.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyPresetName`] when `name` is blank.
    pub fn new(name: impl Into<String>) -> Result<Self, BoardDomainError> {
        let raw = name.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(BoardDomainError::EmptyPresetName);
        }
        Ok(Self {
            name: trimmed.to_owned(),
            default_tags: TagSet::new(),
            default_priority: Priority::Normal,
        })
    }

    /// Sets the tags applied to tasks created from the preset.
    #[must_use]
    pub fn with_default_tags(mut self, tags: TagSet) -> Self {
        self.default_tags = tags;
        self
    }

    /// Sets the priority applied to tasks created from the preset.
    #[must_use]
    pub const fn with_default_priority(mut self, priority: Priority) -> Self {
        self.default_priority = priority;
        self
    }

    /// Returns the preset name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the default tags.
    #[must_use]
    pub const fn default_tags(&self) -> &TagSet {
        &self.default_tags
    }

    /// Returns the default priority.
    #[must_use]
    pub const fn default_priority(&self) -> Priority {
        self.default_priority
    }
}

/// Stored calendar preset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarPreset {
    id: PresetId,
    name: String,
    default_tags: TagSet,
    default_priority: Priority,
}

impl CalendarPreset {
    /// Creates a stored preset from a draft and its assigned identifier.
    #[must_use]
    pub fn from_draft(id: PresetId, draft: PresetDraft) -> Self {
        Self {
            id,
            name: draft.name,
            default_tags: draft.default_tags,
            default_priority: draft.default_priority,
        }
    }

    /// Returns the preset identifier.
    #[must_use]
    pub const fn id(&self) -> PresetId {
        self.id
    }

    /// Returns the preset name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the default tags.
    #[must_use]
    pub const fn default_tags(&self) -> &TagSet {
        &self.default_tags
    }

    /// Returns the default priority.
    #[must_use]
    pub const fn default_priority(&self) -> Priority {
        self.default_priority
    }

    /// Builds the to-do task this preset schedules on `date`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTaskContent`] if the generated text
    /// is blank, which cannot happen for a validated preset name.
    pub fn task_draft_for(&self, date: NaiveDate) -> Result<TaskDraft, BoardDomainError> {
        let content = format!("{} - {}", self.name, date.format("%Y-%m-%d"));
        Ok(TaskDraft::new(content)?
            .with_status(Status::Todo)
            .with_priority(self.default_priority)
            .with_tags(self.default_tags.clone())
            .with_due_date(date))
    }
}
