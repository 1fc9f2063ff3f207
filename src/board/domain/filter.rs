//! Search and filter engine plus the priority ordering used by columns.

use super::{Priority, Task};
use std::collections::BTreeSet;

/// Tri-state filter on whether a task carries a time estimate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TimeFilter {
    /// No constraint.
    #[default]
    Any,
    /// Only tasks with an estimate.
    WithTime,
    /// Only tasks without an estimate.
    WithoutTime,
}

impl TimeFilter {
    /// Returns `true` if a task with or without an estimate passes.
    #[must_use]
    pub const fn accepts(self, has_time: bool) -> bool {
        match self {
            Self::Any => true,
            Self::WithTime => has_time,
            Self::WithoutTime => !has_time,
        }
    }

    /// Returns the filter for the "has time" toggle: pressing the active
    /// state again switches the filter off.
    #[must_use]
    pub fn toggled(self, selected: Self) -> Self {
        if self == selected { Self::Any } else { selected }
    }
}

/// Partial filter update; unset fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterPatch {
    /// Replacement tag selection.
    pub tags: Option<Vec<String>>,
    /// Replacement priority selection.
    pub priorities: Option<Vec<Priority>>,
    /// Replacement time filter.
    pub time: Option<TimeFilter>,
}

/// Search query and filter selection deciding which tasks are visible.
///
/// A task is visible when every active dimension accepts it. Empty
/// dimensions accept everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    query: String,
    tags: BTreeSet<String>,
    priorities: BTreeSet<Priority>,
    time: TimeFilter,
}

impl TaskFilter {
    /// Creates a filter that accepts every task.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search text.
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Sets the tag selection.
    #[must_use]
    pub fn with_tags<S: Into<String>>(mut self, tags: impl IntoIterator<Item = S>) -> Self {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the priority selection.
    #[must_use]
    pub fn with_priorities(mut self, priorities: impl IntoIterator<Item = Priority>) -> Self {
        self.priorities = priorities.into_iter().collect();
        self
    }

    /// Sets the time filter.
    #[must_use]
    pub const fn with_time(mut self, time: TimeFilter) -> Self {
        self.time = time;
        self
    }

    /// Returns the search text.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns the selected tags.
    #[must_use]
    pub const fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    /// Returns the selected priorities.
    #[must_use]
    pub const fn priorities(&self) -> &BTreeSet<Priority> {
        &self.priorities
    }

    /// Returns the time filter.
    #[must_use]
    pub const fn time(&self) -> TimeFilter {
        self.time
    }

    /// Replaces the search text.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Merges a partial update.
    pub fn apply(&mut self, patch: FilterPatch) {
        if let Some(tags) = patch.tags {
            self.tags = tags.into_iter().collect();
        }
        if let Some(priorities) = patch.priorities {
            self.priorities = priorities.into_iter().collect();
        }
        if let Some(time) = patch.time {
            self.time = time;
        }
    }

    /// Selects `tag` if unselected, otherwise unselects it. Returns whether
    /// the tag is selected afterwards.
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        if self.tags.remove(tag) {
            return false;
        }
        self.tags.insert(tag.to_owned());
        true
    }

    /// Selects `priority` if unselected, otherwise unselects it. Returns
    /// whether the priority is selected afterwards.
    pub fn toggle_priority(&mut self, priority: Priority) -> bool {
        if self.priorities.remove(&priority) {
            return false;
        }
        self.priorities.insert(priority);
        true
    }

    /// Resets the query and every filter dimension.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Counts active selections: each tag, each priority, the time filter,
    /// and a non-empty query count once.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.tags.len()
            + self.priorities.len()
            + usize::from(self.time != TimeFilter::Any)
            + usize::from(!self.query.is_empty())
    }

    /// Returns `true` if any dimension constrains the result.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active_count() > 0
    }

    /// Returns `true` if `task` passes every active dimension.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.matches_query(task)
            && self.matches_tags(task)
            && (self.priorities.is_empty() || self.priorities.contains(&task.priority()))
            && self.time.accepts(task.time_duration().is_some())
    }

    /// Returns the visible tasks in collection order.
    #[must_use]
    pub fn visible<'a>(&self, tasks: &'a [Task]) -> Vec<&'a Task> {
        tasks.iter().filter(|task| self.matches(task)).collect()
    }

    fn matches_query(&self, task: &Task) -> bool {
        if self.query.is_empty() {
            return true;
        }
        task.content()
            .to_lowercase()
            .contains(&self.query.to_lowercase())
    }

    fn matches_tags(&self, task: &Task) -> bool {
        self.tags.is_empty() || task.tags().iter().any(|tag| self.tags.contains(tag))
    }
}

/// Orders tasks by priority, highest first.
///
/// The sort is stable, so tasks of equal priority keep their collection
/// order.
pub fn order_by_priority(tasks: &mut [&Task]) {
    tasks.sort_by(|left, right| right.priority().cmp(&left.priority()));
}
