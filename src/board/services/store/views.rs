//! Read-side accessors and filter controls of the board store.

use super::TaskStore;
use crate::board::{
    domain::{
        CalendarPreset, DragState, FilterPatch, PresetId, Priority, Settings, Status, TagColor,
        Task, TaskFilter, TaskId, TimeUsage, order_by_priority,
    },
    ports::BoardPersistence,
};
use chrono::NaiveDate;
use indexmap::IndexSet;
use mockable::Clock;

/// One board column after filtering and priority ordering.
#[derive(Debug, Clone)]
pub struct ColumnView<'a> {
    /// Column status.
    pub status: Status,
    /// Visible tasks, highest priority first.
    pub tasks: Vec<&'a Task>,
}

impl<P, C> TaskStore<P, C>
where
    P: BoardPersistence,
    C: Clock + Send + Sync,
{
    /// Returns every task in collection order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the task with identifier `id`.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Returns the current settings.
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns every calendar preset.
    #[must_use]
    pub fn presets(&self) -> &[CalendarPreset] {
        &self.presets
    }

    /// Returns the preset with identifier `id`.
    #[must_use]
    pub fn preset(&self, id: PresetId) -> Option<&CalendarPreset> {
        self.presets.iter().find(|preset| preset.id() == id)
    }

    /// Returns the active filter.
    #[must_use]
    pub const fn filter(&self) -> &TaskFilter {
        &self.filter
    }

    /// Returns the drag state machine.
    #[must_use]
    pub const fn drag_state(&self) -> &DragState {
        &self.drag
    }

    /// Returns the colour for `tag`, assigning it on first use.
    pub fn tag_color(&mut self, tag: &str) -> TagColor {
        self.tag_colors.get_or_create(tag)
    }

    /// Returns every tag used by any task, in first-seen order.
    #[must_use]
    pub fn all_tags(&self) -> Vec<String> {
        self.tasks
            .iter()
            .flat_map(|task| task.tags().iter())
            .collect::<IndexSet<_>>()
            .into_iter()
            .map(str::to_owned)
            .collect()
    }

    /// Summarises the doing column against the time budget.
    #[must_use]
    pub fn time_usage(&self) -> TimeUsage {
        TimeUsage::measure(&self.tasks, &self.settings)
    }

    /// Returns the tasks due on `date`, in collection order.
    #[must_use]
    pub fn tasks_due_on(&self, date: NaiveDate) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| task.due_date() == Some(date))
            .collect()
    }

    /// Returns every task the filter accepts, in collection order.
    #[must_use]
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.filter.visible(&self.tasks)
    }

    /// Returns the visible tasks of one column, highest priority first.
    ///
    /// Ties keep collection order.
    #[must_use]
    pub fn column(&self, status: Status) -> Vec<&Task> {
        let mut tasks: Vec<&Task> = self
            .filter
            .visible(&self.tasks)
            .into_iter()
            .filter(|task| task.status() == status)
            .collect();
        order_by_priority(&mut tasks);
        tasks
    }

    /// Returns all four columns in board order.
    #[must_use]
    pub fn board(&self) -> Vec<ColumnView<'_>> {
        Status::ALL
            .into_iter()
            .map(|status| ColumnView {
                status,
                tasks: self.column(status),
            })
            .collect()
    }

    /// Replaces the free-text query.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.filter.set_query(query);
    }

    /// Merges a partial filter update.
    pub fn set_filters(&mut self, patch: FilterPatch) {
        self.filter.apply(patch);
    }

    /// Toggles a tag in the filter. Returns whether it is now selected.
    pub fn toggle_tag_filter(&mut self, tag: &str) -> bool {
        self.filter.toggle_tag(tag)
    }

    /// Toggles a priority in the filter. Returns whether it is now selected.
    pub fn toggle_priority_filter(&mut self, priority: Priority) -> bool {
        self.filter.toggle_priority(priority)
    }

    /// Resets the filter so every task is visible.
    pub fn clear_filters(&mut self) {
        self.filter.clear();
    }
}
