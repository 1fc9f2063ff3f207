//! The board store: authoritative in-memory board state with optimistic
//! persistence.
//!
//! Every mutation follows the same contract. Structural validation happens
//! before anything else, then the record store is called once and the local
//! change is applied whatever the call returns. Mutations that need nothing
//! back from the store apply locally before the call is awaited, so a call
//! that hangs or is abandoned never holds back the board. Creates wait for the
//! store-assigned identifier. A failed call is logged and reported through
//! [`RemoteSync::Failed`]; it is never retried and never undoes the local
//! change.

mod drag;
mod views;

pub use views::ColumnView;

use crate::board::{
    domain::{
        CalendarPreset, DragState, FallbackIds, PresetDraft, PresetId, Settings, SettingsPatch,
        Status, TagColorRegistry, Task, TaskDraft, TaskFilter, TaskId, TaskPatch,
    },
    ports::{
        BoardPersistence, NewPresetRecord, NewTaskRecord, PersistenceError, PersistenceResult,
        RecordDecodeError, SettingsRecord, TaskUpdateRecord,
    },
    services::{LoadReport, MutationOutcome, RemoteSync, StoreError},
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Board state container and mutation entry point.
pub struct TaskStore<P, C>
where
    P: BoardPersistence,
    C: Clock + Send + Sync,
{
    persistence: Arc<P>,
    clock: Arc<C>,
    tasks: Vec<Task>,
    settings: Settings,
    presets: Vec<CalendarPreset>,
    tag_colors: TagColorRegistry,
    filter: TaskFilter,
    drag: DragState,
    fallback_ids: FallbackIds,
}

impl<P, C> TaskStore<P, C>
where
    P: BoardPersistence,
    C: Clock + Send + Sync,
{
    /// Creates an empty store with default settings.
    #[must_use]
    pub fn new(persistence: Arc<P>, clock: Arc<C>) -> Self {
        Self {
            persistence,
            clock,
            tasks: Vec::new(),
            settings: Settings::default(),
            presets: Vec::new(),
            tag_colors: TagColorRegistry::new(),
            filter: TaskFilter::new(),
            drag: DragState::Idle,
            fallback_ids: FallbackIds::new(),
        }
    }

    /// Fetches tasks, settings, and presets from the record store.
    ///
    /// Each fetch degrades on its own: failed tasks leave the board empty,
    /// failed settings keep the defaults, failed presets leave none.
    /// Records that cannot be decoded are skipped.
    #[tracing::instrument(skip_all)]
    pub async fn load(&mut self) -> LoadReport {
        let mut report = LoadReport::default();

        match self.persistence.get_all_tasks().await {
            Ok(records) => {
                let (tasks, skipped) = decode_records(records, "task");
                report.tasks_loaded = tasks.len();
                report.tasks_skipped = skipped;
                self.tasks = tasks;
            }
            Err(error) => {
                warn!(%error, "failed to load tasks");
                self.tasks.clear();
                report.failures.push(error);
            }
        }

        match self.persistence.get_settings().await {
            Ok(record) => match Settings::try_from(record) {
                Ok(settings) => {
                    self.settings = settings;
                    report.settings_loaded = true;
                }
                Err(error) => warn!(%error, "stored settings are invalid, keeping defaults"),
            },
            Err(error) => {
                warn!(%error, "failed to load settings, keeping defaults");
                report.failures.push(error);
            }
        }

        match self.persistence.get_all_presets().await {
            Ok(records) => {
                let (presets, skipped) = decode_records(records, "preset");
                report.presets_loaded = presets.len();
                report.presets_skipped = skipped;
                self.presets = presets;
            }
            Err(error) => {
                warn!(%error, "failed to load calendar presets");
                self.presets.clear();
                report.failures.push(error);
            }
        }

        info!(
            tasks = report.tasks_loaded,
            presets = report.presets_loaded,
            failures = report.failures.len(),
            "board loaded"
        );
        report
    }

    /// Replaces the in-memory task collection.
    pub fn replace_tasks(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    /// Creates a task from a validated draft.
    ///
    /// The task is stamped with the current time. When the record store
    /// fails to assign an identifier a clock-derived fallback is used.
    #[tracing::instrument(skip_all, fields(status = %draft.status()))]
    pub async fn add_task(&mut self, draft: TaskDraft) -> MutationOutcome<Task> {
        let created_at = self.clock.utc();
        let result = match NewTaskRecord::from_draft(&draft, created_at) {
            Ok(record) => self.persistence.add_task(&record).await,
            Err(error) => Err(PersistenceError::encode(error)),
        };
        let (id, remote) = match result {
            Ok(id) => (TaskId::new(id), synced("add_task")),
            Err(error) => (self.fallback_task_id(), failed("add_task", error)),
        };

        let task = Task::from_draft(id, draft, created_at);
        self.tasks.push(task.clone());
        MutationOutcome::new(task, remote)
    }

    /// Merges `patch` into the task with identifier `id`.
    ///
    /// Moving into done stamps the completion time and moving out clears
    /// it. Unknown identifiers are a no-op and nothing is sent.
    #[tracing::instrument(skip_all, fields(task_id = %id))]
    pub async fn update_task(
        &mut self,
        id: TaskId,
        patch: &TaskPatch,
    ) -> MutationOutcome<Option<Task>> {
        let Some(current) = self.task(id) else {
            debug!("update for unknown task ignored");
            return MutationOutcome::new(None, RemoteSync::Skipped);
        };
        let mut updated = current.clone();
        let completion = updated.apply_patch(patch, self.clock.utc());
        let encoded = TaskUpdateRecord::from_patch(patch, completion);

        if let Some(slot) = self.tasks.iter_mut().find(|task| task.id() == id) {
            slot.clone_from(&updated);
        }

        let remote = match encoded {
            Ok(record) if record.is_empty() => RemoteSync::Skipped,
            Ok(record) => settle(
                "update_task",
                self.persistence.update_task(id.value(), &record).await,
            ),
            Err(error) => failed("update_task", PersistenceError::encode(error)),
        };
        MutationOutcome::new(Some(updated), remote)
    }

    /// Advances the priority of a task: normal, medium, high, then normal.
    pub async fn cycle_priority(&mut self, id: TaskId) -> MutationOutcome<Option<Task>> {
        let Some(priority) = self.task(id).map(Task::priority) else {
            return MutationOutcome::new(None, RemoteSync::Skipped);
        };
        self.update_task(id, &TaskPatch::new().with_priority(priority.cycled()))
            .await
    }

    /// Removes the task with identifier `id`. Returns whether a task was
    /// removed; absent identifiers are a no-op.
    #[tracing::instrument(skip_all, fields(task_id = %id))]
    pub async fn delete_task(&mut self, id: TaskId) -> MutationOutcome<bool> {
        if self.task(id).is_none() {
            return MutationOutcome::new(false, RemoteSync::Skipped);
        }
        self.tasks.retain(|task| task.id() != id);
        let remote = settle("delete_task", self.persistence.delete_task(id.value()).await);
        MutationOutcome::new(true, remote)
    }

    /// Removes every task in `status`, returning how many were removed.
    #[tracing::instrument(skip_all, fields(%status))]
    pub async fn clear_column(&mut self, status: Status) -> MutationOutcome<usize> {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.status() != status);
        let removed = before - self.tasks.len();
        info!(removed, "column cleared");
        let remote = settle(
            "clear_column",
            self.persistence.clear_column(status.as_str()).await,
        );
        MutationOutcome::new(removed, remote)
    }

    /// Merges a partial settings update.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] when the merged settings are
    /// invalid; nothing is changed or sent in that case.
    #[tracing::instrument(skip_all)]
    pub async fn update_settings(
        &mut self,
        patch: &SettingsPatch,
    ) -> Result<MutationOutcome<Settings>, StoreError> {
        let merged = self.settings.merged(patch)?;
        let record = SettingsRecord::from(&merged);
        self.settings = merged.clone();
        let remote = settle(
            "update_settings",
            self.persistence.update_settings(&record).await,
        );
        Ok(MutationOutcome::new(merged, remote))
    }

    /// Stores a new calendar preset.
    #[tracing::instrument(skip_all, fields(name = draft.name()))]
    pub async fn add_calendar_preset(
        &mut self,
        draft: PresetDraft,
    ) -> MutationOutcome<CalendarPreset> {
        let result = match NewPresetRecord::from_draft(&draft) {
            Ok(record) => self.persistence.add_preset(&record).await,
            Err(error) => Err(PersistenceError::encode(error)),
        };
        let (id, remote) = match result {
            Ok(id) => (PresetId::new(id), synced("add_preset")),
            Err(error) => (
                PresetId::new(self.fallback_ids.next_id(&*self.clock)),
                failed("add_preset", error),
            ),
        };

        let preset = CalendarPreset::from_draft(id, draft);
        self.presets.push(preset.clone());
        MutationOutcome::new(preset, remote)
    }

    /// Removes a calendar preset. Returns whether a preset was removed.
    #[tracing::instrument(skip_all, fields(preset_id = %id))]
    pub async fn delete_calendar_preset(&mut self, id: PresetId) -> MutationOutcome<bool> {
        if self.preset(id).is_none() {
            return MutationOutcome::new(false, RemoteSync::Skipped);
        }
        self.presets.retain(|preset| preset.id() != id);
        let remote = settle("delete_preset", self.persistence.delete_preset(id.value()).await);
        MutationOutcome::new(true, remote)
    }

    /// Schedules the to-do task described by a preset on `date`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownPreset`] when no preset has identifier
    /// `preset_id`.
    pub async fn add_task_from_preset(
        &mut self,
        preset_id: PresetId,
        date: NaiveDate,
    ) -> Result<MutationOutcome<Task>, StoreError> {
        let draft = self
            .preset(preset_id)
            .ok_or(StoreError::UnknownPreset(preset_id))?
            .task_draft_for(date)?;
        Ok(self.add_task(draft).await)
    }

    fn fallback_task_id(&mut self) -> TaskId {
        TaskId::new(self.fallback_ids.next_id(&*self.clock))
    }
}

fn synced(call: &'static str) -> RemoteSync {
    debug!(call, "record store call succeeded");
    RemoteSync::Synced
}

fn failed(call: &'static str, error: PersistenceError) -> RemoteSync {
    warn!(call, %error, "record store call failed, keeping local change");
    RemoteSync::Failed(error)
}

fn settle(call: &'static str, result: PersistenceResult<()>) -> RemoteSync {
    match result {
        Ok(()) => synced(call),
        Err(error) => failed(call, error),
    }
}

fn decode_records<R, T>(records: Vec<R>, kind: &'static str) -> (Vec<T>, usize)
where
    T: TryFrom<R, Error = RecordDecodeError>,
{
    let mut skipped = 0;
    let decoded = records
        .into_iter()
        .filter_map(|record| match T::try_from(record) {
            Ok(value) => Some(value),
            Err(error) => {
                warn!(kind, %error, "skipping undecodable record");
                skipped += 1;
                None
            }
        })
        .collect();
    (decoded, skipped)
}
