//! In-memory implementation of the board record store.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::board::{
    domain::{DEFAULT_AVAILABLE_HOURS, DEFAULT_THEME, TimeMode},
    ports::{
        BoardPersistence, NewPresetRecord, NewTaskRecord, PersistenceError, PersistenceResult,
        PresetRecord, SettingsRecord, TaskRecord, TaskUpdateRecord,
    },
};

/// Thread-safe in-memory record store.
///
/// Behaves like the remote store: identifiers autoincrement from 1, tags
/// stay as JSON strings, and the settings row starts at the defaults.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBoardPersistence {
    state: Arc<RwLock<InMemoryBoardState>>,
}

#[derive(Debug)]
struct InMemoryBoardState {
    tasks: BTreeMap<i64, TaskRecord>,
    last_task_id: i64,
    settings: SettingsRecord,
    presets: BTreeMap<i64, PresetRecord>,
    last_preset_id: i64,
}

impl Default for InMemoryBoardState {
    fn default() -> Self {
        Self {
            tasks: BTreeMap::new(),
            last_task_id: 0,
            settings: SettingsRecord {
                theme: DEFAULT_THEME.to_owned(),
                time_mode: TimeMode::Daily.as_str().to_owned(),
                available_time: i64::from(DEFAULT_AVAILABLE_HOURS),
            },
            presets: BTreeMap::new(),
            last_preset_id: 0,
        }
    }
}

impl InMemoryBoardPersistence {
    /// Creates an empty store with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a task row as-is, keeping its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::Backend`] if the store lock is poisoned.
    pub fn seed_task(&self, record: TaskRecord) -> PersistenceResult<()> {
        let mut state = self.write()?;
        state.last_task_id = state.last_task_id.max(record.id);
        state.tasks.insert(record.id, record);
        Ok(())
    }

    /// Inserts a preset row as-is, keeping its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::Backend`] if the store lock is poisoned.
    pub fn seed_preset(&self, record: PresetRecord) -> PersistenceResult<()> {
        let mut state = self.write()?;
        state.last_preset_id = state.last_preset_id.max(record.id);
        state.presets.insert(record.id, record);
        Ok(())
    }

    /// Replaces the settings row.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::Backend`] if the store lock is poisoned.
    pub fn seed_settings(&self, record: SettingsRecord) -> PersistenceResult<()> {
        self.write()?.settings = record;
        Ok(())
    }

    /// Returns the stored task row with identifier `id`.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::Backend`] if the store lock is poisoned.
    pub fn task_record(&self, id: i64) -> PersistenceResult<Option<TaskRecord>> {
        Ok(self.read()?.tasks.get(&id).cloned())
    }

    /// Returns the number of stored task rows.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::Backend`] if the store lock is poisoned.
    pub fn task_count(&self) -> PersistenceResult<usize> {
        Ok(self.read()?.tasks.len())
    }

    fn read(&self) -> PersistenceResult<RwLockReadGuard<'_, InMemoryBoardState>> {
        self.state
            .read()
            .map_err(|err| PersistenceError::backend(std::io::Error::other(err.to_string())))
    }

    fn write(&self) -> PersistenceResult<RwLockWriteGuard<'_, InMemoryBoardState>> {
        self.state
            .write()
            .map_err(|err| PersistenceError::backend(std::io::Error::other(err.to_string())))
    }
}

#[async_trait]
impl BoardPersistence for InMemoryBoardPersistence {
    async fn get_all_tasks(&self) -> PersistenceResult<Vec<TaskRecord>> {
        let state = self.read()?;
        let mut tasks: Vec<TaskRecord> = state.tasks.values().cloned().collect();
        // Newest first, like the remote store.
        tasks.sort_by(|left, right| right.created_at.cmp(&left.created_at));
        Ok(tasks)
    }

    async fn add_task(&self, task: &NewTaskRecord) -> PersistenceResult<i64> {
        let mut state = self.write()?;
        state.last_task_id += 1;
        let id = state.last_task_id;
        state.tasks.insert(
            id,
            TaskRecord {
                id,
                content: task.content.clone(),
                status: task.status.clone(),
                priority: task.priority,
                created_at: task.created_at.clone(),
                completed_at: task.completed_at.clone(),
                due_date: task.due_date.clone(),
                time_duration: task.time_duration,
                tags: task.tags.clone(),
            },
        );
        Ok(id)
    }

    async fn update_task(&self, id: i64, changes: &TaskUpdateRecord) -> PersistenceResult<()> {
        let mut state = self.write()?;
        let record = state
            .tasks
            .get_mut(&id)
            .ok_or(PersistenceError::NotFound(id))?;
        let TaskUpdateRecord {
            content,
            status,
            priority,
            tags,
            time_duration,
            due_date,
            completed_at,
        } = changes.clone();
        if let Some(value) = content {
            record.content = value;
        }
        if let Some(value) = status {
            record.status = value;
        }
        if let Some(value) = priority {
            record.priority = value;
        }
        if let Some(value) = tags {
            record.tags = value;
        }
        time_duration.apply_to(&mut record.time_duration);
        due_date.apply_to(&mut record.due_date);
        completed_at.apply_to(&mut record.completed_at);
        Ok(())
    }

    async fn delete_task(&self, id: i64) -> PersistenceResult<()> {
        self.write()?.tasks.remove(&id);
        Ok(())
    }

    async fn clear_column(&self, status: &str) -> PersistenceResult<()> {
        self.write()?.tasks.retain(|_, record| record.status != status);
        Ok(())
    }

    async fn get_settings(&self) -> PersistenceResult<SettingsRecord> {
        Ok(self.read()?.settings.clone())
    }

    async fn update_settings(&self, settings: &SettingsRecord) -> PersistenceResult<()> {
        self.write()?.settings = settings.clone();
        Ok(())
    }

    async fn get_all_presets(&self) -> PersistenceResult<Vec<PresetRecord>> {
        Ok(self.read()?.presets.values().cloned().collect())
    }

    async fn add_preset(&self, preset: &NewPresetRecord) -> PersistenceResult<i64> {
        let mut state = self.write()?;
        state.last_preset_id += 1;
        let id = state.last_preset_id;
        state.presets.insert(
            id,
            PresetRecord {
                id,
                name: preset.name.clone(),
                default_tags: preset.default_tags.clone(),
                default_priority: preset.default_priority,
            },
        );
        Ok(id)
    }

    async fn delete_preset(&self, id: i64) -> PersistenceResult<()> {
        self.write()?.presets.remove(&id);
        Ok(())
    }
}
