//! Shared fixtures for board unit tests.

use crate::board::{
    domain::{Priority, Status, TagSet, Task, TaskDraft, TaskId},
    ports::{
        BoardPersistence, NewPresetRecord, NewTaskRecord, PersistenceError, PersistenceResult,
        PresetRecord, SettingsRecord, TaskRecord, TaskUpdateRecord,
    },
};
use async_trait::async_trait;
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use mockall::mock;
use std::future::pending;

/// Clock pinned to a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Pins the clock to 2024-03-01 09:30:00 UTC.
    pub fn morning() -> Self {
        Self(
            Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0)
                .single()
                .expect("valid fixed instant"),
        )
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

mock! {
    pub Persistence {}

    #[async_trait]
    impl BoardPersistence for Persistence {
        async fn get_all_tasks(&self) -> PersistenceResult<Vec<TaskRecord>>;
        async fn add_task(&self, task: &NewTaskRecord) -> PersistenceResult<i64>;
        async fn update_task(&self, id: i64, changes: &TaskUpdateRecord) -> PersistenceResult<()>;
        async fn delete_task(&self, id: i64) -> PersistenceResult<()>;
        async fn clear_column(&self, status: &str) -> PersistenceResult<()>;
        async fn get_settings(&self) -> PersistenceResult<SettingsRecord>;
        async fn update_settings(&self, settings: &SettingsRecord) -> PersistenceResult<()>;
        async fn get_all_presets(&self) -> PersistenceResult<Vec<PresetRecord>>;
        async fn add_preset(&self, preset: &NewPresetRecord) -> PersistenceResult<i64>;
        async fn delete_preset(&self, id: i64) -> PersistenceResult<()>;
    }
}

/// Record store whose calls never complete.
#[derive(Debug, Clone, Copy, Default)]
pub struct HungPersistence;

#[async_trait]
impl BoardPersistence for HungPersistence {
    async fn get_all_tasks(&self) -> PersistenceResult<Vec<TaskRecord>> {
        pending().await
    }

    async fn add_task(&self, _task: &NewTaskRecord) -> PersistenceResult<i64> {
        pending().await
    }

    async fn update_task(&self, _id: i64, _changes: &TaskUpdateRecord) -> PersistenceResult<()> {
        pending().await
    }

    async fn delete_task(&self, _id: i64) -> PersistenceResult<()> {
        pending().await
    }

    async fn clear_column(&self, _status: &str) -> PersistenceResult<()> {
        pending().await
    }

    async fn get_settings(&self) -> PersistenceResult<SettingsRecord> {
        pending().await
    }

    async fn update_settings(&self, _settings: &SettingsRecord) -> PersistenceResult<()> {
        pending().await
    }

    async fn get_all_presets(&self) -> PersistenceResult<Vec<PresetRecord>> {
        pending().await
    }

    async fn add_preset(&self, _preset: &NewPresetRecord) -> PersistenceResult<i64> {
        pending().await
    }

    async fn delete_preset(&self, _id: i64) -> PersistenceResult<()> {
        pending().await
    }
}

/// Failure returned by mocked record store calls.
pub fn offline() -> PersistenceError {
    PersistenceError::backend(std::io::Error::other("record store offline"))
}

/// Builds a task with the given column and priority.
pub fn task(id: i64, content: &str, status: Status, priority: Priority) -> Task {
    let draft = TaskDraft::new(content)
        .expect("valid task content")
        .with_status(status)
        .with_priority(priority);
    Task::from_draft(TaskId::new(id), draft, FixedClock::morning().0)
}

/// Builds a task carrying a time estimate.
pub fn timed_task(id: i64, status: Status, minutes: u32) -> Task {
    let draft = TaskDraft::new(format!("Timed task {id}"))
        .expect("valid task content")
        .with_status(status)
        .with_time_duration(minutes);
    Task::from_draft(TaskId::new(id), draft, FixedClock::morning().0)
}

/// Builds a tagged task.
pub fn tagged_task(id: i64, content: &str, tags: &[&str], priority: Priority) -> Task {
    let draft = TaskDraft::new(content)
        .expect("valid task content")
        .with_priority(priority)
        .with_tags(tags.iter().collect());
    Task::from_draft(TaskId::new(id), draft, FixedClock::morning().0)
}

/// Builds a tag set from names.
pub fn tag_set(names: &[&str]) -> TagSet {
    names.iter().collect()
}
