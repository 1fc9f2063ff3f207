//! Persistence port: the remote record store behind the board.

use super::records::{
    NewPresetRecord, NewTaskRecord, PresetRecord, SettingsRecord, TaskRecord, TaskUpdateRecord,
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for record store calls.
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Request/response contract of the record store.
///
/// Every call may fail. The board store never propagates these failures as
/// fatal errors; see [`crate::board::services::RemoteSync`].
#[async_trait]
pub trait BoardPersistence: Send + Sync {
    /// Returns every stored task.
    async fn get_all_tasks(&self) -> PersistenceResult<Vec<TaskRecord>>;

    /// Stores a new task and returns its assigned identifier.
    async fn add_task(&self, task: &NewTaskRecord) -> PersistenceResult<i64>;

    /// Applies a partial update to the task with identifier `id`.
    ///
    /// # Errors
    ///
    /// Implementations may return [`PersistenceError::NotFound`] when the
    /// task does not exist.
    async fn update_task(&self, id: i64, changes: &TaskUpdateRecord) -> PersistenceResult<()>;

    /// Deletes the task with identifier `id`.
    async fn delete_task(&self, id: i64) -> PersistenceResult<()>;

    /// Deletes every task whose status is `status`.
    async fn clear_column(&self, status: &str) -> PersistenceResult<()>;

    /// Returns the settings row.
    async fn get_settings(&self) -> PersistenceResult<SettingsRecord>;

    /// Replaces the settings row.
    async fn update_settings(&self, settings: &SettingsRecord) -> PersistenceResult<()>;

    /// Returns every stored calendar preset.
    async fn get_all_presets(&self) -> PersistenceResult<Vec<PresetRecord>>;

    /// Stores a new preset and returns its assigned identifier.
    async fn add_preset(&self, preset: &NewPresetRecord) -> PersistenceResult<i64>;

    /// Deletes the preset with identifier `id`.
    async fn delete_preset(&self, id: i64) -> PersistenceResult<()>;
}

/// Errors returned by record store implementations.
#[derive(Debug, Clone, Error)]
pub enum PersistenceError {
    /// The addressed record does not exist.
    #[error("record not found: {0}")]
    NotFound(i64),

    /// A record could not be encoded for the wire.
    #[error("failed to encode record: {0}")]
    Encode(Arc<serde_json::Error>),

    /// Backend or transport failure.
    #[error("record store error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl PersistenceError {
    /// Wraps a backend or transport error.
    #[must_use]
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }

    /// Wraps an encoding error.
    #[must_use]
    pub fn encode(err: serde_json::Error) -> Self {
        Self::Encode(Arc::new(err))
    }
}
