//! Outcome values returned by board store operations.

use crate::board::{
    domain::{BoardDomainError, PendingTransition, PresetId, Task},
    ports::PersistenceError,
};
use thiserror::Error;

/// What happened to the record store copy of a local mutation.
#[derive(Debug, Clone)]
pub enum RemoteSync {
    /// The record store accepted the change.
    Synced,
    /// The record store call failed; the change exists only locally.
    Failed(PersistenceError),
    /// No call was made because the mutation was a local no-op.
    Skipped,
}

impl RemoteSync {
    /// Returns `true` when the record store accepted the change.
    #[must_use]
    pub const fn is_synced(&self) -> bool {
        matches!(self, Self::Synced)
    }

    /// Returns the failure, if the record store call failed.
    #[must_use]
    pub const fn error(&self) -> Option<&PersistenceError> {
        match self {
            Self::Failed(err) => Some(err),
            Self::Synced | Self::Skipped => None,
        }
    }
}

/// A mutation applied to the in-memory board.
///
/// The local change is never rolled back; [`RemoteSync`] tells the caller
/// whether the record store caught up, so it can choose its own retry or
/// reconciliation policy.
#[derive(Debug, Clone)]
#[must_use]
pub struct MutationOutcome<T> {
    value: T,
    remote: RemoteSync,
}

impl<T> MutationOutcome<T> {
    /// Pairs a local result with its remote status.
    pub const fn new(value: T, remote: RemoteSync) -> Self {
        Self { value, remote }
    }

    /// Returns the local result.
    #[must_use]
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Consumes the outcome, returning the local result.
    #[must_use]
    pub fn into_value(self) -> T {
        self.value
    }

    /// Returns the remote status.
    #[must_use]
    pub const fn remote(&self) -> &RemoteSync {
        &self.remote
    }
}

/// Summary of the start-up fetch.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    /// Tasks decoded and loaded.
    pub tasks_loaded: usize,
    /// Task records skipped because they could not be decoded.
    pub tasks_skipped: usize,
    /// Presets decoded and loaded.
    pub presets_loaded: usize,
    /// Preset records skipped because they could not be decoded.
    pub presets_skipped: usize,
    /// Whether stored settings replaced the defaults.
    pub settings_loaded: bool,
    /// Record store calls that failed.
    pub failures: Vec<PersistenceError>,
}

impl LoadReport {
    /// Returns `true` when every call succeeded and every record decoded.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
            && self.settings_loaded
            && self.tasks_skipped == 0
            && self.presets_skipped == 0
    }
}

/// Result of releasing a dragged task.
#[derive(Debug, Clone)]
pub enum TransitionOutcome {
    /// Released over nothing usable; the task keeps its column.
    Cancelled,
    /// Released over its own column; nothing changed and nothing was sent.
    Unchanged,
    /// The move was applied.
    Committed(MutationOutcome<Option<Task>>),
    /// The move exceeds the time budget and waits for confirm or cancel.
    AwaitingConfirmation(PendingTransition),
}

/// Service-level errors for board store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Input failed validation; nothing was changed or sent.
    #[error(transparent)]
    Validation(#[from] BoardDomainError),

    /// The referenced calendar preset does not exist.
    #[error("calendar preset not found: {0}")]
    UnknownPreset(PresetId),
}
