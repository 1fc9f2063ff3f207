//! Error types for board domain validation, parsing, and drag interactions.

use super::TaskId;
use thiserror::Error;

/// Errors returned while constructing domain board values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The task content is empty after trimming.
    #[error("task content must not be empty")]
    EmptyTaskContent,

    /// The calendar preset name is empty after trimming.
    #[error("calendar preset name must not be empty")]
    EmptyPresetName,

    /// The available time budget is not a positive number of hours.
    #[error("invalid available time {0}, expected a positive number of hours")]
    InvalidAvailableTime(i64),

    /// The priority value is outside the supported range.
    #[error("invalid priority {0}, expected 0, 1 or 2")]
    InvalidPriority(i64),
}

/// Error returned while parsing a task status.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseStatusError(pub String);

/// Error returned while parsing a settings time mode.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown time mode: {0}")]
pub struct ParseTimeModeError(pub String);

/// Errors raised when the drag state machine is driven out of order.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum TransitionError {
    /// The task being dragged is not on the board.
    #[error("task not found: {0}")]
    UnknownTask(TaskId),

    /// A transition for the given task is waiting for confirm or cancel.
    #[error("transition for task {0} is awaiting confirmation")]
    AwaitingDecision(TaskId),

    /// The given task is not the one currently being dragged.
    #[error("task {0} is not being dragged")]
    NotDragging(TaskId),

    /// There is no held transition to confirm or cancel.
    #[error("no transition is awaiting confirmation")]
    NoPendingTransition,
}
