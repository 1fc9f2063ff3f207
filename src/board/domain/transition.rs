//! Drop-target resolution and the drag interaction state machine.
//!
//! A drag moves through three states:
//!
//! | From               | Event              | To                 |
//! |--------------------|--------------------|--------------------|
//! | `Idle`/`Dragging`  | begin              | `Dragging`         |
//! | `Dragging`         | cancel             | `Idle`             |
//! | `Dragging`         | release, admitted  | `Idle` (commit)    |
//! | `Dragging`         | release, over time | `PendingAdmission` |
//! | `PendingAdmission` | confirm            | `Idle` (commit)    |
//! | `PendingAdmission` | cancel             | `Idle`             |
//!
//! Nothing here is tied to a particular pointer or gesture library.

use super::{
    Admission, BudgetOverrun, Settings, Status, Task, TaskId, TransitionError, check_admission,
};

/// What the pointer was released over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    /// A column drop zone.
    Column(Status),
    /// Another task card.
    Task(TaskId),
    /// An element id that names neither a column nor a task.
    Unknown(String),
    /// Released outside every drop zone.
    Nothing,
}

impl DropTarget {
    /// Classifies a raw element identifier from the front end.
    ///
    /// Column names map to [`DropTarget::Column`], integers to
    /// [`DropTarget::Task`], anything else to [`DropTarget::Unknown`].
    #[must_use]
    pub fn from_element_id(raw: &str) -> Self {
        if let Ok(status) = Status::try_from(raw) {
            return Self::Column(status);
        }
        match raw.trim().parse::<i64>() {
            Ok(id) => Self::Task(TaskId::new(id)),
            Err(_) => Self::Unknown(raw.to_owned()),
        }
    }

    /// Resolves the column this target stands for.
    ///
    /// A task target resolves to that task's current column. Returns `None`
    /// for unknown tasks, unknown ids, and releases over nothing.
    #[must_use]
    pub fn resolve(&self, tasks: &[Task]) -> Option<Status> {
        match self {
            Self::Column(status) => Some(*status),
            Self::Task(id) => tasks
                .iter()
                .find(|task| task.id() == *id)
                .map(Task::status),
            Self::Unknown(_) | Self::Nothing => None,
        }
    }
}

/// A column change held until the user confirms the time-budget overrun.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTransition {
    /// Task being moved.
    pub task_id: TaskId,
    /// Column the task is leaving.
    pub from: Status,
    /// Column the task is entering.
    pub to: Status,
    /// Budget figures shown to the user.
    pub overrun: BudgetOverrun,
}

impl PendingTransition {
    /// Returns the overrun rounded up to whole hours.
    #[must_use]
    pub const fn exceeded_hours(&self) -> u32 {
        self.overrun.exceeded_hours
    }
}

/// What releasing a dragged task should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPlan {
    /// No valid target; leave the task where it was.
    Cancel,
    /// The target is the task's current column; nothing to do.
    Unchanged,
    /// Move the task to the given column now.
    Commit(Status),
    /// Hold the move until the overrun is confirmed.
    Hold(PendingTransition),
}

/// Plans the outcome of releasing `task` over `target`.
#[must_use]
pub fn plan_transition(
    task: &Task,
    target: &DropTarget,
    tasks: &[Task],
    settings: &Settings,
) -> TransitionPlan {
    let Some(to) = target.resolve(tasks) else {
        return TransitionPlan::Cancel;
    };
    if to == task.status() {
        return TransitionPlan::Unchanged;
    }
    match check_admission(task, to, tasks, settings) {
        Admission::Admit => TransitionPlan::Commit(to),
        Admission::RequiresConfirmation(overrun) => TransitionPlan::Hold(PendingTransition {
            task_id: task.id(),
            from: task.status(),
            to,
            overrun,
        }),
    }
}

/// State of the drag interaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// A task is being dragged.
    Dragging {
        /// Task under the pointer.
        task_id: TaskId,
    },
    /// A released move waits for confirm or cancel.
    PendingAdmission(PendingTransition),
}

impl DragState {
    /// Starts dragging `task_id`, replacing any drag already in progress.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::AwaitingDecision`] while a held move waits
    /// for a decision.
    pub const fn begin(&mut self, task_id: TaskId) -> Result<(), TransitionError> {
        if let Self::PendingAdmission(pending) = self {
            return Err(TransitionError::AwaitingDecision(pending.task_id));
        }
        *self = Self::Dragging { task_id };
        Ok(())
    }

    /// Abandons an in-progress drag. Returns `false` if nothing was dragged.
    pub const fn cancel_drag(&mut self) -> bool {
        if matches!(self, Self::Dragging { .. }) {
            *self = Self::Idle;
            return true;
        }
        false
    }

    /// Ends the drag of `task_id` so its release can be applied.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::AwaitingDecision`] while a held move waits
    /// for a decision, or [`TransitionError::NotDragging`] when `task_id` is
    /// not the dragged task.
    pub fn release(&mut self, task_id: TaskId) -> Result<(), TransitionError> {
        match *self {
            Self::Dragging { task_id: dragged } if dragged == task_id => {
                *self = Self::Idle;
                Ok(())
            }
            Self::PendingAdmission(pending) => {
                Err(TransitionError::AwaitingDecision(pending.task_id))
            }
            _ => Err(TransitionError::NotDragging(task_id)),
        }
    }

    /// Parks a released move until the user decides.
    pub const fn hold(&mut self, pending: PendingTransition) {
        *self = Self::PendingAdmission(pending);
    }

    /// Takes the held move, returning to idle.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::NoPendingTransition`] if nothing is held.
    pub const fn take_pending(&mut self) -> Result<PendingTransition, TransitionError> {
        let Self::PendingAdmission(pending) = *self else {
            return Err(TransitionError::NoPendingTransition);
        };
        *self = Self::Idle;
        Ok(pending)
    }

    /// Returns the held move, if any.
    #[must_use]
    pub const fn pending(&self) -> Option<&PendingTransition> {
        match self {
            Self::PendingAdmission(pending) => Some(pending),
            Self::Idle | Self::Dragging { .. } => None,
        }
    }

    /// Returns the task being dragged, if any.
    #[must_use]
    pub const fn dragged_task(&self) -> Option<TaskId> {
        match self {
            Self::Dragging { task_id } => Some(*task_id),
            Self::Idle | Self::PendingAdmission(_) => None,
        }
    }
}
