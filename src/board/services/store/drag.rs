//! Drag interaction entry points of the board store.

use super::TaskStore;
use crate::board::{
    domain::{
        DropTarget, PendingTransition, Status, Task, TaskId, TaskPatch, TransitionError,
        TransitionPlan, plan_transition,
    },
    ports::BoardPersistence,
    services::{MutationOutcome, TransitionOutcome},
};
use mockable::Clock;
use tracing::{debug, info};

impl<P, C> TaskStore<P, C>
where
    P: BoardPersistence,
    C: Clock + Send + Sync,
{
    /// Starts dragging the task with identifier `task_id`.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::UnknownTask`] when no such task exists and
    /// [`TransitionError::AwaitingDecision`] while a held move waits for
    /// confirm or cancel.
    pub fn begin_transition(&mut self, task_id: TaskId) -> Result<(), TransitionError> {
        if self.task(task_id).is_none() {
            return Err(TransitionError::UnknownTask(task_id));
        }
        self.drag.begin(task_id)?;
        debug!(%task_id, "drag started");
        Ok(())
    }

    /// Returns the column a hover over `target` would resolve to, without
    /// changing anything.
    #[must_use]
    pub fn preview_transition(&self, target: &DropTarget) -> Option<Status> {
        target.resolve(&self.tasks)
    }

    /// Abandons the in-progress drag. Returns `false` if nothing was being
    /// dragged.
    pub fn cancel_drag(&mut self) -> bool {
        let cancelled = self.drag.cancel_drag();
        if cancelled {
            debug!("drag cancelled");
        }
        cancelled
    }

    /// Releases the dragged task over `target`.
    ///
    /// Releases over nothing, over an unknown element, or over the task's
    /// own column touch neither the board nor the record store. A move that
    /// would push the doing column over its time budget is held until
    /// [`Self::confirm_pending_transition`] or
    /// [`Self::cancel_pending_transition`].
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::NotDragging`] when `task_id` is not the
    /// dragged task and [`TransitionError::AwaitingDecision`] while another
    /// move is held.
    #[tracing::instrument(skip_all, fields(%task_id))]
    pub async fn resolve_transition(
        &mut self,
        task_id: TaskId,
        target: &DropTarget,
    ) -> Result<TransitionOutcome, TransitionError> {
        self.drag.release(task_id)?;
        let Some(task) = self.task(task_id) else {
            debug!("dragged task vanished before release");
            return Ok(TransitionOutcome::Cancelled);
        };

        match plan_transition(task, target, &self.tasks, &self.settings) {
            TransitionPlan::Cancel => {
                debug!(?target, "release over no column");
                Ok(TransitionOutcome::Cancelled)
            }
            TransitionPlan::Unchanged => Ok(TransitionOutcome::Unchanged),
            TransitionPlan::Commit(status) => {
                Ok(TransitionOutcome::Committed(self.move_task(task_id, status).await))
            }
            TransitionPlan::Hold(pending) => {
                info!(
                    to = %pending.to,
                    exceeded_hours = pending.exceeded_hours(),
                    "move exceeds time budget, awaiting confirmation"
                );
                self.drag.hold(pending);
                Ok(TransitionOutcome::AwaitingConfirmation(pending))
            }
        }
    }

    /// Applies the held move.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::NoPendingTransition`] if no move is held.
    pub async fn confirm_pending_transition(
        &mut self,
    ) -> Result<MutationOutcome<Option<Task>>, TransitionError> {
        let pending = self.drag.take_pending()?;
        info!(
            task_id = %pending.task_id,
            to = %pending.to,
            "over-budget move confirmed"
        );
        Ok(self.move_task(pending.task_id, pending.to).await)
    }

    /// Discards the held move; the task keeps its column.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::NoPendingTransition`] if no move is held.
    pub fn cancel_pending_transition(&mut self) -> Result<PendingTransition, TransitionError> {
        let pending = self.drag.take_pending()?;
        debug!(task_id = %pending.task_id, "over-budget move discarded");
        Ok(pending)
    }

    async fn move_task(&mut self, task_id: TaskId, status: Status) -> MutationOutcome<Option<Task>> {
        self.update_task(task_id, &TaskPatch::new().with_status(status))
            .await
    }
}
