//! Time-budget admission control for the doing column.
//!
//! Moving an estimated task into [`Status::Doing`] is admitted straight away
//! while the column's combined estimate stays within the configured budget.
//! Past the budget the move is held until the user confirms it.

use super::{Settings, Status, Task};

const MINUTES_PER_HOUR: u32 = 60;

/// Result of checking a transition against the time budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// The transition may be committed immediately.
    Admit,
    /// The transition exceeds the budget and needs explicit confirmation.
    RequiresConfirmation(BudgetOverrun),
}

impl Admission {
    /// Returns `true` when the transition may be committed immediately.
    #[must_use]
    pub const fn is_admitted(&self) -> bool {
        matches!(self, Self::Admit)
    }
}

/// Figures describing how far a transition would overrun the budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetOverrun {
    /// Estimate of the task being moved, in minutes.
    pub requested_minutes: u32,
    /// Combined estimate of the other doing tasks, in minutes.
    pub committed_minutes: u32,
    /// Doing-column capacity, in minutes.
    pub capacity_minutes: u32,
    /// Overrun rounded up to whole hours.
    pub exceeded_hours: u32,
}

/// Decides whether moving `task` to `target` can be committed immediately.
///
/// Only moves into the doing column carrying a non-zero estimate are
/// checked. The estimate of `task` itself is excluded from the committed
/// total, so re-checking a task that already sits in doing does not count it
/// twice. The gate trips only when the total strictly exceeds capacity.
#[must_use]
pub fn check_admission(task: &Task, target: Status, tasks: &[Task], settings: &Settings) -> Admission {
    if target != Status::Doing {
        return Admission::Admit;
    }
    let requested_minutes = match task.time_duration() {
        Some(minutes) if minutes > 0 => minutes,
        _ => return Admission::Admit,
    };

    let committed_minutes = doing_minutes(tasks.iter().filter(|other| other.id() != task.id()));
    let capacity_minutes = settings.capacity_minutes();
    let total = committed_minutes.saturating_add(requested_minutes);
    if total <= capacity_minutes {
        return Admission::Admit;
    }

    Admission::RequiresConfirmation(BudgetOverrun {
        requested_minutes,
        committed_minutes,
        capacity_minutes,
        exceeded_hours: (total - capacity_minutes).div_ceil(MINUTES_PER_HOUR),
    })
}

/// Summary of how much of the time budget the doing column uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeUsage {
    used_minutes: u32,
    capacity_minutes: u32,
}

impl TimeUsage {
    /// Measures the doing column of `tasks` against `settings`.
    #[must_use]
    pub fn measure(tasks: &[Task], settings: &Settings) -> Self {
        Self {
            used_minutes: doing_minutes(tasks.iter()),
            capacity_minutes: settings.capacity_minutes(),
        }
    }

    /// Returns the combined estimate of doing tasks, in minutes.
    #[must_use]
    pub const fn used_minutes(&self) -> u32 {
        self.used_minutes
    }

    /// Returns the capacity, in minutes.
    #[must_use]
    pub const fn capacity_minutes(&self) -> u32 {
        self.capacity_minutes
    }

    /// Returns `true` when the doing column is over capacity.
    #[must_use]
    pub const fn is_overtime(&self) -> bool {
        self.used_minutes > self.capacity_minutes
    }

    /// Returns the minutes above capacity, zero when within budget.
    #[must_use]
    pub const fn overtime_minutes(&self) -> u32 {
        self.used_minutes.saturating_sub(self.capacity_minutes)
    }

    /// Returns the share of capacity used as a percentage, capped at 100.
    #[must_use]
    pub fn percent_used(&self) -> u32 {
        self.used_minutes
            .saturating_mul(100)
            .checked_div(self.capacity_minutes)
            .map_or(100, |percent| percent.min(100))
    }
}

fn doing_minutes<'a>(tasks: impl Iterator<Item = &'a Task>) -> u32 {
    tasks
        .filter(|task| task.status() == Status::Doing)
        .map(Task::estimated_minutes)
        .fold(0, u32::saturating_add)
}
