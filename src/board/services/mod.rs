//! Application services for the task board.

mod outcome;
mod store;

pub use outcome::{LoadReport, MutationOutcome, RemoteSync, StoreError, TransitionOutcome};
pub use store::{ColumnView, TaskStore};
