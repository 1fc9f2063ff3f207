//! Shared test helpers for in-memory board integration tests.

use std::sync::Arc;

use kalenote::board::{
    adapters::memory::InMemoryBoardPersistence,
    domain::{Priority, Status, TagSet, TaskDraft},
    services::TaskStore,
};
use mockable::DefaultClock;
use rstest::fixture;

/// Store type driven by the integration tests.
pub type TestStore = TaskStore<InMemoryBoardPersistence, DefaultClock>;

/// In-memory record store shared between a store and its assertions.
#[fixture]
pub fn persistence() -> Arc<InMemoryBoardPersistence> {
    Arc::new(InMemoryBoardPersistence::new())
}

/// Creates a store over `persistence` using the system clock.
pub fn store_over(persistence: &Arc<InMemoryBoardPersistence>) -> TestStore {
    TaskStore::new(Arc::clone(persistence), Arc::new(DefaultClock))
}

/// Builds a draft in `status` with `priority` and comma-separated tags.
///
/// # Errors
///
/// Returns an error if `content` is blank.
pub fn draft(
    content: &str,
    status: Status,
    priority: Priority,
    tags: &str,
) -> Result<TaskDraft, eyre::Report> {
    Ok(TaskDraft::new(content)?
        .with_status(status)
        .with_priority(priority)
        .with_tags(TagSet::parse_list(tags)))
}
