//! Shared world state for board drag BDD scenarios.

use std::sync::Arc;

use kalenote::board::{
    adapters::memory::InMemoryBoardPersistence,
    domain::TaskId,
    services::{TaskStore, TransitionOutcome},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Store type used by the BDD world.
pub type TestBoardStore = TaskStore<InMemoryBoardPersistence, DefaultClock>;

/// Scenario world for board drag behaviour tests.
pub struct BoardWorld {
    pub persistence: Arc<InMemoryBoardPersistence>,
    pub store: TestBoardStore,
    pub last_outcome: Option<TransitionOutcome>,
}

impl BoardWorld {
    /// Creates a world over an empty in-memory record store.
    #[must_use]
    pub fn new() -> Self {
        let persistence = Arc::new(InMemoryBoardPersistence::new());
        let store = TaskStore::new(Arc::clone(&persistence), Arc::new(DefaultClock));

        Self {
            persistence,
            store,
            last_outcome: None,
        }
    }

    /// Finds the identifier of the task with the given content.
    ///
    /// # Errors
    ///
    /// Returns an error if no task has that content.
    pub fn task_id(&self, content: &str) -> Result<TaskId, eyre::Report> {
        self.store
            .tasks()
            .iter()
            .find(|task| task.content() == content)
            .map(|task| task.id())
            .ok_or_else(|| eyre::eyre!("no task named {content:?} on the board"))
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
