//! In-memory record store for tests and offline use.

mod persistence;

pub use persistence::InMemoryBoardPersistence;
