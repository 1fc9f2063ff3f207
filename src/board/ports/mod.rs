//! Port contracts for board persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by the board store,
//! along with the wire records that cross them.

pub mod persistence;
pub mod records;

pub use persistence::{BoardPersistence, PersistenceError, PersistenceResult};
pub use records::{
    FieldUpdate, NewPresetRecord, NewTaskRecord, PresetRecord, RecordDecodeError, SettingsRecord,
    TaskRecord, TaskUpdateRecord,
};
