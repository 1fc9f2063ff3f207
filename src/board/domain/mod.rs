//! Domain model for the task board.
//!
//! Pure types and rules: tasks and their typed patches, settings, calendar
//! presets, tag colours, time-budget admission control, drop-target
//! resolution with the drag state machine, and the filter engine. Nothing
//! here performs I/O.

mod admission;
mod error;
mod filter;
mod ids;
mod preset;
mod priority;
mod settings;
mod status;
mod tag_color;
mod tags;
mod task;
mod transition;

pub use admission::{Admission, BudgetOverrun, TimeUsage, check_admission};
pub use error::{BoardDomainError, ParseStatusError, ParseTimeModeError, TransitionError};
pub use filter::{FilterPatch, TaskFilter, TimeFilter, order_by_priority};
pub use ids::{FallbackIds, PresetId, TaskId};
pub use preset::{CalendarPreset, PresetDraft};
pub use priority::Priority;
pub use settings::{
    DEFAULT_AVAILABLE_HOURS, DEFAULT_THEME, Settings, SettingsPatch, TimeMode,
};
pub use status::Status;
pub use tag_color::{TAG_LIGHTNESS, TAG_SATURATION, TagColor, TagColorRegistry};
pub use tags::TagSet;
pub use task::{CompletionChange, PersistedTaskData, Task, TaskDraft, TaskPatch};
pub use transition::{DragState, DropTarget, PendingTransition, TransitionPlan, plan_transition};
