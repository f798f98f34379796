//! UI Components
//!
//! Leptos components and bindings for server-rendered widgets.

mod interval_row;
mod schedule_editor;
mod task_toggle;

pub use interval_row::IntervalRowEditor;
pub use schedule_editor::mount_schedule_editor;
pub use task_toggle::bind_task_toggles;
