//! Terminal screens for projectmgt
//!
//! A timeline of the project's tasks with connectors between same-day
//! groups, and a form for drafting a new task, drawn with ratatui and
//! crossterm.

pub mod app;
pub mod avatar;
pub mod create_task;
pub mod error;
pub mod event;
pub mod logging;
pub mod palette;
pub mod progress_ring;
pub mod timeline;
pub mod ui;

pub use app::{ActiveTab, App};
pub use create_task::{CreateTaskForm, FormField, FormStatus, TaskDraft};
pub use error::{TuiError, TuiResult};
pub use logging::init_logging;
pub use progress_ring::ProgressRing;
pub use timeline::{TimelineViewState, render_timeline_view};
