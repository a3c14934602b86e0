//! Core of projectmgt
//!
//! Read-only project and task models, the connector classifier for
//! timeline rows, the two-column row layout, progress ring geometry and
//! the theme that carries every color and size the screens use.

pub mod color;
pub mod error;
pub mod layout;
pub mod line_state;
pub mod mock;
pub mod models;
pub mod progress;
pub mod theme;

pub use color::Color;
pub use error::{CoreError, CoreResult};
pub use layout::{
    Constraints, FillWidth, Fixed, Measure, Placement, Position, RowLayout, Size, layout_row,
};
pub use line_state::{
    Connectors, LineState, LineStyle, StrokePattern, check_contiguous, classify, classify_sequence,
};
pub use mock::{mock_attachment, mock_clients, mock_project};
pub use models::{Attachment, Category, Client, Project, ProjectTimeline, Status, Task, User};
pub use progress::{Arc, Point, RingArcs, percent_label, ring_arcs};
pub use theme::{ConnectorStyles, RingStyle, THEME_PATH_ENV, Theme, resolve_theme_path};

// Snapshots are shared freely between render passes.
static_assertions::assert_impl_all!(Project: Send, Sync);
static_assertions::assert_impl_all!(Theme: Send, Sync, Copy);
