//! Test infrastructure for integration tests
//!
//! Provides a sample context, a few project variants and command builders.

use projectmgt::commands::{
    CheckCommand, Context, LayoutCommand, ProgressCommand, TimelineCommand,
};
use projectmgt_core::{Project, Task, Theme, mock_project};

/// A context over the sample project with the built-in theme.
pub fn sample_context() -> Context {
    Context::sample(Theme::default())
}

/// A context over `project` with the built-in theme.
pub fn context_with(project: Project) -> Context {
    Context::new(project, Theme::default())
}

/// The sample project with its tasks replaced by `time_codes`, in order.
pub fn project_with_time_codes(time_codes: &[&str]) -> Project {
    let mut project = mock_project();
    let template: Task = project.tasks[0].clone();
    project.tasks = time_codes
        .iter()
        .enumerate()
        .map(|(i, code)| Task {
            id: i as u32,
            time_code: code.to_string(),
            ..template.clone()
        })
        .collect();
    project
}

// =============================================================================
// Command Builder Helpers
// =============================================================================

pub fn timeline_cmd(json: bool) -> TimelineCommand {
    TimelineCommand { json }
}

pub fn progress_cmd(size: Option<f32>, stroke: Option<f32>) -> ProgressCommand {
    ProgressCommand {
        size,
        stroke,
        json: true,
    }
}

pub fn layout_cmd(width: u16, gutter: u16, height: u16) -> LayoutCommand {
    LayoutCommand {
        width,
        gutter: Some(gutter),
        height,
        min_width: 0,
        json: true,
    }
}

pub fn check_cmd() -> CheckCommand {
    CheckCommand {}
}
