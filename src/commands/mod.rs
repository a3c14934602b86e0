//! CLI commands for projectmgt
//!
//! Each subcommand inspects the sample project with the active theme and
//! returns its output as a string.

pub mod check;
pub mod layout;
pub mod progress;
pub mod timeline;

pub use check::CheckCommand;
pub use layout::LayoutCommand;
pub use progress::ProgressCommand;
pub use timeline::TimelineCommand;

use clap::Subcommand;
use projectmgt_core::{CoreResult, Project, Theme, mock_project};

/// What every command runs against.
#[derive(Debug, Clone)]
pub struct Context {
    pub project: Project,
    pub theme: Theme,
}

impl Context {
    pub fn new(project: Project, theme: Theme) -> Self {
        Self { project, theme }
    }

    /// The sample project with `theme`.
    pub fn sample(theme: Theme) -> Self {
        Self::new(mock_project(), theme)
    }
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show timeline rows with their connectors
    Timeline(TimelineCommand),
    /// Show the progress ring arcs
    Progress(ProgressCommand),
    /// Lay out one timeline row at a given width
    Layout(LayoutCommand),
    /// Check that tasks sharing a time-code are adjacent
    Check(CheckCommand),
}

impl Command {
    /// Execute the command against `ctx`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError` if the command fails.
    pub fn execute(&self, ctx: &Context) -> CoreResult<String> {
        match self {
            Command::Timeline(cmd) => cmd.execute(ctx),
            Command::Progress(cmd) => cmd.execute(ctx),
            Command::Layout(cmd) => cmd.execute(ctx),
            Command::Check(cmd) => cmd.execute(ctx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    /// Test struct to parse commands
    #[derive(Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: Command,
    }

    #[test]
    fn test_command_timeline_parses() {
        let cli = TestCli::try_parse_from(["test", "timeline", "--json"]).unwrap();
        match cli.command {
            Command::Timeline(cmd) => assert!(cmd.json),
            other => panic!("expected timeline, got {:?}", other),
        }
    }

    #[test]
    fn test_command_progress_parses() {
        let cli = TestCli::try_parse_from(["test", "progress", "--size", "100", "--stroke", "10"])
            .unwrap();
        match cli.command {
            Command::Progress(cmd) => {
                assert_eq!(cmd.size, Some(100.0));
                assert_eq!(cmd.stroke, Some(10.0));
                assert!(!cmd.json);
            }
            other => panic!("expected progress, got {:?}", other),
        }
    }

    #[test]
    fn test_command_layout_requires_width() {
        let result = TestCli::try_parse_from(["test", "layout"]);
        match result {
            Err(e) => assert!(
                e.to_string().contains("--width"),
                "Error should mention --width, got: {}",
                e
            ),
            Ok(_) => panic!("Expected error for missing width"),
        }
    }

    #[test]
    fn test_command_check_parses() {
        let cli = TestCli::try_parse_from(["test", "check"]).unwrap();
        assert!(matches!(cli.command, Command::Check(_)));
    }

    #[test]
    fn test_unknown_command_fails() {
        assert!(TestCli::try_parse_from(["test", "delete"]).is_err());
    }
}
