//! Check command
//!
//! Implements `pmt check`: verifies that tasks sharing a time-code are
//! adjacent, which the connector classifier relies on.

use clap::Args;

use projectmgt_core::{CoreResult, check_contiguous};

use super::Context;

/// Check that tasks sharing a time-code are adjacent
#[derive(Debug, Args)]
pub struct CheckCommand {}

impl CheckCommand {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::ScatteredTimeCode` naming the first time-code
    /// that reappears after a different one.
    pub fn execute(&self, ctx: &Context) -> CoreResult<String> {
        let tasks = &ctx.project.tasks;
        check_contiguous(tasks)?;

        let groups = tasks
            .iter()
            .enumerate()
            .filter(|(i, task)| *i == 0 || tasks[i - 1].time_code != task.time_code)
            .count();

        Ok(format!(
            "OK: {} tasks in {} time-code groups",
            tasks.len(),
            groups
        ))
    }
}
