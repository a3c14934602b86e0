//! Timeline command
//!
//! Implements `pmt timeline`: one row per task with its time-code and the
//! state of the connector above and below its dot.

use clap::Args;
use serde::Serialize;
use tracing::warn;

use projectmgt_core::{CoreResult, check_contiguous, classify_sequence};

use super::Context;
use crate::output::format_timeline_table;

/// Show timeline rows with their connectors
#[derive(Debug, Args)]
pub struct TimelineCommand {
    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// One timeline row as printed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineRow {
    pub time_code: String,
    pub top: String,
    pub bottom: String,
    pub status: String,
    pub title: String,
    pub tag: String,
    pub id: u32,
}

impl TimelineCommand {
    /// Build the rows for the project in `ctx`.
    ///
    /// Tasks whose time-code groups are scattered are still listed; the
    /// problem is logged.
    pub fn rows(ctx: &Context) -> Vec<TimelineRow> {
        let tasks = &ctx.project.tasks;
        if let Err(e) = check_contiguous(tasks) {
            warn!(error = %e, "timeline groups are not contiguous");
        }

        tasks
            .iter()
            .zip(classify_sequence(tasks))
            .map(|(task, connectors)| TimelineRow {
                time_code: task.time_code.clone(),
                top: connectors.top.as_str().to_string(),
                bottom: connectors.bottom.as_str().to_string(),
                status: task.status.as_str().to_string(),
                title: task.title.clone(),
                tag: task.tag.clone(),
                id: task.id,
            })
            .collect()
    }

    /// Execute the timeline command.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Serialize` if JSON output fails.
    pub fn execute(&self, ctx: &Context) -> CoreResult<String> {
        let rows = Self::rows(ctx);
        if self.json {
            Ok(serde_json::to_string_pretty(&rows)?)
        } else {
            Ok(format_timeline_table(&rows))
        }
    }
}
