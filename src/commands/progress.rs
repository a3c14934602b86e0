//! Progress command
//!
//! Implements `pmt progress`: the arcs of the project's progress ring.

use clap::Args;

use projectmgt_core::{CoreResult, RingArcs, percent_label, ring_arcs};

use super::Context;
use crate::output::format_ring_arcs;

/// Show the progress ring arcs
#[derive(Debug, Args)]
pub struct ProgressCommand {
    /// Side of the square the ring is drawn in (defaults to the theme's)
    #[arg(long)]
    pub size: Option<f32>,

    /// Stroke width (defaults to the theme's)
    #[arg(long)]
    pub stroke: Option<f32>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl ProgressCommand {
    /// Ring arcs for the project in `ctx` with any overrides applied.
    pub fn arcs(&self, ctx: &Context) -> RingArcs {
        let ring = ctx.theme.ring;
        ring_arcs(
            ctx.project.progress,
            ctx.project.status.color(),
            self.stroke.unwrap_or(ring.stroke_width),
            self.size.unwrap_or(ring.size),
        )
    }

    /// Execute the progress command.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Serialize` if JSON output fails.
    pub fn execute(&self, ctx: &Context) -> CoreResult<String> {
        let arcs = self.arcs(ctx);
        if self.json {
            Ok(serde_json::to_string_pretty(&arcs)?)
        } else {
            Ok(format_ring_arcs(&percent_label(ctx.project.progress), &arcs))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use projectmgt_core::Theme;

    fn command(size: Option<f32>, stroke: Option<f32>, json: bool) -> ProgressCommand {
        ProgressCommand { size, stroke, json }
    }

    #[test]
    fn test_arcs_use_theme_defaults() {
        let ctx = Context::sample(Theme::default());
        let arcs = command(None, None, false).arcs(&ctx);
        assert_eq!(arcs.filled.stroke_width, ctx.theme.ring.stroke_width);
        assert_eq!(
            arcs.filled.diameter,
            ctx.theme.ring.size - ctx.theme.ring.stroke_width
        );
    }

    #[test]
    fn test_arcs_with_overrides() {
        let ctx = Context::sample(Theme::default());
        let arcs = command(Some(100.0), Some(10.0), false).arcs(&ctx);
        assert_eq!(arcs.filled.top_left.x, 5.0);
        assert_eq!(arcs.filled.diameter, 90.0);
        assert!((arcs.filled.sweep_angle - 306.0).abs() < 1e-3);
        assert!(arcs.remainder.is_some());
    }

    #[test]
    fn test_execute_text() {
        let ctx = Context::sample(Theme::default());
        let output = command(None, None, false).execute(&ctx).unwrap();
        assert!(output.starts_with("Progress: 85%"));
        assert!(output.contains("filled"));
        assert!(output.contains("remainder"));
    }

    #[test]
    fn test_execute_full_progress_has_no_remainder() {
        let mut ctx = Context::sample(Theme::default());
        ctx.project.progress = 1.0;
        let output = command(None, None, true).execute(&ctx).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert!(value["remainder"].is_null());
        assert_eq!(value["filled"]["sweep_angle"], 360.0);
    }
}
