//! Layout command
//!
//! Implements `pmt layout`: lays out one timeline row (a fixed gutter next
//! to a card that fills the remaining width) and prints the placements.

use clap::Args;

use projectmgt_core::{
    Constraints, CoreResult, FillWidth, Fixed, RowLayout, Size, layout_row,
};

use super::Context;
use crate::output::format_row_layout;

/// Default card height in cells.
const DEFAULT_HEIGHT: u16 = 7;

/// Lay out one timeline row at a given width
#[derive(Debug, Args)]
pub struct LayoutCommand {
    /// Width of the container
    #[arg(long)]
    pub width: u16,

    /// Gutter width (defaults to the theme's)
    #[arg(long)]
    pub gutter: Option<u16>,

    /// Height of the card
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u16,

    /// Narrowest the card can render
    #[arg(long, default_value_t = 0)]
    pub min_width: u16,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl LayoutCommand {
    /// Lay out the row described by the arguments.
    pub fn layout(&self, ctx: &Context) -> RowLayout {
        let gutter_width = self.gutter.unwrap_or(ctx.theme.gutter_width);
        let container = Constraints::new(self.width, self.width, 0, u16::MAX);
        let card = FillWidth {
            height: self.height,
            min_width: self.min_width,
        };
        layout_row(gutter_width, container, &Fixed(Size::new(gutter_width, 1)), &card)
    }

    /// Execute the layout command.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Serialize` if JSON output fails.
    pub fn execute(&self, ctx: &Context) -> CoreResult<String> {
        let layout = self.layout(ctx);
        if self.json {
            Ok(serde_json::to_string_pretty(&layout)?)
        } else {
            Ok(format_row_layout(&layout))
        }
    }
}
