//! Entry point for the projectmgt TUI application.

use projectmgt_core::Theme;
use projectmgt_tui::{App, TuiResult, init_logging};

fn main() -> TuiResult<()> {
    init_logging()?;
    let theme = Theme::resolve(None)?;
    App::new(theme).run()
}
