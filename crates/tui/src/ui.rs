//! UI rendering for the TUI.
//!
//! Provides layout and widget rendering using ratatui.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Tabs},
};

use projectmgt_core::Theme;

use crate::app::{ActiveTab, App};
use crate::create_task::render_create_task_view;
use crate::palette::term;
use crate::timeline::render_timeline_view;

/// Tab titles, in [`ActiveTab::index`] order.
const TAB_TITLES: [&str; 2] = ["Timeline", "Create Task"];

/// Legend text for keyboard shortcuts.
const LEGEND: &str =
    " [j/k] Select  [↑/↓] Field  [←/→] Change  [Enter] Create  [Tab] View  [q] Quit ";

/// Draw the entire UI.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = create_main_layout(frame.area());

    draw_tabs(frame, chunks[0], app.active_tab(), app.theme());
    draw_tab_content(frame, chunks[1], app);
    draw_legend(frame, chunks[2], app.theme());
}

/// Create the main three-part layout: tab bar, content area, legend.
fn create_main_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(0),    // Active screen
            Constraint::Length(1), // Legend bar
        ])
        .split(area)
        .to_vec()
}

/// Draw the tab bar.
fn draw_tabs(frame: &mut Frame, area: Rect, active: ActiveTab, theme: &Theme) {
    let titles: Vec<Line> = TAB_TITLES.iter().map(|t| Line::from(*t)).collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(term(theme.accent))),
        )
        .select(active.index())
        .style(Style::default().fg(term(theme.muted_text)))
        .highlight_style(
            Style::default()
                .fg(term(theme.accent))
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}

/// Draw the screen for the active tab.
fn draw_tab_content(frame: &mut Frame, area: Rect, app: &App) {
    match app.active_tab() {
        ActiveTab::Timeline => {
            render_timeline_view(
                frame,
                area,
                app.project(),
                app.theme(),
                app.timeline_state(),
            );
        }
        ActiveTab::CreateTask => {
            render_create_task_view(frame, area, app.form(), app.theme());
        }
    }
}

/// Draw the legend bar at the bottom.
fn draw_legend(frame: &mut Frame, area: Rect, theme: &Theme) {
    let legend = Paragraph::new(LEGEND).style(
        Style::default()
            .fg(term(theme.form_background))
            .bg(term(theme.accent)),
    );

    frame.render_widget(legend, area);
}
