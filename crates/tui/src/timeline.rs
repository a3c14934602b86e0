//! Timeline screen for a project.
//!
//! The top of the screen shows the project title, its duration and start
//! date, member avatars and a progress ring. Below it, tasks are stacked as
//! two-column rows: a gutter holding the time-code and a vertical connector,
//! and a card with the task details. Connector segments come from
//! [`classify_sequence`], row geometry from [`layout_row`].
//!
//! Rows are drawn into an off-screen buffer the full height of the list and
//! the visible window is copied into the frame, so partially visible rows
//! and cards wider than the screen are clipped rather than squeezed.

use projectmgt_core::{
    Connectors, Constraints, FillWidth, Fixed, LineState, LineStyle, Project, RowLayout, Size,
    Status, StrokePattern, Task, Theme, classify_sequence, layout_row,
};
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::avatar::{avatar_spans, spans_width};
use crate::palette::{flatten, term};
use crate::progress_ring::ProgressRing;

/// Cells a task card takes vertically: one row of spacing, two borders and
/// four lines of content.
pub const CARD_HEIGHT: u16 = 7;

/// Narrowest a task card can render.
pub const CARD_MIN_WIDTH: u16 = 24;

/// Height of the header row above the tasks.
pub const HEADER_ROW_HEIGHT: u16 = 1;

/// Progress ring size in cells; braille cells are twice as tall as wide.
const RING_WIDTH: u16 = 12;
const RING_HEIGHT: u16 = 6;

/// Stroke width at or above which a solid connector is drawn heavy.
const HEAVY_STROKE_WIDTH: f32 = 4.0;

const STATUS_DOT: &str = "●";
const COMMENT_ICON: &str = "✉";
const ATTACHMENT_ICON: &str = "⎘";

/// Selection state for the timeline screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimelineViewState {
    /// Index of the selected task.
    pub selected_index: usize,
}

/// What a timeline row shows.
#[derive(Debug, Clone, Copy)]
pub enum RowContent<'a> {
    /// Column captions above the tasks.
    Header,
    Task {
        task: &'a Task,
        connectors: Connectors,
    },
}

/// A row with its computed layout and vertical offset in the list.
#[derive(Debug, Clone, Copy)]
pub struct TimelineRow<'a> {
    pub content: RowContent<'a>,
    pub layout: RowLayout,
    /// Offset of the row's top from the top of the list.
    pub top: u16,
}

impl TimelineRow<'_> {
    pub fn height(&self) -> u16 {
        self.layout.size.height
    }
}

/// Lay out the header row and one row per task for a list `width` wide.
pub fn layout_rows<'a>(project: &'a Project, theme: &Theme, width: u16) -> Vec<TimelineRow<'a>> {
    let container = Constraints::new(width, width, 0, u16::MAX);
    let gutter = Fixed(Size::new(theme.gutter_width, 1));

    let header = FillWidth {
        height: HEADER_ROW_HEIGHT,
        min_width: 0,
    };
    let card = FillWidth {
        height: CARD_HEIGHT,
        min_width: CARD_MIN_WIDTH,
    };

    let mut rows = Vec::with_capacity(project.tasks.len() + 1);
    let mut top = 0u16;

    let layout = layout_row(theme.gutter_width, container, &gutter, &header);
    rows.push(TimelineRow {
        content: RowContent::Header,
        layout,
        top,
    });
    top = top.saturating_add(layout.size.height);

    for (task, connectors) in project.tasks.iter().zip(classify_sequence(&project.tasks)) {
        let layout = layout_row(theme.gutter_width, container, &gutter, &card);
        rows.push(TimelineRow {
            content: RowContent::Task { task, connectors },
            layout,
            top,
        });
        top = top.saturating_add(layout.size.height);
    }

    rows
}

/// Scroll offset that keeps the selected row in a viewport of `viewport` lines.
///
/// Rows taller than the viewport are shown from their top.
pub fn follow_selection(row_top: u16, row_height: u16, viewport: u16) -> u16 {
    row_top
        .saturating_add(row_height)
        .saturating_sub(viewport)
        .min(row_top)
}

/// Box-drawing glyph for a connector stroke.
pub fn connector_glyph(style: &LineStyle) -> &'static str {
    match style.pattern {
        StrokePattern::Dashed { .. } => "┆",
        StrokePattern::Solid if style.width >= HEAVY_STROKE_WIDTH => "┃",
        StrokePattern::Solid => "│",
    }
}

/// Render the timeline screen.
///
/// # Arguments
///
/// * `frame` - The frame to render to
/// * `area` - The area to render within
/// * `project` - The project to show
/// * `theme` - Colors and sizes
/// * `state` - Selection state
pub fn render_timeline_view(
    frame: &mut Frame,
    area: Rect,
    project: &Project,
    theme: &Theme,
    state: TimelineViewState,
) {
    let block = Block::default()
        .title(" Timeline ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(term(theme.accent)))
        .style(Style::default().bg(term(theme.card)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2 + RING_HEIGHT), // Title, dates, avatars and ring
            Constraint::Min(0),                  // Task rows
        ])
        .split(inner);

    render_project_header(frame, chunks[0], project, theme);
    render_task_list(frame.buffer_mut(), chunks[1], project, theme, state);
}

/// Draw the title, duration, avatars and progress ring.
fn render_project_header(frame: &mut Frame, area: Rect, project: &Project, theme: &Theme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(RING_HEIGHT),
        ])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        project.title.clone(),
        Style::default()
            .fg(term(theme.text))
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, rows[0]);

    let dates = Paragraph::new(Line::from(vec![
        Span::raw(project.days_label()),
        Span::raw(" | "),
        Span::raw(project.date_label()),
    ]))
    .style(Style::default().fg(term(theme.muted_text)));
    frame.render_widget(dates, rows[1]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(RING_WIDTH)])
        .split(rows[2]);

    let avatars = avatar_spans(&project.users, true, theme);
    let avatar_row = Rect {
        y: columns[0].y + columns[0].height / 2,
        height: 1.min(columns[0].height),
        ..columns[0]
    };
    frame.render_widget(Paragraph::new(Line::from(avatars)), avatar_row);

    frame.render_widget(
        ProgressRing::new(project.progress, project.status.color(), theme).surface(theme.card),
        columns[1],
    );
}

/// Draw the task rows, scrolled so the selected task stays visible.
fn render_task_list(
    buf: &mut Buffer,
    area: Rect,
    project: &Project,
    theme: &Theme,
    state: TimelineViewState,
) {
    if area.is_empty() {
        return;
    }

    let rows = layout_rows(project, theme, area.width);
    let content_height = rows
        .last()
        .map_or(0, |row| row.top.saturating_add(row.height()));

    let scroll = rows
        .get(state.selected_index + 1)
        .map_or(0, |row| follow_selection(row.top, row.height(), area.height));

    let mut list = Buffer::empty(Rect::new(0, 0, area.width, content_height));
    list.set_style(list.area, Style::default().bg(term(theme.background)));

    for (index, row) in rows.iter().enumerate() {
        let selected = index == state.selected_index + 1;
        draw_row(&mut list, row, project, theme, selected);
    }

    blit(&list, buf, area, scroll);
}

/// Copy the window of `source` starting at line `scroll` into `area`.
fn blit(source: &Buffer, target: &mut Buffer, area: Rect, scroll: u16) {
    for dy in 0..area.height {
        let sy = scroll.saturating_add(dy);
        if sy >= source.area.height {
            break;
        }
        for dx in 0..area.width {
            if let (Some(cell), Some(slot)) = (
                source.cell((dx, sy)),
                target.cell_mut((area.x + dx, area.y + dy)),
            ) {
                *slot = cell.clone();
            }
        }
    }
}

/// Area of a placed block inside the list buffer, clipped to its bounds.
fn placed_rect(list: &Buffer, row: &TimelineRow<'_>, x: u16, size: Size) -> Rect {
    Rect::new(x, row.top, size.width, size.height).intersection(list.area)
}

fn draw_row(
    list: &mut Buffer,
    row: &TimelineRow<'_>,
    project: &Project,
    theme: &Theme,
    selected: bool,
) {
    let gutter = placed_rect(
        list,
        row,
        row.layout.gutter.position.x,
        row.layout.gutter.size,
    );
    let main = placed_rect(list, row, row.layout.main.position.x, row.layout.main.size);

    match row.content {
        RowContent::Header => {
            draw_gutter(list, gutter, "Date", None, Connectors::UNDEFINED, theme);
            draw_header_captions(list, main, theme);
        }
        RowContent::Task { task, connectors } => {
            draw_gutter(
                list,
                gutter,
                &task.time_code,
                Some(task.status),
                connectors,
                theme,
            );
            draw_task_card(list, main, project, task, theme, selected);
        }
    }
}

/// Draw the time-code label and the connector through the gutter.
fn draw_gutter(
    list: &mut Buffer,
    area: Rect,
    label: &str,
    status: Option<Status>,
    connectors: Connectors,
    theme: &Theme,
) {
    if area.is_empty() {
        return;
    }

    let line_x = area.right().saturating_sub(theme.connector_gap.saturating_add(1)).max(area.x);
    let middle = area.y + area.height / 2;

    let label_width = line_x.saturating_sub(area.x).saturating_sub(1) as usize;
    list.set_stringn(
        area.x,
        middle,
        label,
        label_width,
        Style::default().fg(term(theme.text)),
    );

    let segment = |state: LineState| {
        let style = state.style(theme);
        (
            connector_glyph(&style),
            Style::default().fg(flatten(style.color, theme.background)),
        )
    };
    let (top_glyph, top_style) = segment(connectors.top);
    let (bottom_glyph, bottom_style) = segment(connectors.bottom);

    for y in area.y..area.bottom() {
        let (glyph, style) = if y < middle {
            (top_glyph, top_style)
        } else if y > middle {
            (bottom_glyph, bottom_style)
        } else {
            match status {
                Some(status) => (STATUS_DOT, Style::default().fg(term(status.color()))),
                None => (top_glyph, top_style),
            }
        };
        list.set_string(line_x, y, glyph, style);
    }
}

fn draw_header_captions(list: &mut Buffer, area: Rect, theme: &Theme) {
    let line = spread(
        vec![Span::styled(
            "Tasks",
            Style::default()
                .fg(term(theme.text))
                .add_modifier(Modifier::BOLD),
        )],
        vec![Span::styled(
            "Show in days",
            Style::default().fg(term(theme.muted_text)),
        )],
        area.width,
    );
    Paragraph::new(line).render(area, list);
}

/// Draw the bordered task card below one line of spacing.
fn draw_task_card(
    list: &mut Buffer,
    area: Rect,
    project: &Project,
    task: &Task,
    theme: &Theme,
    selected: bool,
) {
    let card = Rect {
        y: area.y.saturating_add(1),
        height: area.height.saturating_sub(1),
        ..area
    };
    if card.is_empty() {
        return;
    }

    let border_color = if selected { theme.accent } else { theme.muted_text };
    let mut border_style = Style::default().fg(term(border_color));
    if selected {
        border_style = border_style.add_modifier(Modifier::BOLD);
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .style(Style::default().bg(term(theme.card)).fg(term(theme.text)));
    let inner = block.inner(card);
    block.render(card, list);

    Paragraph::new(build_card_lines(project, task, theme, inner.width)).render(inner, list);
}

/// Status and tag, title, a blank line, then counts, number and assignees.
fn build_card_lines(
    project: &Project,
    task: &Task,
    theme: &Theme,
    width: u16,
) -> Vec<Line<'static>> {
    let muted = Style::default().fg(term(theme.muted_text));

    let status_line = spread(
        vec![Span::styled(
            task.status.label(),
            Style::default().fg(term(task.status.color())),
        )],
        vec![Span::styled(task.tag.clone(), muted)],
        width,
    );

    let title_line = Line::from(Span::styled(
        task.title.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    ));

    let counts = vec![
        Span::styled(format!("{} {}", COMMENT_ICON, task.comment_count), muted),
        Span::raw("  "),
        Span::styled(
            format!("{} {}", ATTACHMENT_ICON, task.attachment_count),
            muted,
        ),
    ];
    let mut right = vec![Span::styled(format!("N\u{00B0} {} ", task.id), muted)];
    right.extend(avatar_spans(project.assignees(task), false, theme));
    let footer_line = spread(counts, right, width);

    vec![status_line, title_line, Line::from(""), footer_line]
}

/// Put `left` at the start of a line and `right` flush against its end.
///
/// When both do not fit they are simply joined with a single space.
fn spread(left: Vec<Span<'static>>, right: Vec<Span<'static>>, width: u16) -> Line<'static> {
    let used = spans_width(&left).saturating_add(spans_width(&right));
    let gap = width.saturating_sub(used).max(1);

    let mut spans = left;
    spans.push(Span::raw(" ".repeat(gap as usize)));
    spans.extend(right);
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use projectmgt_core::mock_project;
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_text(buf: &Buffer) -> Vec<String> {
        (0..buf.area.height)
            .map(|y| {
                (0..buf.area.width)
                    .map(|x| buf[(buf.area.x + x, buf.area.y + y)].symbol().to_string())
                    .collect()
            })
            .collect()
    }

    fn render(width: u16, height: u16, state: TimelineViewState) -> Vec<String> {
        render_with_theme(width, height, state, &Theme::default())
    }

    fn render_with_theme(
        width: u16,
        height: u16,
        state: TimelineViewState,
        theme: &Theme,
    ) -> Vec<String> {
        let project = mock_project();
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render_timeline_view(frame, frame.area(), &project, theme, state))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_layout_rows_header_then_tasks() {
        let project = mock_project();
        let rows = layout_rows(&project, &Theme::default(), 60);
        assert_eq!(rows.len(), project.tasks.len() + 1);
        assert!(matches!(rows[0].content, RowContent::Header));
        assert_eq!(rows[0].height(), HEADER_ROW_HEIGHT);
        assert_eq!(rows[1].top, HEADER_ROW_HEIGHT);
        assert_eq!(rows[2].top, HEADER_ROW_HEIGHT + CARD_HEIGHT);
    }

    #[test]
    fn test_layout_rows_place_card_after_gutter() {
        let project = mock_project();
        let theme = Theme::default();
        let rows = layout_rows(&project, &theme, 60);
        let row = &rows[1];
        assert_eq!(row.layout.gutter.position.x, 0);
        assert_eq!(row.layout.gutter.size, Size::new(theme.gutter_width, CARD_HEIGHT));
        assert_eq!(row.layout.main.position.x, theme.gutter_width);
        assert_eq!(row.layout.main.size.width, 60 - theme.gutter_width);
    }

    #[test]
    fn test_layout_rows_narrow_width_keeps_card_minimum() {
        let project = mock_project();
        let theme = Theme::default();
        let rows = layout_rows(&project, &theme, 8);
        assert_eq!(rows[1].layout.main_constraints.max_width, 0);
        assert_eq!(rows[1].layout.main.size.width, CARD_MIN_WIDTH);
    }

    #[test]
    fn test_layout_rows_carry_connectors() {
        let project = mock_project();
        let rows = layout_rows(&project, &Theme::default(), 60);
        match rows[1].content {
            RowContent::Task { connectors, .. } => {
                assert_eq!(connectors.top, LineState::Undefined);
                assert_eq!(connectors.bottom, LineState::Connected);
            }
            RowContent::Header => panic!("expected a task row"),
        }
        match rows[2].content {
            RowContent::Task { connectors, .. } => {
                assert_eq!(connectors.top, LineState::Connected);
                assert_eq!(connectors.bottom, LineState::Disconnected);
            }
            RowContent::Header => panic!("expected a task row"),
        }
    }

    #[test]
    fn test_follow_selection_keeps_row_visible() {
        assert_eq!(follow_selection(0, 7, 20), 0);
        assert_eq!(follow_selection(15, 7, 20), 2);
        assert_eq!(follow_selection(50, 7, 20), 37);
    }

    #[test]
    fn test_follow_selection_tall_row_shows_top() {
        assert_eq!(follow_selection(10, 30, 5), 10);
    }

    #[test]
    fn test_connector_glyphs() {
        assert_eq!(connector_glyph(&LineState::Undefined.default_style()), "┆");
        assert_eq!(connector_glyph(&LineState::Connected.default_style()), "┃");
        assert_eq!(connector_glyph(&LineState::Disconnected.default_style()), "│");
    }

    #[test]
    fn test_render_shows_project_header() {
        let lines = render(70, 40, TimelineViewState::default());
        let text = lines.join("\n");
        assert!(text.contains("Create additional pages"));
        assert!(text.contains("3 days | Dec 18, 2019"));
        assert!(text.contains("85%"));
        assert!(text.contains(" MB "));
    }

    #[test]
    fn test_render_shows_header_row_and_first_task() {
        let lines = render(70, 40, TimelineViewState::default());
        let text = lines.join("\n");
        assert!(text.contains("Date"));
        assert!(text.contains("Show in days"));
        assert!(text.contains("24.19"));
        assert!(text.contains("In Progress"));
        assert!(text.contains("Contact page"));
        assert!(text.contains("N° 163"));
    }

    #[test]
    fn test_render_draws_connector_glyphs() {
        let lines = render(70, 40, TimelineViewState::default());
        let text = lines.join("\n");
        assert!(text.contains("┆"));
        assert!(text.contains("┃"));
        assert!(text.contains("●"));
    }

    #[test]
    fn test_render_scrolls_to_last_task() {
        let state = TimelineViewState { selected_index: 7 };
        let lines = render(70, 30, state);
        let text = lines.join("\n");
        assert!(text.contains("21.19"));
        assert!(!text.contains("Show in days"));
    }

    #[test]
    fn test_render_narrow_terminal_does_not_panic() {
        let lines = render(12, 12, TimelineViewState::default());
        assert_eq!(lines.len(), 12);
    }

    #[test]
    fn test_render_maximum_connector_gap() {
        let theme = Theme {
            connector_gap: u16::MAX,
            ..Theme::default()
        };
        let lines = render_with_theme(70, 40, TimelineViewState::default(), &theme);
        assert_eq!(lines.len(), 40);
        assert!(lines.iter().any(|l| l.contains("Contact page")));
    }

    #[test]
    fn test_spread_pads_between_sides() {
        let line = spread(vec![Span::raw("ab")], vec![Span::raw("cd")], 10);
        let text: String = line.spans.iter().map(|s| s.content.to_string()).collect();
        assert_eq!(text, "ab      cd");
    }

    #[test]
    fn test_spread_overflow_keeps_single_space() {
        let line = spread(vec![Span::raw("abcdef")], vec![Span::raw("ghij")], 5);
        let text: String = line.spans.iter().map(|s| s.content.to_string()).collect();
        assert_eq!(text, "abcdef ghij");
    }
}
