//! Output formatting module for projectmgt
//!
//! Provides table and text formatting for CLI output.

use projectmgt_core::{Arc, RingArcs, RowLayout};

use crate::commands::timeline::TimelineRow;

/// Maximum width for the title column before truncation
const MAX_TITLE_WIDTH: usize = 30;

/// Truncate a string to the specified maximum width, adding ellipsis if needed.
fn truncate(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width <= 3 {
        s.chars().take(max_width).collect()
    } else {
        let head: String = s.chars().take(max_width - 3).collect();
        format!("{}...", head)
    }
}

/// Format timeline rows into an aligned table string.
///
/// Produces output in the format:
/// ```text
/// Time   Top        Bottom        Status       ID   Tag      Title
/// -----  ---------  ------------  -----------  ---  -------  ------------
/// 24.19  undefined  connected     in_progress  163  #Design  Contact page
/// ```
pub fn format_timeline_table(rows: &[TimelineRow]) -> String {
    if rows.is_empty() {
        return "No tasks found.".to_string();
    }

    let headers = ["Time", "Top", "Bottom", "Status", "ID", "Tag", "Title"];

    let width = |header: &str, cell: &dyn Fn(&TimelineRow) -> usize| {
        rows.iter().map(cell).max().unwrap_or(0).max(header.len())
    };

    let time_w = width(headers[0], &|r| r.time_code.chars().count());
    let top_w = width(headers[1], &|r| r.top.len());
    let bottom_w = width(headers[2], &|r| r.bottom.len());
    let status_w = width(headers[3], &|r| r.status.len());
    let id_w = width(headers[4], &|r| r.id.to_string().len());
    let tag_w = width(headers[5], &|r| r.tag.chars().count());
    let title_w = width(headers[6], &|r| r.title.chars().count().min(MAX_TITLE_WIDTH));

    let mut output = String::new();

    output.push_str(&format!(
        "{:<time_w$}  {:<top_w$}  {:<bottom_w$}  {:<status_w$}  {:<id_w$}  {:<tag_w$}  {:<title_w$}\n",
        headers[0], headers[1], headers[2], headers[3], headers[4], headers[5], headers[6],
    ));

    output.push_str(&format!(
        "{:->time_w$}  {:->top_w$}  {:->bottom_w$}  {:->status_w$}  {:->id_w$}  {:->tag_w$}  {:->title_w$}\n",
        "", "", "", "", "", "", "",
    ));

    for row in rows {
        output.push_str(&format!(
            "{:<time_w$}  {:<top_w$}  {:<bottom_w$}  {:<status_w$}  {:<id_w$}  {:<tag_w$}  {:<title_w$}\n",
            row.time_code,
            row.top,
            row.bottom,
            row.status,
            row.id,
            row.tag,
            truncate(&row.title, MAX_TITLE_WIDTH),
        ));
    }

    // Remove trailing newline
    output.pop();

    output
}

fn format_arc(name: &str, arc: &Arc) -> String {
    format!(
        "  {:<9}  start {:>6.1}°  sweep {:>6.1}°  color {}",
        name, arc.start_angle, arc.sweep_angle, arc.color
    )
}

/// Format progress ring arcs, one per line, under a summary line.
///
/// ```text
/// Progress: 85%
/// Circle: 40.0 across at (4.0, 4.0), stroke 8.0
///   filled     start  270.0°  sweep  306.0°  color #F26950
///   remainder  start  216.0°  sweep   54.0°  color #4DF26950
/// ```
pub fn format_ring_arcs(percent: &str, arcs: &RingArcs) -> String {
    let filled = &arcs.filled;
    let mut lines = vec![
        format!("Progress: {}", percent),
        format!(
            "Circle: {:.1} across at ({:.1}, {:.1}), stroke {:.1}",
            filled.diameter, filled.top_left.x, filled.top_left.y, filled.stroke_width
        ),
        format_arc("filled", filled),
    ];
    if let Some(remainder) = &arcs.remainder {
        lines.push(format_arc("remainder", remainder));
    }
    lines.join("\n")
}

/// Format a row layout as the row size and both placements.
///
/// ```text
/// Row: 60x7
/// Gutter: 10x7 at (0, 0)
/// Main: 50x7 at (10, 0), width 0..=50
/// ```
pub fn format_row_layout(layout: &RowLayout) -> String {
    let gutter = &layout.gutter;
    let main = &layout.main;
    let bounds = &layout.main_constraints;
    [
        format!("Row: {}x{}", layout.size.width, layout.size.height),
        format!(
            "Gutter: {}x{} at ({}, {})",
            gutter.size.width, gutter.size.height, gutter.position.x, gutter.position.y
        ),
        format!(
            "Main: {}x{} at ({}, {}), width {}..={}",
            main.size.width,
            main.size.height,
            main.position.x,
            main.position.y,
            bounds.min_width,
            bounds.max_width
        ),
    ]
    .join("\n")
}
