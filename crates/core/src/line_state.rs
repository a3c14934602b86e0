//! Connector classification for stacked timeline rows.
//!
//! Every task row draws a vertical connector through its gutter: one
//! segment above the status dot and one below. Whether a segment reads as
//! part of a group depends only on the time-code of the neighboring row.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{CoreError, CoreResult};
use crate::models::Task;
use crate::theme::Theme;

/// Visual state of one connector segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineState {
    /// No neighbor on this side: sparse dashed gray.
    Undefined,
    /// Neighbor shares the time-code: solid thick white.
    Connected,
    /// Neighbor has a different time-code: solid thin gray.
    Disconnected,
}

impl LineState {
    /// Built-in stroke for each state.
    pub const fn default_style(self) -> LineStyle {
        match self {
            LineState::Undefined => LineStyle {
                color: Color::GRAY,
                width: 1.0,
                pattern: StrokePattern::Dashed { on: 20.0, off: 10.0 },
            },
            LineState::Connected => LineStyle {
                color: Color::WHITE,
                width: 8.0,
                pattern: StrokePattern::Solid,
            },
            LineState::Disconnected => LineStyle {
                color: Color::GRAY,
                width: 1.0,
                pattern: StrokePattern::Solid,
            },
        }
    }

    /// Stroke for this state under the given theme.
    pub fn style(self, theme: &Theme) -> LineStyle {
        match self {
            LineState::Undefined => theme.connectors.undefined,
            LineState::Connected => theme.connectors.connected,
            LineState::Disconnected => theme.connectors.disconnected,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            LineState::Undefined => "undefined",
            LineState::Connected => "connected",
            LineState::Disconnected => "disconnected",
        }
    }

    /// State of the segment between `current` and an optional neighbor.
    fn between(current: &Task, neighbor: Option<&Task>) -> Self {
        match neighbor {
            None => LineState::Undefined,
            Some(other) if other.time_code == current.time_code => LineState::Connected,
            Some(_) => LineState::Disconnected,
        }
    }
}

impl std::fmt::Display for LineState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Dash pattern of a connector stroke.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StrokePattern {
    Solid,
    Dashed { on: f32, off: f32 },
}

/// Color, width and dash pattern of a connector segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub color: Color,
    pub width: f32,
    pub pattern: StrokePattern,
}

/// Connector states above and below one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Connectors {
    pub top: LineState,
    pub bottom: LineState,
}

impl Connectors {
    /// Both segments undefined, as drawn on the header row.
    pub const UNDEFINED: Connectors = Connectors {
        top: LineState::Undefined,
        bottom: LineState::Undefined,
    };
}

/// Classify the segments above and below `current`.
///
/// `previous` and `next` are the immediate neighbors in display order, or
/// `None` at either end of the sequence.
pub fn classify(current: &Task, previous: Option<&Task>, next: Option<&Task>) -> Connectors {
    Connectors {
        top: LineState::between(current, previous),
        bottom: LineState::between(current, next),
    }
}

/// Classify every task of an ordered sequence.
pub fn classify_sequence(tasks: &[Task]) -> Vec<Connectors> {
    tasks
        .iter()
        .enumerate()
        .map(|(index, task)| {
            let previous = index.checked_sub(1).and_then(|i| tasks.get(i));
            classify(task, previous, tasks.get(index + 1))
        })
        .collect()
}

/// Check that tasks sharing a time-code sit next to each other.
///
/// Classification only compares immediate neighbors, so a time-code that
/// reappears later in the sequence is drawn as a separate group.
///
/// # Errors
///
/// Returns `CoreError::ScatteredTimeCode` for the first time-code found
/// outside its group.
pub fn check_contiguous(tasks: &[Task]) -> CoreResult<()> {
    let mut first_seen: HashMap<&str, usize> = HashMap::new();

    for (index, task) in tasks.iter().enumerate() {
        let code = task.time_code.as_str();
        let continues_group = index > 0 && tasks[index - 1].time_code == task.time_code;

        match first_seen.get(code) {
            Some(&first_index) if !continues_group => {
                return Err(CoreError::ScatteredTimeCode {
                    time_code: code.to_string(),
                    first_index,
                    index,
                });
            }
            Some(_) => {}
            None => {
                first_seen.insert(code, index);
            }
        }
    }

    Ok(())
}
