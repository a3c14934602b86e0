//! Avatar rows rendered as initials badges.

use projectmgt_core::{Theme, User};
use ratatui::{
    style::{Modifier, Style},
    text::Span,
};

use crate::palette::term;

/// Badge shown after the avatars when adding members is offered.
const ADD_BADGE: &str = " + ";

/// Build one badge per user, optionally followed by an add badge.
pub fn avatar_spans<'a>(
    users: impl IntoIterator<Item = &'a User>,
    show_add: bool,
    theme: &Theme,
) -> Vec<Span<'static>> {
    let badge = Style::default()
        .fg(term(theme.text))
        .bg(term(theme.card))
        .add_modifier(Modifier::BOLD);

    let mut spans = Vec::new();
    for user in users {
        if !spans.is_empty() {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(format!(" {} ", user.initials()), badge));
    }

    if show_add {
        if !spans.is_empty() {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(ADD_BADGE, badge.fg(term(theme.accent))));
    }

    spans
}

/// Width in cells of the spans from [`avatar_spans`].
pub fn spans_width(spans: &[Span<'_>]) -> u16 {
    let width: usize = spans.iter().map(Span::width).sum();
    u16::try_from(width).unwrap_or(u16::MAX)
}
