//! Circular progress ring drawn on a braille canvas.

use projectmgt_core::{Arc, Color, RingArcs, Theme, percent_label, ring_arcs};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    symbols::Marker,
    widgets::{
        Widget,
        canvas::{Canvas, Painter, Shape},
    },
};

use crate::palette::{flatten, term};

/// Points sampled along each arc per pass.
const SEGMENTS: usize = 180;

/// Passes across the stroke width.
const BANDS: usize = 5;

/// One arc of the ring, stroked by sampling several radii.
struct ArcStroke<'a> {
    arc: &'a Arc,
    /// Side of the square the geometry was computed for.
    size: f32,
    surface: Color,
}

impl Shape for ArcStroke<'_> {
    fn draw(&self, painter: &mut Painter) {
        let color = flatten(self.arc.color, self.surface);
        for band in 0..BANDS {
            let offset = self.arc.stroke_width * (band as f32 / (BANDS - 1) as f32 - 0.5);
            for point in self.arc.points(SEGMENTS, offset) {
                // Canvas space is y-up.
                let y = f64::from(self.size - point.y);
                if let Some((x, y)) = painter.get_point(f64::from(point.x), y) {
                    painter.paint(x, y, color);
                }
            }
        }
    }
}

/// A progress ring with its percentage in the middle.
pub struct ProgressRing<'a> {
    progress: f32,
    color: Color,
    surface: Color,
    theme: &'a Theme,
}

impl<'a> ProgressRing<'a> {
    pub fn new(progress: f32, color: Color, theme: &'a Theme) -> Self {
        Self {
            progress,
            color,
            surface: theme.background,
            theme,
        }
    }

    /// Color of whatever the ring is drawn on; faded arcs blend into it.
    pub fn surface(mut self, surface: Color) -> Self {
        self.surface = surface;
        self
    }

    fn arcs(&self) -> RingArcs {
        ring_arcs(
            self.progress,
            self.color,
            self.theme.ring.stroke_width,
            self.theme.ring.size,
        )
    }
}

impl Widget for ProgressRing<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let arcs = self.arcs();
        let size = self.theme.ring.size;
        let surface = self.surface;

        Canvas::default()
            .x_bounds([0.0, f64::from(size)])
            .y_bounds([0.0, f64::from(size)])
            .marker(Marker::Braille)
            .background_color(term(surface))
            .paint(|ctx| {
                ctx.draw(&ArcStroke {
                    arc: &arcs.filled,
                    size,
                    surface,
                });
                if let Some(remainder) = &arcs.remainder {
                    ctx.draw(&ArcStroke {
                        arc: remainder,
                        size,
                        surface,
                    });
                }
            })
            .render(area, buf);

        let label = percent_label(self.progress);
        let width = (label.len() as u16).min(area.width);
        let x = area.x + (area.width - width) / 2;
        let y = area.y + area.height / 2;
        buf.set_stringn(
            x,
            y,
            &label,
            width as usize,
            Style::default()
                .fg(term(self.color))
                .bg(term(surface))
                .add_modifier(Modifier::BOLD),
        );
    }
}
