//! Circular progress ring geometry.
//!
//! Angles are in degrees with 0° at the 3 o'clock position, increasing
//! clockwise in a y-down coordinate space. The ring starts at the top.

use serde::Serialize;

use crate::color::Color;

/// Angle of the visual top of the ring.
pub const START_ANGLE: f32 = 270.0;

/// Opacity of the unfilled part of the ring.
pub const REMAINDER_ALPHA: f32 = 0.3;

/// A point in y-down drawing space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// An open arc stroked along a circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Arc {
    pub start_angle: f32,
    pub sweep_angle: f32,
    pub color: Color,
    pub stroke_width: f32,
    /// Top-left corner of the circle's bounding square.
    pub top_left: Point,
    /// Side of the bounding square.
    pub diameter: f32,
}

impl Arc {
    pub fn center(&self) -> Point {
        Point {
            x: self.top_left.x + self.diameter / 2.0,
            y: self.top_left.y + self.diameter / 2.0,
        }
    }

    pub fn radius(&self) -> f32 {
        self.diameter / 2.0
    }

    /// Sample `segments + 1` evenly spaced points along the arc.
    ///
    /// `radius_offset` moves the samples off the nominal circle, so a
    /// raster renderer can cover the stroke width with several passes.
    /// An arc with no sweep yields no points.
    pub fn points(&self, segments: usize, radius_offset: f32) -> Vec<Point> {
        if self.sweep_angle <= 0.0 || segments == 0 {
            return Vec::new();
        }

        let center = self.center();
        let radius = (self.radius() + radius_offset).max(0.0);
        (0..=segments)
            .map(|i| {
                let angle = self.start_angle + self.sweep_angle * i as f32 / segments as f32;
                let (sin, cos) = angle.to_radians().sin_cos();
                Point {
                    x: center.x + radius * cos,
                    y: center.y + radius * sin,
                }
            })
            .collect()
    }
}

/// The filled arc and, below full progress, the faded remainder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RingArcs {
    pub filled: Arc,
    pub remainder: Option<Arc>,
}

/// Compute the arcs of a progress ring drawn in a `size` square.
///
/// The circle is inset by half the stroke width on every side so the
/// stroke stays inside the square. `progress` is clamped to `[0, 1]`;
/// NaN counts as zero.
pub fn ring_arcs(progress: f32, color: Color, stroke_width: f32, size: f32) -> RingArcs {
    let progress = clamp_progress(progress);
    let sweep = progress * 360.0;

    let inset = stroke_width / 2.0;
    let top_left = Point { x: inset, y: inset };
    let diameter = (size - stroke_width).max(0.0);

    let filled = Arc {
        start_angle: START_ANGLE,
        sweep_angle: sweep,
        color,
        stroke_width,
        top_left,
        diameter,
    };

    let remainder = (sweep < 360.0).then(|| Arc {
        start_angle: (START_ANGLE + sweep) % 360.0,
        sweep_angle: 360.0 - sweep,
        color: color.with_alpha(REMAINDER_ALPHA),
        stroke_width,
        top_left,
        diameter,
    });

    RingArcs { filled, remainder }
}

/// Rounded percentage text shown in the middle of the ring.
pub fn percent_label(progress: f32) -> String {
    format!("{}%", (clamp_progress(progress) * 100.0).round() as u32)
}

fn clamp_progress(progress: f32) -> f32 {
    if progress.is_nan() {
        tracing::warn!("progress is NaN, drawing as 0");
        return 0.0;
    }
    if !(0.0..=1.0).contains(&progress) {
        tracing::warn!(progress, "progress outside [0, 1], clamping");
    }
    progress.clamp(0.0, 1.0)
}
