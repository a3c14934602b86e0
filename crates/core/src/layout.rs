//! Two-column row layout for timeline rows.
//!
//! A row is a fixed-width gutter (time-code and connector) followed by the
//! main content (task card). Measurement runs in two passes: the main
//! content is measured first against the width left over by the gutter,
//! then the gutter is measured at exactly its configured width and the
//! main content's height. The gutter never drives the row height.
//!
//! Units are terminal cells, but nothing here depends on the renderer.

use serde::Serialize;

/// A measured width and height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Offset of a placed block from the row origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Position {
    pub x: u16,
    pub y: u16,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0, y: 0 };
}

/// Minimum and maximum sizes a block may take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Constraints {
    pub min_width: u16,
    pub max_width: u16,
    pub min_height: u16,
    pub max_height: u16,
}

impl Constraints {
    pub const fn new(min_width: u16, max_width: u16, min_height: u16, max_height: u16) -> Self {
        Self {
            min_width,
            max_width,
            min_height,
            max_height,
        }
    }

    /// Exactly one size.
    pub const fn fixed(width: u16, height: u16) -> Self {
        Self::new(width, width, height, height)
    }

    /// Anything from zero up to the given size.
    pub const fn loose(max_width: u16, max_height: u16) -> Self {
        Self::new(0, max_width, 0, max_height)
    }

    /// Reduce both width bounds by `amount`, flooring at zero.
    pub fn shrink_width(self, amount: u16) -> Self {
        Self {
            min_width: self.min_width.saturating_sub(amount),
            max_width: self.max_width.saturating_sub(amount),
            ..self
        }
    }

    /// Clamp a size into these bounds.
    ///
    /// The minimum wins when a caller passes bounds with min above max.
    pub fn constrain(self, size: Size) -> Size {
        Size {
            width: size.width.min(self.max_width).max(self.min_width),
            height: size.height.min(self.max_height).max(self.min_height),
        }
    }
}

/// A block whose size can be computed under constraints.
pub trait Measure {
    /// Report the size this block takes under `constraints`.
    ///
    /// Implementations may return a width above `max_width` when they
    /// cannot shrink further; the caller clips.
    fn measure(&self, constraints: Constraints) -> Size;
}

impl<T: Measure + ?Sized> Measure for &T {
    fn measure(&self, constraints: Constraints) -> Size {
        (**self).measure(constraints)
    }
}

/// A block with an intrinsic size, clamped into whatever it is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fixed(pub Size);

impl Measure for Fixed {
    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(self.0)
    }
}

/// A block that fills the available width at a fixed height.
///
/// `min_width` is the narrowest the content can render; it is reported
/// even when it exceeds `max_width`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillWidth {
    pub height: u16,
    pub min_width: u16,
}

impl Measure for FillWidth {
    fn measure(&self, constraints: Constraints) -> Size {
        Size {
            width: constraints.max_width.max(self.min_width),
            height: self
                .height
                .min(constraints.max_height)
                .max(constraints.min_height),
        }
    }
}

/// Where a block landed and how big it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub position: Position,
    pub size: Size,
}

/// Result of laying out one timeline row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RowLayout {
    /// Total row size.
    pub size: Size,
    /// Constraints the main content was measured against.
    pub main_constraints: Constraints,
    pub gutter: Placement,
    pub main: Placement,
}

/// Lay out a gutter of `gutter_width` next to the main content.
///
/// The main content gets the container's width bounds minus the gutter
/// (never below zero) and the container's height bounds unchanged. The
/// gutter is then measured at exactly `gutter_width` by the main content's
/// height. A main content of zero height yields a zero-height row.
pub fn layout_row(
    gutter_width: u16,
    constraints: Constraints,
    gutter: &impl Measure,
    main: &impl Measure,
) -> RowLayout {
    let main_constraints = constraints.shrink_width(gutter_width);
    let main_size = main.measure(main_constraints);

    let gutter_constraints = Constraints::fixed(gutter_width, main_size.height);
    let gutter_size = gutter_constraints.constrain(gutter.measure(gutter_constraints));

    RowLayout {
        size: Size {
            width: gutter_size.width.saturating_add(main_size.width),
            height: main_size.height,
        },
        main_constraints,
        gutter: Placement {
            position: Position::ORIGIN,
            size: gutter_size,
        },
        main: Placement {
            position: Position {
                x: gutter_width,
                y: 0,
            },
            size: main_size,
        },
    }
}
