//! Geometry helpers shared by the surface and the input state machine.
//!
//! This module provides:
//! - [`Point`], an integer position in canvas coordinates
//! - [`Rect`], an axis-aligned rectangle used for dirty region tracking
//! - Clamping helpers that keep pointer input inside the canvas

use std::fmt;

// ============================================================================
// Points
// ============================================================================

/// Integer position in surface coordinate space.
///
/// A point addresses a whole pixel; primitives render it at the pixel centre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns this point clamped into a `width` x `height` canvas.
    ///
    /// Degenerate canvases (zero or negative size) collapse everything onto the origin.
    pub fn clamped(self, width: i32, height: i32) -> Self {
        Self {
            x: clamp(self.x, 0, (width - 1).max(0)),
            y: clamp(self.y, 0, (height - 1).max(0)),
        }
    }

    /// Pixel-centre coordinates used when handing the point to Cairo.
    pub(crate) fn centre(self) -> (f64, f64) {
        (self.x as f64 + 0.5, self.y as f64 + 0.5)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Clamps a value to an inclusive range.
pub fn clamp(val: i32, min: i32, max: i32) -> i32 {
    if val < min {
        min
    } else if val > max {
        max
    } else {
        val
    }
}

// ============================================================================
// Rectangles
// ============================================================================

/// Axis-aligned rectangle helper used for dirty region tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle. Width/height must be positive.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Option<Self> {
        if width <= 0 || height <= 0 {
            None
        } else {
            Some(Self {
                x,
                y,
                width,
                height,
            })
        }
    }

    /// Builds a rectangle from min/max bounds (inclusive min, exclusive max).
    ///
    /// Spans wider than `i32::MAX` saturate.
    pub fn from_min_max(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Option<Self> {
        Self::new(
            min_x,
            min_y,
            max_x.saturating_sub(min_x),
            max_y.saturating_sub(min_y),
        )
    }

    /// Returns the part of this rectangle that lies inside a `width` x `height` surface.
    pub fn clipped_to(self, width: i32, height: i32) -> Option<Self> {
        let min_x = self.x.clamp(0, width.max(0));
        let min_y = self.y.clamp(0, height.max(0));
        let max_x = self.x.saturating_add(self.width).clamp(0, width.max(0));
        let max_y = self.y.saturating_add(self.height).clamp(0, height.max(0));
        Self::from_min_max(min_x, min_y, max_x, max_y)
    }

    /// Returns true if `point` lies inside the rectangle.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.y >= self.y
            && point.x < self.x.saturating_add(self.width)
            && point.y < self.y.saturating_add(self.height)
    }

    /// Returns true if rectangle has a positive area.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}
