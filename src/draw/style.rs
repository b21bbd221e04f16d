//! Stroke style passed to drawing primitives.

use super::color::{BLACK, Color};

/// Thickness used when nothing else has been configured (the "Regular" size).
pub const DEFAULT_THICKNESS: u32 = 3;

/// The (color, thickness, rainbow) triple applied to a drawing primitive.
///
/// `thickness` is always positive; [`StrokeStyle::new`] refuses zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StrokeStyle {
    /// Stroke color
    pub color: Color,
    /// Line width in pixels
    pub thickness: u32,
    /// Whether the color is currently driven by the rainbow hue cursor
    pub rainbow: bool,
}

impl StrokeStyle {
    /// Builds a style, returning `None` for a zero thickness.
    pub fn new(color: Color, thickness: u32) -> Option<Self> {
        (thickness > 0).then_some(Self {
            color,
            thickness,
            rainbow: false,
        })
    }

    /// Same style with a different color and rainbow cycling switched off.
    pub fn with_color(self, color: Color) -> Self {
        Self {
            color,
            rainbow: false,
            ..self
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: BLACK,
            thickness: DEFAULT_THICKNESS,
            rainbow: false,
        }
    }
}
