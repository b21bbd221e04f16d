//! Raster buffer, drawing primitives and the value types they consume.
//!
//! This module defines the pixel-level side of the canvas:
//! - [`Color`]: 8-bit RGB color with HSB conversion and named constants
//! - [`StrokeStyle`]: color, thickness and rainbow flag handed to primitives
//! - [`DrawSurface`] / [`RasterSurface`]: the persistent buffer and its primitives
//! - [`DirtyTracker`]: damage regions reported back to the host

pub mod bounds;
pub mod color;
pub mod dirty;
pub mod font;
pub mod style;
pub mod surface;

// Re-export commonly used types at module level
pub use color::{BLACK, BLUE, Color, GREEN, RED, WHITE, YELLOW, name_to_color};
pub use dirty::DirtyTracker;
pub use font::FontDescriptor;
pub use style::StrokeStyle;
pub use surface::{DrawSurface, RasterSurface, SurfaceError};
