//! The persistent raster buffer and the primitives that mutate it.
//!
//! [`DrawSurface`] names the primitives the input state machine relies on;
//! [`RasterSurface`] implements them on a fixed-size Cairo image surface. Every
//! primitive burns its result into the pixels immediately and records the damaged
//! area so the host knows what to repaint.

use super::bounds::{
    bounding_box_for_dot, bounding_box_for_extents, bounding_box_for_segment,
};
use super::color::Color;
use super::dirty::DirtyTracker;
use super::font::FontDescriptor;
use super::style::StrokeStyle;
use crate::util::{Point, Rect};
use log::{debug, warn};
use thiserror::Error;

/// Errors that can occur while allocating a surface.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("canvas size {width}x{height} must be positive")]
    InvalidSize { width: i32, height: i32 },

    #[error("failed to allocate raster buffer: {0}")]
    Cairo(#[from] cairo::Error),
}

/// Drawing primitives over a fixed-size pixel buffer.
///
/// Implementations receive only in-bounds points; callers clamp pointer input first.
/// None of the primitives can fail.
pub trait DrawSurface {
    /// Fixed `(width, height)` of the buffer.
    fn size(&self) -> (i32, i32);

    /// Fills the whole buffer with `background`, discarding all prior drawing.
    fn clear(&mut self, background: Color);

    /// Straight stroke from `from` to `to` with round caps and joins.
    fn draw_segment(&mut self, from: Point, to: Point, style: StrokeStyle);

    /// Closed triangle outline, drawn as the segments a→b, b→c, c→a in that order.
    fn draw_triangle(&mut self, a: Point, b: Point, c: Point, style: StrokeStyle) {
        self.draw_segment(a, b, style);
        self.draw_segment(b, c, style);
        self.draw_segment(c, a, style);
    }

    /// Filled circle of the given diameter centred on `at`.
    fn stamp_dot(&mut self, at: Point, diameter: u32, color: Color);

    /// Single line of text whose baseline starts at `at`.
    fn draw_text(&mut self, at: Point, text: &str, color: Color);

    /// Drains the regions damaged since the previous call.
    fn take_dirty_regions(&mut self) -> Vec<Rect>;
}

/// Cairo-backed pixel buffer.
///
/// The buffer uses [`cairo::Format::Rgb24`] and is allocated once; its dimensions
/// never change. Contexts are created per primitive so the surface stays
/// exclusively owned between operations, which keeps the pixel data readable.
pub struct RasterSurface {
    surface: cairo::ImageSurface,
    width: i32,
    height: i32,
    font: FontDescriptor,
    dirty: DirtyTracker,
}

impl RasterSurface {
    /// Allocates a `width` x `height` buffer filled with `background`.
    ///
    /// # Errors
    /// Returns an error if either dimension is not positive or Cairo cannot allocate
    /// the image.
    pub fn new(
        width: i32,
        height: i32,
        background: Color,
        font: FontDescriptor,
    ) -> Result<Self, SurfaceError> {
        if width <= 0 || height <= 0 {
            return Err(SurfaceError::InvalidSize { width, height });
        }

        let surface = cairo::ImageSurface::create(cairo::Format::Rgb24, width, height)?;
        let mut raster = Self {
            surface,
            width,
            height,
            font,
            dirty: DirtyTracker::new(),
        };
        raster.clear(background);

        debug!("Allocated {width}x{height} raster surface");
        Ok(raster)
    }

    /// The underlying image, for hosts that blit it to the screen.
    pub fn image(&self) -> &cairo::ImageSurface {
        &self.surface
    }

    /// Reads back a single pixel, or `None` outside the canvas.
    pub fn pixel(&mut self, at: Point) -> Option<Color> {
        let bounds = Rect::new(0, 0, self.width, self.height)?;
        if !bounds.contains(at) {
            return None;
        }

        self.surface.flush();
        let stride = self.surface.stride() as usize;
        let data = self.surface.data().ok()?;
        let offset = at.y as usize * stride + at.x as usize * 4;
        let bytes: [u8; 4] = data.get(offset..offset + 4)?.try_into().ok()?;
        Some(unpack_rgb24(u32::from_ne_bytes(bytes)))
    }

    /// Counts the pixels whose color differs from `color`.
    pub fn count_pixels_unlike(&mut self, color: Color) -> usize {
        self.surface.flush();
        let stride = self.surface.stride() as usize;
        let row_bytes = self.width as usize * 4;
        let Ok(data) = self.surface.data() else {
            warn!("Raster buffer is borrowed elsewhere; cannot inspect pixels");
            return 0;
        };

        data.chunks(stride)
            .take(self.height as usize)
            .flat_map(|row| row[..row_bytes].chunks_exact(4))
            .filter(|px| {
                let word = u32::from_ne_bytes([px[0], px[1], px[2], px[3]]);
                unpack_rgb24(word) != color
            })
            .count()
    }

    fn context(&self) -> Option<cairo::Context> {
        match cairo::Context::new(&self.surface) {
            Ok(ctx) => Some(ctx),
            Err(err) => {
                warn!("Failed to create drawing context: {err}");
                None
            }
        }
    }
}

fn unpack_rgb24(word: u32) -> Color {
    Color::new((word >> 16) as u8, (word >> 8) as u8, word as u8)
}

fn set_source(ctx: &cairo::Context, color: Color) {
    let (r, g, b) = color.to_unit_rgb();
    ctx.set_source_rgb(r, g, b);
}

impl DrawSurface for RasterSurface {
    fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    fn clear(&mut self, background: Color) {
        if let Some(ctx) = self.context() {
            set_source(&ctx, background);
            ctx.set_operator(cairo::Operator::Source);
            let _ = ctx.paint();
        }
        self.dirty.mark_full();
    }

    fn draw_segment(&mut self, from: Point, to: Point, style: StrokeStyle) {
        if let Some(ctx) = self.context() {
            set_source(&ctx, style.color);
            ctx.set_line_width(style.thickness as f64);
            ctx.set_line_cap(cairo::LineCap::Round);
            ctx.set_line_join(cairo::LineJoin::Round);

            let (x1, y1) = from.centre();
            let (x2, y2) = to.centre();
            ctx.move_to(x1, y1);
            ctx.line_to(x2, y2);
            let _ = ctx.stroke();
        }
        self.dirty
            .mark_bounds(bounding_box_for_segment(from, to, style.thickness as f64));
    }

    fn stamp_dot(&mut self, at: Point, diameter: u32, color: Color) {
        if let Some(ctx) = self.context() {
            set_source(&ctx, color);
            let (cx, cy) = at.centre();
            let radius = (diameter as f64 / 2.0).max(0.5);
            ctx.arc(cx, cy, radius, 0.0, std::f64::consts::PI * 2.0);
            let _ = ctx.fill();
        }
        self.dirty.mark_bounds(bounding_box_for_dot(at, diameter));
    }

    fn draw_text(&mut self, at: Point, text: &str, color: Color) {
        if text.is_empty() {
            return;
        }
        let Some(ctx) = self.context() else {
            return;
        };

        let layout = pangocairo::functions::create_layout(&ctx);
        layout.set_font_description(Some(&self.font.to_pango()));
        layout.set_single_paragraph_mode(true);
        layout.set_text(text);

        // Pango positions layouts by their top-left corner; shift up to the baseline.
        let scale = pango::SCALE as f64;
        let baseline = layout.baseline() as f64 / scale;
        let top = at.y as f64 - baseline;

        set_source(&ctx, color);
        ctx.move_to(at.x as f64, top);
        pangocairo::functions::show_layout(&ctx, &layout);

        let (ink, _logical) = layout.extents();
        if let Some(rect) = bounding_box_for_extents(
            at.x as f64 + ink.x() as f64 / scale - 1.0,
            top + ink.y() as f64 / scale - 1.0,
            ink.width() as f64 / scale + 2.0,
            ink.height() as f64 / scale + 2.0,
        ) {
            self.dirty.mark_rect(rect);
        }
    }

    fn take_dirty_regions(&mut self) -> Vec<Rect> {
        self.dirty.take_regions(self.width, self.height)
    }
}
