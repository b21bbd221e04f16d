use crate::draw::{DrawSurface, StrokeStyle};
use crate::input::events::{PointerEvent, PointerKind};
use crate::input::mode::Mode;
use crate::util::Point;

use super::CanvasController;

/// Diameter of the dot stamped when a freehand gesture starts.
pub const START_DOT_DIAMETER: u32 = 2;

impl<S: DrawSurface> CanvasController<S> {
    /// Processes a pointer event according to the active mode.
    ///
    /// The position is clamped into the canvas first. Combinations not listed
    /// below have no effect:
    ///
    /// | Mode       | Down          | Drag               | Up                      |
    /// |------------|---------------|--------------------|-------------------------|
    /// | Pen        | reset + dot   | segment + rainbow  | -                       |
    /// | Eraser     | reset + dot   | segment            | -                       |
    /// | Line       | -             | -                  | collect / draw line     |
    /// | Triangle   | -             | -                  | collect / draw triangle |
    /// | TextInsert | -             | -                  | request text            |
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        let point = self.clamp(event.position);

        match (self.mode, event.kind) {
            (mode, PointerKind::Down) if mode.is_freehand() => self.start_freehand(point),
            (mode, PointerKind::Drag) if mode.is_freehand() => self.continue_freehand(point),
            (Mode::Line, PointerKind::Up) => self.collect_line_point(point),
            (Mode::Triangle, PointerKind::Up) => self.collect_triangle_point(point),
            (Mode::TextInsert, PointerKind::Up) => self.request_text(point),
            _ => {}
        }

        self.signal_changes();
    }

    /// Primary button pressed at `point`.
    pub fn pointer_down(&mut self, point: impl Into<Point>) {
        self.handle_pointer(PointerEvent::down(point));
    }

    /// Pointer dragged to `point` with the primary button held.
    pub fn pointer_drag(&mut self, point: impl Into<Point>) {
        self.handle_pointer(PointerEvent::drag(point));
    }

    /// Primary button released at `point`.
    pub fn pointer_up(&mut self, point: impl Into<Point>) {
        self.handle_pointer(PointerEvent::up(point));
    }

    fn start_freehand(&mut self, point: Point) {
        self.pointer.clear();
        let color = self.freehand_style().color;
        self.surface.stamp_dot(point, START_DOT_DIAMETER, color);
    }

    fn continue_freehand(&mut self, point: Point) {
        self.pointer.push(point);
        let Some((last, current)) = self.pointer.pair() else {
            return;
        };

        let style = self.freehand_style();
        self.surface.draw_segment(last, current, style);

        if self.mode == Mode::Pen && self.stroke.rainbow_enabled() {
            self.stroke.advance_rainbow(self.rainbow_step);
        }
    }

    /// Pen strokes use the stroke style; the eraser paints the background color.
    fn freehand_style(&self) -> StrokeStyle {
        let style = self.stroke.style();
        match self.mode {
            Mode::Eraser => style.with_color(self.background),
            _ => style,
        }
    }

    fn collect_line_point(&mut self, point: Point) {
        match self.pointer.current() {
            Some(start) => {
                self.surface.draw_segment(start, point, self.stroke.style());
                self.pointer.clear();
            }
            None => self.pointer.push(point),
        }
    }

    fn collect_triangle_point(&mut self, point: Point) {
        match self.pointer.pair() {
            Some((first, second)) => {
                self.surface
                    .draw_triangle(first, second, point, self.stroke.style());
                self.pointer.clear();
            }
            None => self.pointer.push(point),
        }
    }
}
