//! Canvas controller state and the style/mode/request API.

use crate::config::Config;
use crate::draw::{Color, DrawSurface, RasterSurface, SurfaceError};
use crate::input::{
    mode::Mode,
    pointer::PointerTracker,
    requests::{ColorRequest, ColorTarget, DialogRequest, TextRequest},
    stroke::{ColorChoice, DEFAULT_RAINBOW_STEP, StrokeState, ThicknessChoice},
};
use crate::util::{Point, Rect};
use log::{debug, info, warn};

/// Pending dirty rectangles kept before they are collapsed into one full-canvas region.
const MAX_PENDING_REGIONS: usize = 256;

/// Callback invoked with each damaged region after the buffer changed.
pub type ChangeListener = Box<dyn FnMut(Rect)>;

/// The drawing state machine.
///
/// Owns the surface, the active [`Mode`], the [`PointerTracker`] and the
/// [`StrokeState`]. The host feeds it pointer events and style changes one at a
/// time; each call runs to completion, mutating the buffer synchronously.
pub struct CanvasController<S: DrawSurface = RasterSurface> {
    /// Pixel buffer; only touched through its primitives
    pub(super) surface: S,
    /// Active drawing mode
    pub(super) mode: Mode,
    /// Points buffered for the gesture in progress
    pub(super) pointer: PointerTracker,
    /// Current color, thickness and rainbow cursor
    pub(super) stroke: StrokeState,
    /// Color used by clear and the eraser
    pub(super) background: Color,
    /// Hue advance per rainbow segment
    pub(super) rainbow_step: f64,
    /// Dialog requests waiting for the host
    pending_requests: Vec<DialogRequest>,
    /// Damage waiting for the host when no listener is registered
    dirty_regions: Vec<Rect>,
    /// Optional push-style buffer-changed signal
    change_listener: Option<ChangeListener>,
    /// Whether the buffer changed since the host last repainted
    pub needs_redraw: bool,
}

impl CanvasController<RasterSurface> {
    /// Builds a controller over a freshly allocated raster surface described by `config`.
    ///
    /// # Errors
    /// Returns an error if the surface cannot be allocated.
    pub fn from_config(config: &Config) -> Result<Self, SurfaceError> {
        let background = config.canvas.background.to_color();
        let surface = RasterSurface::new(
            config.canvas.width as i32,
            config.canvas.height as i32,
            background,
            config.text.font_descriptor(),
        )?;

        let mut controller = Self::new(surface, background);
        controller.set_stroke_color(config.drawing.default_color.to_choice());
        controller.set_stroke_thickness(config.drawing.default_thickness.to_choice());
        controller.set_rainbow_step(config.drawing.rainbow_step);

        info!(
            "Canvas ready: {}x{}, background {}",
            config.canvas.width, config.canvas.height, background
        );
        Ok(controller)
    }
}

impl<S: DrawSurface> CanvasController<S> {
    /// Wraps `surface`, filling it with `background`.
    ///
    /// Starts in [`Mode::Pen`] with a black, regular-thickness stroke.
    pub fn new(surface: S, background: Color) -> Self {
        let mut controller = Self {
            surface,
            mode: Mode::default(),
            pointer: PointerTracker::new(),
            stroke: StrokeState::new(),
            background,
            rainbow_step: DEFAULT_RAINBOW_STEP,
            pending_requests: Vec::new(),
            dirty_regions: Vec::new(),
            change_listener: None,
            needs_redraw: true,
        };
        controller.surface.clear(background);
        controller.signal_changes();
        controller
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access for hosts that need to read pixels back.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn pointer(&self) -> &PointerTracker {
        &self.pointer
    }

    pub fn stroke(&self) -> &StrokeState {
        &self.stroke
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Hue advance applied per rainbow segment.
    pub fn rainbow_step(&self) -> f64 {
        self.rainbow_step
    }

    /// Overrides the hue advance applied per rainbow segment.
    pub fn set_rainbow_step(&mut self, step: f64) {
        if step > 0.0 && step < 1.0 {
            self.rainbow_step = step;
        } else {
            warn!("Ignoring rainbow step {step}; must lie in (0, 1)");
        }
    }

    // ------------------------------------------------------------------------
    // Mode
    // ------------------------------------------------------------------------

    /// Switches the active mode and drops any partially collected gesture.
    ///
    /// The pointer buffer is cleared even when `mode` is already active.
    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            debug!("Mode changed from {} to {}", self.mode, mode);
        }
        self.mode = mode;
        self.pointer.clear();
    }

    /// Switches mode by name; unknown names are ignored.
    ///
    /// Returns whether the name was recognised.
    pub fn set_mode_named(&mut self, name: &str) -> bool {
        match name.parse::<Mode>() {
            Ok(mode) => {
                self.set_mode(mode);
                true
            }
            Err(()) => {
                warn!("Unknown mode '{name}', keeping {}", self.mode);
                false
            }
        }
    }

    /// Switches mode by numeric index; out-of-range values are ignored.
    pub fn set_mode_index(&mut self, index: i32) -> bool {
        match Mode::from_index(index) {
            Some(mode) => {
                self.set_mode(mode);
                true
            }
            None => {
                warn!("Mode index {index} out of range, keeping {}", self.mode);
                false
            }
        }
    }

    // ------------------------------------------------------------------------
    // Style
    // ------------------------------------------------------------------------

    pub fn set_stroke_color(&mut self, choice: ColorChoice) {
        self.stroke.set_color(choice);
    }

    /// Sets the stroke color by name (see [`ColorChoice::parse`] for the fallback).
    pub fn set_stroke_color_named(&mut self, name: &str) {
        self.set_stroke_color(ColorChoice::parse(name));
    }

    /// Returns `false` when the thickness was rejected and left unchanged.
    pub fn set_stroke_thickness(&mut self, choice: ThicknessChoice) -> bool {
        self.stroke.set_thickness(choice)
    }

    /// Sets the thickness by name (see [`ThicknessChoice::parse`] for the fallback).
    pub fn set_stroke_thickness_named(&mut self, name: &str) -> bool {
        self.set_stroke_thickness(ThicknessChoice::parse(name))
    }

    /// Changes the color used by [`clear`](Self::clear) and the eraser.
    ///
    /// Pixels already in the buffer are left as they are.
    pub fn set_background_color(&mut self, color: Color) {
        debug!("Background color set to {color}");
        self.background = color;
    }

    // ------------------------------------------------------------------------
    // Buffer
    // ------------------------------------------------------------------------

    /// Fills the buffer with the background color.
    pub fn clear(&mut self) {
        self.surface.clear(self.background);
        self.signal_changes();
        debug!("Canvas cleared to {}", self.background);
    }

    /// Registers the buffer-changed signal. Damage accumulated so far is delivered
    /// right away; from then on regions go to the listener instead of
    /// [`take_dirty_regions`](Self::take_dirty_regions).
    pub fn on_buffer_changed(&mut self, listener: impl FnMut(Rect) + 'static) {
        let mut listener: ChangeListener = Box::new(listener);
        for region in self.dirty_regions.drain(..) {
            listener(region);
        }
        self.change_listener = Some(listener);
    }

    /// Drains damage accumulated since the last call.
    pub fn take_dirty_regions(&mut self) -> Vec<Rect> {
        std::mem::take(&mut self.dirty_regions)
    }

    /// Clamps a pointer position into the canvas.
    pub(super) fn clamp(&self, point: Point) -> Point {
        let (width, height) = self.surface.size();
        point.clamped(width, height)
    }

    /// Collects damage from the surface and forwards it to the host.
    pub(super) fn signal_changes(&mut self) {
        let regions = self.surface.take_dirty_regions();
        if regions.is_empty() {
            return;
        }
        self.needs_redraw = true;

        if let Some(listener) = self.change_listener.as_mut() {
            for region in regions {
                listener(region);
            }
            return;
        }

        self.dirty_regions.extend(regions);
        if self.dirty_regions.len() > MAX_PENDING_REGIONS {
            let (width, height) = self.surface.size();
            self.dirty_regions = Rect::new(0, 0, width, height).into_iter().collect();
        }
    }

    // ------------------------------------------------------------------------
    // Dialog requests
    // ------------------------------------------------------------------------

    /// Queues a color dialog request for `target`.
    pub fn request_color(&mut self, target: ColorTarget) {
        debug!("Queued color request for {target:?}");
        self.pending_requests
            .push(DialogRequest::Color(ColorRequest { target }));
    }

    pub(super) fn request_text(&mut self, anchor: Point) {
        debug!("Queued text request at {anchor}");
        self.pending_requests
            .push(DialogRequest::Text(TextRequest { anchor }));
    }

    /// Takes the requests queued since the last call, oldest first.
    pub fn take_pending_requests(&mut self) -> Vec<DialogRequest> {
        std::mem::take(&mut self.pending_requests)
    }

    /// Applies the text dialog's answer. Only a non-empty string draws anything.
    pub fn complete_text(&mut self, request: TextRequest, response: Option<String>) {
        let Some(text) = response.filter(|text| !text.is_empty()) else {
            debug!("Text request at {} cancelled", request.anchor);
            return;
        };

        let anchor = self.clamp(request.anchor);
        self.surface.draw_text(anchor, &text, self.stroke.color());
        self.signal_changes();
    }

    /// Applies the color dialog's answer to the requested target; `None` is a no-op.
    pub fn complete_color(&mut self, request: ColorRequest, response: Option<Color>) {
        let Some(color) = response else {
            debug!("Color request for {:?} cancelled", request.target);
            return;
        };

        match request.target {
            ColorTarget::Stroke => self.set_stroke_color(ColorChoice::Explicit(color)),
            ColorTarget::Background => self.set_background_color(color),
        }
    }
}
