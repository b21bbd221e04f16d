//! Requests relayed to the text-entry and color-selection dialogs.
//!
//! The canvas never waits on a dialog. It queues a request and returns; the host
//! forwards the request to its dialog and later reports the outcome through
//! [`CanvasController::complete_text`](super::CanvasController::complete_text) or
//! [`CanvasController::complete_color`](super::CanvasController::complete_color).
//! Each request carries everything needed to apply its answer, so no gesture
//! state is kept while a dialog is open.

use super::state::CanvasController;
use crate::draw::DrawSurface;
use crate::util::Point;

/// Ask for a string to stamp at `anchor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRequest {
    /// Baseline start of the text, already clamped to the canvas
    pub anchor: Point,
}

/// Which color a color dialog answer applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTarget {
    /// The stroke color (disables rainbow cycling)
    Stroke,
    /// The background used by clear and the eraser
    Background,
}

/// Ask for a color for `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorRequest {
    pub target: ColorTarget,
}

/// Any request waiting to be handed to a dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogRequest {
    Text(TextRequest),
    Color(ColorRequest),
}

/// Modal text-entry collaborator.
///
/// Implementations must not block; they answer later via `complete_text`
/// (or never, which counts as a cancel).
pub trait TextDialog {
    fn open_text(&mut self, request: TextRequest);
}

/// Modal color-selection collaborator.
pub trait ColorDialog {
    fn open_color(&mut self, request: ColorRequest);
}

/// Drains the controller's pending requests into the matching dialogs.
///
/// Returns how many requests were forwarded.
pub fn forward_requests<S: DrawSurface>(
    controller: &mut CanvasController<S>,
    text_dialog: &mut dyn TextDialog,
    color_dialog: &mut dyn ColorDialog,
) -> usize {
    let requests = controller.take_pending_requests();
    let forwarded = requests.len();
    for request in requests {
        match request {
            DialogRequest::Text(text) => text_dialog.open_text(text),
            DialogRequest::Color(color) => color_dialog.open_color(color),
        }
    }
    forwarded
}
