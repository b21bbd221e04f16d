//! Input handling and the drawing mode state machine.
//!
//! This module translates host pointer events into drawing primitives. It keeps
//! the active [`Mode`], the buffered gesture points, the stroke style, and the
//! queue of requests for the external text and color dialogs.

pub mod events;
pub mod mode;
pub mod pointer;
pub mod requests;
pub mod state;
pub mod stroke;

// Re-export commonly used types at module level
pub use events::{PointerEvent, PointerKind};
pub use mode::Mode;
pub use pointer::PointerTracker;
pub use requests::{
    ColorDialog, ColorRequest, ColorTarget, DialogRequest, TextDialog, TextRequest,
    forward_requests,
};
pub use state::CanvasController;
pub use stroke::{ColorChoice, NamedColor, StrokeState, ThicknessChoice};
