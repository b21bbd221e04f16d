mod core;
mod mouse;
#[cfg(test)]
mod tests;

pub use self::core::{CanvasController, ChangeListener};
pub use mouse::START_DOT_DIAMETER;
