//! Pointer event types delivered by the host.

use crate::util::Point;

/// Kind of pointer event, used as the second key of the dispatch table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// Primary button pressed
    Down,
    /// Pointer moved with the primary button held
    Drag,
    /// Primary button released
    Up,
}

/// A single pointer event in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub position: Point,
}

impl PointerEvent {
    pub fn down(position: impl Into<Point>) -> Self {
        Self {
            kind: PointerKind::Down,
            position: position.into(),
        }
    }

    pub fn drag(position: impl Into<Point>) -> Self {
        Self {
            kind: PointerKind::Drag,
            position: position.into(),
        }
    }

    pub fn up(position: impl Into<Point>) -> Self {
        Self {
            kind: PointerKind::Up,
            position: position.into(),
        }
    }
}
