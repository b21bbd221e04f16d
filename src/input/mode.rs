//! Drawing mode selection.

use std::fmt;
use std::str::FromStr;

/// Drawing mode.
///
/// Exactly one mode is active at a time. The active mode decides which pointer
/// events matter and which primitive they end up calling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Freehand drawing - follows the pointer while dragging (default)
    #[default]
    Pen,
    /// Straight line - two releases give the endpoints
    Line,
    /// Triangle outline - three releases give the corners
    Triangle,
    /// Text stamp - a release asks the text dialog for a string
    TextInsert,
    /// Freehand drawing in the background color
    Eraser,
}

impl Mode {
    /// All modes in index order.
    pub const ALL: [Mode; 5] = [
        Mode::Pen,
        Mode::Line,
        Mode::Triangle,
        Mode::TextInsert,
        Mode::Eraser,
    ];

    /// Looks a mode up by its numeric index (0 = Pen ... 4 = Eraser).
    pub fn from_index(index: i32) -> Option<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    /// Human-readable name used in logs and scripts.
    pub fn name(self) -> &'static str {
        match self {
            Mode::Pen => "pen",
            Mode::Line => "line",
            Mode::Triangle => "triangle",
            Mode::TextInsert => "text",
            Mode::Eraser => "eraser",
        }
    }

    /// Whether the mode draws while the pointer is dragged.
    pub fn is_freehand(self) -> bool {
        matches!(self, Mode::Pen | Mode::Eraser)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pen" | "draw" | "freehand" => Ok(Self::Pen),
            "line" => Ok(Self::Line),
            "triangle" => Ok(Self::Triangle),
            "text" | "text-insert" | "textinsert" => Ok(Self::TextInsert),
            "eraser" | "erase" => Ok(Self::Eraser),
            _ => Err(()),
        }
    }
}
