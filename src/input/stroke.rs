//! Stroke style state: color, thickness and rainbow hue cycling.
//!
//! String inputs are resolved through explicit parse functions with a fixed
//! fallback table instead of failing:
//!
//! | Input                  | Unrecognised value resolves to |
//! |------------------------|--------------------------------|
//! | color name             | Black                          |
//! | thickness name         | Regular (3)                    |
//! | explicit thickness ≤ 0 | ignored, previous value kept   |

use crate::draw::{
    BLACK, BLUE, Color, GREEN, RED, StrokeStyle, YELLOW, style::DEFAULT_THICKNESS,
};
use log::{debug, warn};

/// Hue advance applied per rainbow segment unless configured otherwise.
pub const DEFAULT_RAINBOW_STEP: f64 = 0.01;

/// The fixed palette addressable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedColor {
    Black,
    Red,
    Blue,
    Yellow,
    Green,
}

impl NamedColor {
    pub fn color(self) -> Color {
        match self {
            NamedColor::Black => BLACK,
            NamedColor::Red => RED,
            NamedColor::Blue => BLUE,
            NamedColor::Yellow => YELLOW,
            NamedColor::Green => GREEN,
        }
    }
}

/// A request to change the stroke color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorChoice {
    /// A specific RGB color
    Explicit(Color),
    /// One of the palette colors
    Named(NamedColor),
    /// Continuous hue cycling, starting from red
    Rainbow,
}

impl ColorChoice {
    /// Resolves a color name (case-insensitive). Unknown names fall back to black.
    pub fn parse(name: &str) -> Self {
        let named = match name.trim().to_lowercase().as_str() {
            "rainbow" => return ColorChoice::Rainbow,
            "black" => NamedColor::Black,
            "red" => NamedColor::Red,
            "blue" => NamedColor::Blue,
            "yellow" => NamedColor::Yellow,
            "green" => NamedColor::Green,
            _ => {
                warn!("Unknown color '{name}', using black");
                NamedColor::Black
            }
        };
        ColorChoice::Named(named)
    }
}

impl From<Color> for ColorChoice {
    fn from(color: Color) -> Self {
        ColorChoice::Explicit(color)
    }
}

/// A request to change the stroke thickness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThicknessChoice {
    /// Explicit width in pixels; non-positive values are rejected
    Pixels(i32),
    /// 1 pixel
    Thin,
    /// 3 pixels
    Regular,
    /// 5 pixels
    Thick,
}

impl ThicknessChoice {
    /// Resolves a thickness name (case-insensitive). Unknown names fall back to Regular.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "thin" => ThicknessChoice::Thin,
            "regular" => ThicknessChoice::Regular,
            "thick" => ThicknessChoice::Thick,
            _ => {
                warn!("Unknown thickness '{name}', using regular");
                ThicknessChoice::Regular
            }
        }
    }

    /// Width in pixels, or `None` for a non-positive explicit value.
    pub fn pixels(self) -> Option<u32> {
        match self {
            ThicknessChoice::Pixels(px) => u32::try_from(px).ok().filter(|px| *px > 0),
            ThicknessChoice::Thin => Some(1),
            ThicknessChoice::Regular => Some(DEFAULT_THICKNESS),
            ThicknessChoice::Thick => Some(5),
        }
    }
}

impl From<i32> for ThicknessChoice {
    fn from(px: i32) -> Self {
        ThicknessChoice::Pixels(px)
    }
}

/// Current color, thickness and rainbow hue cursor.
///
/// The hue cursor only exists while rainbow cycling is enabled; picking any other
/// color discards it.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeState {
    color: Color,
    thickness: u32,
    hue: Option<f64>,
}

impl Default for StrokeState {
    fn default() -> Self {
        Self {
            color: BLACK,
            thickness: DEFAULT_THICKNESS,
            hue: None,
        }
    }
}

impl StrokeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a color choice. `Rainbow` (re)starts the hue cursor at 0.
    pub fn set_color(&mut self, choice: ColorChoice) {
        match choice {
            ColorChoice::Explicit(color) => {
                self.color = color;
                self.hue = None;
            }
            ColorChoice::Named(named) => {
                self.color = named.color();
                self.hue = None;
            }
            ColorChoice::Rainbow => {
                self.hue = Some(0.0);
                self.color = Color::from_hsb(0.0, 1.0, 1.0);
            }
        }
        debug!(
            "Stroke color set to {} (rainbow: {})",
            self.color,
            self.hue.is_some()
        );
    }

    /// Applies a thickness choice.
    ///
    /// Returns `false`, leaving the thickness unchanged, for non-positive explicit values.
    pub fn set_thickness(&mut self, choice: ThicknessChoice) -> bool {
        match choice.pixels() {
            Some(px) => {
                self.thickness = px;
                true
            }
            None => {
                debug!("Ignoring non-positive thickness {choice:?}");
                false
            }
        }
    }

    /// Advances the hue cursor by `delta` (mod 1.0) and recomputes the color.
    ///
    /// Does nothing unless rainbow cycling is enabled.
    pub fn advance_rainbow(&mut self, delta: f64) {
        if let Some(hue) = self.hue.as_mut() {
            *hue = (*hue + delta).rem_euclid(1.0);
            self.color = Color::from_hsb(*hue, 1.0, 1.0);
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn thickness(&self) -> u32 {
        self.thickness
    }

    pub fn rainbow_enabled(&self) -> bool {
        self.hue.is_some()
    }

    /// Current hue cursor, present only while rainbow cycling is enabled.
    pub fn hue(&self) -> Option<f64> {
        self.hue
    }

    /// Snapshot of the style handed to primitives.
    pub fn style(&self) -> StrokeStyle {
        StrokeStyle {
            color: self.color,
            thickness: self.thickness,
            rainbow: self.rainbow_enabled(),
        }
    }
}
