//! Configuration type definitions.

use super::enums::{ColorSpec, ThicknessSpec};
use crate::draw::FontDescriptor;
use crate::input::stroke::DEFAULT_RAINBOW_STEP;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Canvas buffer settings.
///
/// The buffer is allocated once at startup with these dimensions.
#[derive(Debug, Serialize, Deserialize, Clone, JsonSchema)]
pub struct CanvasConfig {
    /// Buffer width in pixels (valid range: 1 - 8192)
    #[serde(default = "default_width")]
    pub width: u32,

    /// Buffer height in pixels (valid range: 1 - 8192)
    #[serde(default = "default_height")]
    pub height: u32,

    /// Color used by clear and the eraser - a color name, `#rrggbb`, or `[r, g, b]`
    #[serde(default = "default_background")]
    pub background: ColorSpec,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            background: default_background(),
        }
    }
}

/// Drawing-related settings.
///
/// Controls the stroke style in effect when the canvas is created. Hosts can
/// change these at runtime through the controller.
#[derive(Debug, Serialize, Deserialize, Clone, JsonSchema)]
pub struct DrawingConfig {
    /// Default stroke color - a color name, `rainbow`, `#rrggbb`, or an RGB array
    /// like `[255, 0, 0]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Default stroke thickness - thin, regular, thick, or a positive pixel width
    #[serde(default = "default_thickness")]
    pub default_thickness: ThicknessSpec,

    /// Hue advance per rainbow segment (valid range: exclusive 0.0 - 1.0)
    #[serde(default = "default_rainbow_step")]
    pub rainbow_step: f64,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_thickness: default_thickness(),
            rainbow_step: default_rainbow_step(),
        }
    }
}

/// Text insertion settings.
#[derive(Debug, Serialize, Deserialize, Clone, JsonSchema)]
pub struct TextConfig {
    /// Font family name for text rendering (e.g., "Sans", "Serif", "Monospace")
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Font weight (e.g., "normal", "bold", "light") or a numeric value (100-900)
    #[serde(default = "default_font_weight")]
    pub font_weight: String,

    /// Font style ("normal", "italic", "oblique")
    #[serde(default = "default_font_style")]
    pub font_style: String,

    /// Font size in points (valid range: 6.0 - 144.0)
    #[serde(default = "default_font_size")]
    pub font_size: f64,
}

impl TextConfig {
    /// Font handed to the surface for text insertion.
    pub fn font_descriptor(&self) -> FontDescriptor {
        FontDescriptor::new(
            self.font_family.clone(),
            self.font_weight.clone(),
            self.font_style.clone(),
            self.font_size,
        )
    }
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            font_family: default_font_family(),
            font_weight: default_font_weight(),
            font_style: default_font_style(),
            font_size: default_font_size(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_width() -> u32 {
    800
}

fn default_height() -> u32 {
    600
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_thickness() -> ThicknessSpec {
    ThicknessSpec::Name("regular".to_string())
}

fn default_rainbow_step() -> f64 {
    DEFAULT_RAINBOW_STEP
}

fn default_font_family() -> String {
    "Sans".to_string()
}

fn default_font_weight() -> String {
    "normal".to_string()
}

fn default_font_style() -> String {
    "normal".to_string()
}

fn default_font_size() -> f64 {
    16.0
}
