//! Configuration enum types.

use crate::draw::{Color, WHITE, name_to_color};
use crate::input::{ColorChoice, ThicknessChoice};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color setting - either a color name or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// default_color = "red"
///
/// # Hex string
/// background = "#202030"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color (black, white, red, green, blue, yellow), a `#rrggbb` string,
    /// or `rainbow` for the stroke color
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Whether this spec names a concrete color.
    pub fn is_known_color(&self) -> bool {
        match self {
            ColorSpec::Name(name) => name_to_color(name).is_some(),
            ColorSpec::Rgb(_) => true,
        }
    }

    /// Converts the setting to a [`Color`].
    ///
    /// Unknown names (including `rainbow`) default to white with a warning.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => name_to_color(name).unwrap_or_else(|| {
                warn!("Unknown color '{}', using white", name);
                WHITE
            }),
            ColorSpec::Rgb([r, g, b]) => Color::new(*r, *g, *b),
        }
    }

    /// Converts the setting to a stroke color choice.
    ///
    /// `rainbow` enables hue cycling; unknown names fall back to black.
    pub fn to_choice(&self) -> ColorChoice {
        match self {
            ColorSpec::Name(name) => match name_to_color(name) {
                Some(color) => ColorChoice::Explicit(color),
                None => ColorChoice::parse(name),
            },
            ColorSpec::Rgb([r, g, b]) => ColorChoice::Explicit(Color::new(*r, *g, *b)),
        }
    }
}

/// Thickness setting - either a size name or a pixel width.
///
/// # Examples
/// ```toml
/// default_thickness = "thick"
/// default_thickness = 8
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
#[serde(untagged)]
pub enum ThicknessSpec {
    /// thin (1), regular (3) or thick (5)
    Name(String),
    /// Width in pixels; must be positive
    Pixels(i32),
}

impl ThicknessSpec {
    /// Converts the setting to a thickness choice. Unknown names fall back to regular.
    pub fn to_choice(&self) -> ThicknessChoice {
        match self {
            ThicknessSpec::Name(name) => ThicknessChoice::parse(name),
            ThicknessSpec::Pixels(px) => ThicknessChoice::Pixels(*px),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::RED;

    #[test]
    fn rgb_spec_converts_directly() {
        let spec = ColorSpec::Rgb([255, 128, 0]);
        assert_eq!(spec.to_color(), Color::new(255, 128, 0));
        assert_eq!(
            spec.to_choice(),
            ColorChoice::Explicit(Color::new(255, 128, 0))
        );
    }

    #[test]
    fn rainbow_is_a_stroke_choice_only() {
        let spec = ColorSpec::Name("Rainbow".to_string());
        assert_eq!(spec.to_choice(), ColorChoice::Rainbow);
        assert!(!spec.is_known_color());
        assert_eq!(spec.to_color(), WHITE);
    }

    #[test]
    fn named_spec_resolves_case_insensitively() {
        let spec = ColorSpec::Name("RED".to_string());
        assert_eq!(spec.to_color(), RED);
        assert_eq!(spec.to_choice(), ColorChoice::Explicit(RED));
    }

    #[test]
    fn thickness_spec_maps_names_and_pixels() {
        assert_eq!(
            ThicknessSpec::Name("thin".to_string()).to_choice(),
            ThicknessChoice::Thin
        );
        assert_eq!(
            ThicknessSpec::Name("huge".to_string()).to_choice(),
            ThicknessChoice::Regular
        );
        assert_eq!(
            ThicknessSpec::Pixels(7).to_choice(),
            ThicknessChoice::Pixels(7)
        );
    }
}
