//! RGB color type, HSB conversion and predefined color constants.

use std::fmt;
use std::str::FromStr;

/// An opaque RGB color with 8-bit components.
///
/// # Examples
///
/// ```
/// use paintcanvas::draw::Color;
/// let orange = Color::new(255, 128, 0);
/// let red = Color::from_hsb(0.0, 1.0, 1.0);
/// assert_eq!(red, Color::new(255, 0, 0));
/// assert_eq!(orange.to_hex(), "#ff8000");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red component (0 = no red, 255 = full red)
    pub r: u8,
    /// Green component
    pub g: u8,
    /// Blue component
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from hue, saturation and brightness, each in `0.0..=1.0`.
    ///
    /// The hue wraps, so only its fractional part matters. The hue circle is split into
    /// six sectors; each channel is scaled to 0-255 and rounded half-up.
    pub fn from_hsb(hue: f64, saturation: f64, brightness: f64) -> Self {
        if saturation == 0.0 {
            let v = to_channel(brightness);
            return Self::new(v, v, v);
        }

        let h = (hue - hue.floor()) * 6.0;
        let f = h - h.floor();
        let p = brightness * (1.0 - saturation);
        let q = brightness * (1.0 - saturation * f);
        let t = brightness * (1.0 - saturation * (1.0 - f));

        let (r, g, b) = match h as u32 {
            0 => (brightness, t, p),
            1 => (q, brightness, p),
            2 => (p, brightness, t),
            3 => (p, q, brightness),
            4 => (t, p, brightness),
            _ => (brightness, p, q),
        };

        Self::new(to_channel(r), to_channel(g), to_channel(b))
    }

    /// Converts to `(hue, saturation, brightness)`, each in `0.0..=1.0` (hue in `0.0..1.0`).
    pub fn to_hsb(self) -> (f64, f64, f64) {
        let (r, g, b) = (self.r as f64, self.g as f64, self.b as f64);
        let cmax = r.max(g).max(b);
        let cmin = r.min(g).min(b);

        let brightness = cmax / 255.0;
        let saturation = if cmax != 0.0 { (cmax - cmin) / cmax } else { 0.0 };
        if saturation == 0.0 {
            return (0.0, saturation, brightness);
        }

        let span = cmax - cmin;
        let redc = (cmax - r) / span;
        let greenc = (cmax - g) / span;
        let bluec = (cmax - b) / span;

        let mut hue = if r == cmax {
            bluec - greenc
        } else if g == cmax {
            2.0 + redc - bluec
        } else {
            4.0 + greenc - redc
        };
        hue /= 6.0;
        if hue < 0.0 {
            hue += 1.0;
        }

        (hue, saturation, brightness)
    }

    /// Components as Cairo source values (0.0 - 1.0).
    pub fn to_unit_rgb(self) -> (f64, f64, f64) {
        (
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        )
    }

    /// Lower-case `#rrggbb` representation.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

fn to_channel(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0 + 0.5) as u8
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Error returned when a `#rrggbb` string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid hex color '{0}', expected #rrggbb")]
pub struct ParseColorError(pub String);

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix('#')
            .filter(|d| d.len() == 6 && d.is_ascii())
            .ok_or_else(|| ParseColorError(s.to_string()))?;

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| ParseColorError(s.to_string()))
        };

        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

// ============================================================================
// Predefined Color Constants
// ============================================================================

pub const BLACK: Color = Color::new(0, 0, 0);
pub const WHITE: Color = Color::new(255, 255, 255);
pub const RED: Color = Color::new(255, 0, 0);
pub const GREEN: Color = Color::new(0, 255, 0);
pub const BLUE: Color = Color::new(0, 0, 255);
pub const YELLOW: Color = Color::new(255, 255, 0);

/// Resolves a color name (case-insensitive) or a `#rrggbb` string.
///
/// Recognises black, white, red, green, blue and yellow.
pub fn name_to_color(name: &str) -> Option<Color> {
    let name = name.trim();
    if name.starts_with('#') {
        return name.parse().ok();
    }
    match name.to_lowercase().as_str() {
        "black" => Some(BLACK),
        "white" => Some(WHITE),
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hsb_primaries_map_to_expected_rgb() {
        assert_eq!(Color::from_hsb(0.0, 1.0, 1.0), RED);
        assert_eq!(Color::from_hsb(0.5, 1.0, 1.0), Color::new(0, 255, 255));
        assert_eq!(Color::from_hsb(1.0, 1.0, 1.0), RED);
    }

    #[test]
    fn zero_saturation_is_grey() {
        assert_eq!(Color::from_hsb(0.7, 0.0, 0.5), Color::new(128, 128, 128));
        assert_eq!(Color::from_hsb(0.2, 0.0, 0.0), BLACK);
    }

    #[test]
    fn to_hsb_reports_hue_of_yellow() {
        let (h, s, b) = YELLOW.to_hsb();
        assert!((h - 1.0 / 6.0).abs() < 1e-9);
        assert_eq!(s, 1.0);
        assert_eq!(b, 1.0);
    }

    #[test]
    fn hsb_conversion_is_stable_for_palette_colors() {
        for color in [RED, GREEN, BLUE, YELLOW, BLACK, WHITE, Color::new(12, 200, 77)] {
            let (h, s, b) = color.to_hsb();
            assert_eq!(Color::from_hsb(h, s, b), color, "{color}");
        }
    }

    #[test]
    fn hex_parsing_accepts_only_rrggbb() {
        assert_eq!("#ff8000".parse::<Color>().unwrap(), Color::new(255, 128, 0));
        assert!("ff8000".parse::<Color>().is_err());
        assert!("#ff80".parse::<Color>().is_err());
        assert!("#gg0000".parse::<Color>().is_err());
    }

    #[test]
    fn names_resolve_case_insensitively() {
        assert_eq!(name_to_color("White"), Some(WHITE));
        assert_eq!(name_to_color(" YELLOW "), Some(YELLOW));
        assert_eq!(name_to_color("#000080"), Some(Color::new(0, 0, 128)));
        assert_eq!(name_to_color("mauve"), None);
    }
}
