//! Fixed font configuration for text stamps.

/// Font used by [`RasterSurface::draw_text`](super::RasterSurface).
///
/// The canvas renders every text stamp with the same descriptor; it is chosen once
/// from the `[text]` config section when the surface is created.
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescriptor {
    /// Font family name (e.g., "Sans", "Serif", "DejaVu Sans Mono")
    pub family: String,
    /// Font weight ("normal", "bold", "light" or numeric 100-900)
    pub weight: String,
    /// Font style ("normal", "italic", "oblique")
    pub style: String,
    /// Font size in points
    pub size: f64,
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self {
            family: "Sans".to_string(),
            weight: "normal".to_string(),
            style: "normal".to_string(),
            size: 16.0,
        }
    }
}

impl FontDescriptor {
    pub fn new(
        family: impl Into<String>,
        weight: impl Into<String>,
        style: impl Into<String>,
        size: f64,
    ) -> Self {
        Self {
            family: family.into(),
            weight: weight.into(),
            style: style.into(),
            size,
        }
    }

    /// Pango description string, e.g. `"Sans Bold 16"` or `"Serif Italic 12"`.
    ///
    /// Normal style and weight are left out, matching Pango's own defaults.
    pub fn to_pango_string(&self) -> String {
        let mut parts = vec![self.family.clone()];
        for attribute in [&self.style, &self.weight] {
            if !attribute.eq_ignore_ascii_case("normal") {
                parts.push(title_case(attribute));
            }
        }
        parts.push(format!("{}", self.size.round() as i32));
        parts.join(" ")
    }

    pub(crate) fn to_pango(&self) -> pango::FontDescription {
        pango::FontDescription::from_string(&self.to_pango_string())
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    chars
        .next()
        .map(|first| first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_descriptor_omits_normal_attributes() {
        assert_eq!(FontDescriptor::default().to_pango_string(), "Sans 16");
    }

    #[test]
    fn descriptor_includes_style_then_weight() {
        let font = FontDescriptor::new("Serif", "BOLD", "italic", 11.6);
        assert_eq!(font.to_pango_string(), "Serif Italic Bold 12");
    }
}
