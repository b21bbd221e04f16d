//! Configuration file support for paintcanvas.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/paintcanvas/config.toml`. Settings include the canvas size and
//! background, the initial stroke style, and the font used for text insertion.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::{ColorSpec, ThicknessSpec};
pub use types::{CanvasConfig, DrawingConfig, TextConfig};

use crate::input::stroke::DEFAULT_RAINBOW_STEP;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Largest accepted canvas dimension in pixels.
const MAX_DIMENSION: u32 = 8192;

/// Largest accepted `default_thickness` in pixels.
const MAX_THICKNESS: i32 = 200;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// width = 1024
/// height = 768
/// background = "white"
///
/// [drawing]
/// default_color = "rainbow"
/// default_thickness = "thick"
/// rainbow_step = 0.02
///
/// [text]
/// font_family = "Serif"
/// font_style = "italic"
/// font_size = 20.0
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Buffer size and background color
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Initial stroke color, thickness and rainbow speed
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Font used by text insertion
    #[serde(default)]
    pub text: TextConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value (or reset to their
    /// default) and a warning is logged.
    ///
    /// Validated ranges:
    /// - `canvas.width`, `canvas.height`: 1 - 8192
    /// - `drawing.default_thickness`: 1 - 200 pixels
    /// - `drawing.rainbow_step`: exclusive 0.0 - 1.0
    /// - `text.font_size`: 6.0 - 144.0
    pub fn validate_and_clamp(&mut self) {
        for (name, value) in [
            ("width", &mut self.canvas.width),
            ("height", &mut self.canvas.height),
        ] {
            if !(1..=MAX_DIMENSION).contains(&*value) {
                warn!("Invalid canvas {name} {value}, clamping to 1-{MAX_DIMENSION} range");
                *value = (*value).clamp(1, MAX_DIMENSION);
            }
        }

        if !self.canvas.background.is_known_color() {
            warn!(
                "Invalid canvas background {:?}, falling back to 'white'",
                self.canvas.background
            );
            self.canvas.background = ColorSpec::Name("white".to_string());
        }

        // Thickness: 1 - 200 pixels
        match self.drawing.default_thickness {
            ThicknessSpec::Pixels(px @ ..=0) => {
                warn!("Invalid default_thickness {px}, falling back to 'regular'");
                self.drawing.default_thickness = ThicknessSpec::Name("regular".to_string());
            }
            ThicknessSpec::Pixels(px) if px > MAX_THICKNESS => {
                warn!("Invalid default_thickness {px}, clamping to 1-{MAX_THICKNESS} range");
                self.drawing.default_thickness = ThicknessSpec::Pixels(MAX_THICKNESS);
            }
            _ => {}
        }

        // Rainbow step: (0.0, 1.0)
        let step = self.drawing.rainbow_step;
        if !(step > 0.0 && step < 1.0) {
            warn!("Invalid rainbow_step {step}, falling back to {DEFAULT_RAINBOW_STEP}");
            self.drawing.rainbow_step = DEFAULT_RAINBOW_STEP;
        }

        // Font size: 6.0 - 144.0
        if !(6.0..=144.0).contains(&self.text.font_size) {
            warn!(
                "Invalid font_size {:.1}, clamping to 6.0-144.0 range",
                self.text.font_size
            );
            self.text.font_size = if self.text.font_size.is_nan() {
                16.0
            } else {
                self.text.font_size.clamp(6.0, 144.0)
            };
        }

        // Validate font weight is reasonable
        let valid_weight = matches!(
            self.text.font_weight.to_lowercase().as_str(),
            "normal" | "bold" | "light" | "ultralight" | "heavy" | "ultrabold"
        ) || self
            .text
            .font_weight
            .parse::<u32>()
            .is_ok_and(|w| (100..=900).contains(&w));

        if !valid_weight {
            warn!(
                "Invalid font_weight '{}', falling back to 'normal'",
                self.text.font_weight
            );
            self.text.font_weight = "normal".to_string();
        }

        // Validate font style
        if !matches!(
            self.text.font_style.to_lowercase().as_str(),
            "normal" | "italic" | "oblique"
        ) {
            warn!(
                "Invalid font_style '{}', falling back to 'normal'",
                self.text.font_style
            );
            self.text.font_style = "normal".to_string();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/paintcanvas/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("paintcanvas");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default path, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates the configuration stored at `path`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Saves the current configuration to the default path.
    ///
    /// Creates the parent directory if it doesn't exist.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory cannot be created
    /// - The config cannot be serialized to TOML
    /// - The file cannot be written
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path()?)
    }

    /// Serializes the configuration as pretty TOML into `path`.
    ///
    /// # Errors
    /// Returns an error if the directory or file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, config_str)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{Color, WHITE};
    use crate::input::{ColorChoice, ThicknessChoice};
    use tempfile::TempDir;

    #[test]
    fn empty_file_yields_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.canvas.width, 800);
        assert_eq!(config.canvas.height, 600);
        assert_eq!(config.canvas.background.to_color(), WHITE);
        assert_eq!(config.drawing.default_thickness.to_choice(), ThicknessChoice::Regular);
        assert_eq!(config.drawing.rainbow_step, DEFAULT_RAINBOW_STEP);
        assert_eq!(config.text.font_descriptor().to_pango_string(), "Sans 16");
    }

    #[test]
    fn parses_mixed_value_forms() {
        let config: Config = toml::from_str(
            r#"
            [canvas]
            background = [10, 20, 30]

            [drawing]
            default_color = "rainbow"
            default_thickness = 9
            "#,
        )
        .unwrap();

        assert_eq!(config.canvas.background.to_color(), Color::new(10, 20, 30));
        assert_eq!(config.drawing.default_color.to_choice(), ColorChoice::Rainbow);
        assert_eq!(
            config.drawing.default_thickness.to_choice(),
            ThicknessChoice::Pixels(9)
        );
    }

    #[test]
    fn validation_clamps_out_of_range_values() {
        let mut config: Config = toml::from_str(
            r#"
            [canvas]
            width = 0
            height = 100000
            background = "rainbow"

            [drawing]
            default_thickness = -4
            rainbow_step = 1.5

            [text]
            font_size = 500.0
            font_weight = "chunky"
            font_style = "slanted"
            "#,
        )
        .unwrap();
        config.validate_and_clamp();

        assert_eq!(config.canvas.width, 1);
        assert_eq!(config.canvas.height, MAX_DIMENSION);
        assert_eq!(config.canvas.background, ColorSpec::Name("white".to_string()));
        assert_eq!(
            config.drawing.default_thickness,
            ThicknessSpec::Name("regular".to_string())
        );
        assert_eq!(config.drawing.rainbow_step, DEFAULT_RAINBOW_STEP);
        assert_eq!(config.text.font_size, 144.0);
        assert_eq!(config.text.font_weight, "normal");
        assert_eq!(config.text.font_style, "normal");
    }

    #[test]
    fn oversized_thickness_is_clamped() {
        let mut config: Config =
            toml::from_str("[drawing]\ndefault_thickness = 2147483647\n").unwrap();
        config.validate_and_clamp();
        assert_eq!(
            config.drawing.default_thickness,
            ThicknessSpec::Pixels(MAX_THICKNESS)
        );
    }

    #[test]
    fn numeric_font_weight_is_accepted() {
        let mut config = Config::default();
        config.text.font_weight = "700".to_string();
        config.validate_and_clamp();
        assert_eq!(config.text.font_weight, "700");
    }

    #[test]
    fn save_then_load_preserves_settings() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.canvas.width = 320;
        config.drawing.default_color = ColorSpec::Rgb([1, 2, 3]);
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.canvas.width, 320);
        assert_eq!(loaded.drawing.default_color, ColorSpec::Rgb([1, 2, 3]));
    }

    #[test]
    fn invalid_toml_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[canvas\nwidth = ").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config"));
    }

    #[test]
    fn schema_lists_top_level_sections() {
        let schema = serde_json::to_value(Config::json_schema()).unwrap();
        let properties = &schema["properties"];
        for section in ["canvas", "drawing", "text"] {
            assert!(properties.get(section).is_some(), "missing {section}");
        }
    }
}
