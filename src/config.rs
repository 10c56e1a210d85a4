//! Meme configuration module.
//!
//! Handles loading, validating, and merging `memeframe.toml` files. A user
//! file only needs the keys it wants to change; everything else falls back
//! to the stock defaults.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [canvas]
//! width = 400              # Canvas width in pixels (also the caption width budget)
//! height = 400             # Canvas height in pixels
//! background = "#000000"   # Border colour around non-matching aspect ratios
//!
//! [font]
//! family = "Impact"        # CSS font-family written into the SVG
//! size = 40.0              # Font size in pixels
//! advance_em = 0.55        # Average glyph advance, in em
//! ascent_em = 0.8          # Ascent, in em
//! descent_em = 0.2         # Descent, in em
//!
//! [caption]
//! fill = "#ffffff"         # Text fill colour
//! stroke = "#000000"       # Text outline colour
//! stroke_width = 2.0       # Outline width in pixels
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::geometry::Dimensions;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Meme configuration loaded from `memeframe.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MemeConfig {
    /// Output canvas size and border colour.
    pub canvas: CanvasConfig,
    /// Font used for measuring and drawing captions.
    pub font: FontConfig,
    /// Caption colours and outline.
    pub caption: CaptionConfig,
}

impl MemeConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(ConfigError::Validation(
                "canvas.width and canvas.height must be non-zero".into(),
            ));
        }
        if !(self.font.size.is_finite() && self.font.size > 0.0) {
            return Err(ConfigError::Validation("font.size must be positive".into()));
        }
        for (name, value) in [
            ("font.advance_em", self.font.advance_em),
            ("font.ascent_em", self.font.ascent_em),
            ("font.descent_em", self.font.descent_em),
            ("caption.stroke_width", self.caption.stroke_width),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Validation(format!(
                    "{name} must be a non-negative number"
                )));
            }
        }
        if self.font.family.trim().is_empty() {
            return Err(ConfigError::Validation(
                "font.family must not be empty".into(),
            ));
        }
        for (name, value) in [
            ("canvas.background", &self.canvas.background),
            ("caption.fill", &self.caption.fill),
            ("caption.stroke", &self.caption.stroke),
        ] {
            parse_hex_color(value)
                .map_err(|_| ConfigError::Validation(format!("{name} must be #rrggbb")))?;
        }
        Ok(())
    }
}

/// Canvas settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    /// Fill behind the image, visible as borders when aspect ratios differ.
    pub background: String,
}

impl CanvasConfig {
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::from((self.width, self.height))
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 400,
            height: 400,
            background: "#000000".to_string(),
        }
    }
}

/// Font settings. There is no font loading: the em ratios stand in for the
/// real glyph metrics of `family`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FontConfig {
    pub family: String,
    pub size: f64,
    pub advance_em: f64,
    pub ascent_em: f64,
    pub descent_em: f64,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: "Impact".to_string(),
            size: 40.0,
            advance_em: 0.55,
            ascent_em: 0.8,
            descent_em: 0.2,
        }
    }
}

/// Caption paint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CaptionConfig {
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f64,
}

impl Default for CaptionConfig {
    fn default() -> Self {
        Self {
            fill: "#ffffff".to_string(),
            stroke: "#000000".to_string(),
            stroke_width: 2.0,
        }
    }
}

/// Parse `#rrggbb` into RGB bytes.
pub fn parse_hex_color(value: &str) -> Result<[u8; 3], ConfigError> {
    let invalid = || ConfigError::Validation(format!("invalid colour {value:?}"));
    let hex = value.strip_prefix('#').ok_or_else(invalid)?;
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(invalid());
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
    Ok([channel(0)?, channel(2)?, channel(4)?])
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer that user overrides are merged on top of.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(MemeConfig::default())
        .map_err(|e| ConfigError::Validation(format!("default config must serialize: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Merge an optional overlay onto the stock defaults, then deserialize and
/// validate.
pub fn resolve_config(overlay: Option<toml::Value>) -> Result<MemeConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: MemeConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from an optional TOML file.
///
/// `None` yields the validated stock defaults. A path that does not exist is
/// an error: the user asked for that file explicitly.
pub fn load_config(path: Option<&Path>) -> Result<MemeConfig, ConfigError> {
    let overlay = match path {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            Some(toml::from_str::<toml::Value>(&content)?)
        }
        None => None,
    };
    let config = resolve_config(overlay)?;
    debug!(
        "config: canvas {}x{}, font {} {}px",
        config.canvas.width,
        config.canvas.height,
        config.font.family,
        config.font.size
    );
    Ok(config)
}

/// Returns a fully-commented stock `memeframe.toml` with all keys and
/// explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Memeframe Configuration
# =======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Canvas
# ---------------------------------------------------------------------------
[canvas]
# Output size in pixels. The width is also the caption width budget:
# a line wraps once it would reach 95% of it.
width = 400
height = 400

# Fill behind the image, visible as borders when the image aspect ratio
# differs from the canvas.
background = "#000000"

# ---------------------------------------------------------------------------
# Font
# ---------------------------------------------------------------------------
[font]
# CSS font-family written into the SVG output.
family = "Impact"

# Font size in pixels.
size = 40.0

# Metrics as fractions of the font size. Captions are measured with these
# instead of loading the font itself.
advance_em = 0.55
ascent_em = 0.8
descent_em = 0.2

# ---------------------------------------------------------------------------
# Caption paint
# ---------------------------------------------------------------------------
[caption]
fill = "#ffffff"
stroke = "#000000"
stroke_width = 2.0
"##
}
