//! Font and atlas configuration
//!
//! [`FontConfig`] is the on-disk form (TOML); [`EngineConfig`] is what the
//! engine keeps after setup, with the texture size already rounded.
//!
//! ```toml
//! font = "fonts/VeraMono.ttf"
//! line_height = 1.2
//! texture_dimension = 1024
//! padding = 1
//! dpi_scale = 2.0
//! ```

use crate::rasterizer::AtlasDescriptor;
use crate::{Result, TextError, LINE_HEIGHT_MULTIPLIER};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Font configuration file
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FontConfig {
    /// Font file, resolved through the engine's asset resolver
    pub font: String,
    /// Line height as a fraction of the font size
    #[serde(default = "default_line_height")]
    pub line_height: f32,
    /// Requested atlas size, rounded up to a power of two
    #[serde(default = "default_texture_dimension")]
    pub texture_dimension: u32,
    #[serde(default)]
    pub mipmaps: bool,
    /// Padding around each glyph in the atlas, in pixels
    #[serde(default)]
    pub padding: u32,
    #[serde(default = "default_dpi_scale")]
    pub dpi_scale: f32,
    /// Default font size for the `*_string` calls
    #[serde(default = "default_size")]
    pub size: f32,
    #[serde(default = "default_line_height_multiplier")]
    pub line_height_multiplier: f32,
}

fn default_line_height() -> f32 {
    1.0
}

fn default_texture_dimension() -> u32 {
    512
}

fn default_dpi_scale() -> f32 {
    1.0
}

fn default_size() -> f32 {
    12.0
}

fn default_line_height_multiplier() -> f32 {
    LINE_HEIGHT_MULTIPLIER
}

impl FontConfig {
    /// Config for `font` with every other field at its default
    pub fn new(font: impl Into<String>) -> Self {
        Self {
            font: font.into(),
            line_height: default_line_height(),
            texture_dimension: default_texture_dimension(),
            mipmaps: false,
            padding: 0,
            dpi_scale: default_dpi_scale(),
            size: default_size(),
            line_height_multiplier: default_line_height_multiplier(),
        }
    }

    /// Parse a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: FontConfig =
            toml::from_str(source).map_err(|e| TextError::Config(e.to_string()))?;
        config.engine_config()?;
        Ok(config)
    }

    /// Read and parse a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)
            .map_err(|e| TextError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&source)
    }

    /// Validated engine settings
    pub fn engine_config(&self) -> Result<EngineConfig> {
        let config = EngineConfig {
            texture_dimension: next_power_of_two(self.texture_dimension)?,
            mipmaps: self.mipmaps,
            padding: self.padding,
            dpi_scale: self.dpi_scale,
            line_height: self.line_height,
            size: self.size,
            line_height_multiplier: self.line_height_multiplier,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Settings the engine was set up with
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Atlas width and height, always a power of two
    pub texture_dimension: u32,
    pub mipmaps: bool,
    pub padding: u32,
    pub dpi_scale: f32,
    pub line_height: f32,
    pub size: f32,
    pub line_height_multiplier: f32,
}

impl EngineConfig {
    /// Fails when `texture_dimension` has no power of two that fits a `u32`
    pub fn new(
        line_height: f32,
        texture_dimension: u32,
        mipmaps: bool,
        padding: u32,
        dpi_scale: f32,
    ) -> Result<Self> {
        Ok(Self {
            texture_dimension: next_power_of_two(texture_dimension)?,
            mipmaps,
            padding,
            dpi_scale,
            line_height,
            size: default_size(),
            line_height_multiplier: LINE_HEIGHT_MULTIPLIER,
        })
    }

    /// Reject values the metrics math can't work with
    pub fn validate(&self) -> Result<()> {
        if !(self.dpi_scale.is_finite() && self.dpi_scale > 0.0) {
            return Err(TextError::Config(format!(
                "dpi_scale must be positive, got {}",
                self.dpi_scale
            )));
        }
        if !self.line_height.is_finite() || !self.line_height_multiplier.is_finite() {
            return Err(TextError::Config("line height must be finite".into()));
        }
        Ok(())
    }

    /// Square atlas for this configuration
    pub fn atlas_descriptor(&self) -> AtlasDescriptor {
        AtlasDescriptor {
            width: self.texture_dimension,
            height: self.texture_dimension,
            mipmaps: self.mipmaps,
            padding: self.padding,
            dpi_scale: self.dpi_scale,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            texture_dimension: default_texture_dimension(),
            mipmaps: false,
            padding: 0,
            dpi_scale: default_dpi_scale(),
            line_height: default_line_height(),
            size: default_size(),
            line_height_multiplier: LINE_HEIGHT_MULTIPLIER,
        }
    }
}

/// Smallest power of two `>= value`; zero rounds to one
pub fn next_power_of_two(value: u32) -> Result<u32> {
    value.max(1).checked_next_power_of_two().ok_or_else(|| {
        TextError::Config(format!("texture_dimension {} is too large", value))
    })
}
