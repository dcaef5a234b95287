//! Glyph-atlas rasterizer abstraction
//!
//! The rasterizer is an external engine that packs glyphs into a texture,
//! measures single-line runs and renders them. The layout engine only ever
//! hands it one line at a time; line breaks never reach these calls.
//!
//! A [`Rasterizer`] creates contexts. Dropping a [`RasterContext`] destroys it.

use std::num::NonZeroU32;
use std::path::Path;

/// Handle of a font loaded into a raster context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontId(NonZeroU32);

impl FontId {
    /// Wrap a raw rasterizer handle. Zero is the rasterizer's failure value.
    pub fn new(raw: u32) -> Option<Self> {
        NonZeroU32::new(raw).map(Self)
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }
}

/// Parameters for creating a raster context
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtlasDescriptor {
    /// Texture width in pixels
    pub width: u32,
    /// Texture height in pixels
    pub height: u32,
    /// Generate mipmaps for the atlas texture
    pub mipmaps: bool,
    /// Padding around each glyph in the atlas, in pixels
    pub padding: u32,
    /// Display density scale
    pub dpi_scale: f32,
}

/// Extent of a single line relative to its pen origin
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextExtent {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl TextExtent {
    pub const fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    pub fn width(&self) -> f32 {
        (self.max_x - self.min_x).abs()
    }

    pub fn height(&self) -> f32 {
        (self.min_y - self.max_y).abs()
    }
}

/// Factory for raster contexts
pub trait Rasterizer {
    type Context: RasterContext;

    /// Create a context with a square or rectangular glyph atlas
    fn create(&mut self, desc: &AtlasDescriptor) -> Self::Context;
}

/// A live rasterizer context with its glyph atlas
pub trait RasterContext {
    /// Load a font file. `None` means the rasterizer rejected it.
    fn add_font(&mut self, path: &Path) -> Option<FontId>;

    /// Open a drawing session
    fn begin_draw(&mut self);

    /// Close the drawing session and flush queued glyphs
    fn end_draw(&mut self);

    /// Queue one line of text at `(x, y)`, returning the horizontal advance
    fn draw_text(&mut self, font: FontId, size: f32, x: f32, y: f32, text: &str) -> f32;

    /// Measure one line of text without rendering it
    fn measure_text(&mut self, font: FontId, size: f32, text: &str) -> TextExtent;

    /// Mipmap level-of-detail bias for the atlas texture
    fn set_lod_bias(&mut self, bias: f32);

    fn set_kerning(&mut self, enabled: bool);

    /// Extra horizontal spacing between characters, in pixels
    fn set_char_spacing(&mut self, spacing: f32);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_id_rejects_zero() {
        assert_eq!(FontId::new(0), None);
        assert_eq!(FontId::new(7).map(FontId::get), Some(7));
    }

    #[test]
    fn test_extent_dimensions_are_absolute() {
        let extent = TextExtent::new(2.0, 4.0, 12.0, -6.0);
        assert_eq!(extent.width(), 10.0);
        assert_eq!(extent.height(), 10.0);
    }
}
