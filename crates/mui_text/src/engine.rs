//! Text layout engine
//!
//! Owns a raster context and one loaded font, and turns multi-line strings
//! into per-line draw and measure calls against it.
//!
//! Every draw translates the caller's transform to the text anchor and draws in
//! local coordinates. Line `i` sits `dpi_scale * size * line_height *
//! line_height_multiplier * i` below the first baseline.
//!
//! # Sessions
//!
//! Rasterizer draw calls must happen between `begin_draw` and `end_draw`.
//! Outside a batch the engine brackets each draw call with its own session.
//! Inside a batch (between [`TextLayoutEngine::begin_batch`] and
//! [`TextLayoutEngine::end_batch`]) all draws share the batch's session and the
//! engine never opens a nested one.
//!
//! # Errors
//!
//! Failures are logged under the `mui_text` target and returned. A failed
//! draw renders nothing; a failed measurement yields [`Rect::ZERO`].

use crate::config::{next_power_of_two, EngineConfig, FontConfig};
use crate::lines::{line_offset, split_lines};
use crate::metrics::{aggregate_bounds, line_rect};
use crate::rasterizer::{FontId, RasterContext, Rasterizer};
use crate::resolver::{AssetResolver, DataPathResolver};
use crate::transform::{with_translation, TransformStack};
use crate::{Result, TextError, LOG_TARGET};
use mui_core::Rect;
use smallvec::SmallVec;

/// Whether a batch currently owns the rasterizer session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BatchState {
    #[default]
    Idle,
    Batching,
}

/// Engine state after a successful setup
struct Loaded<C: RasterContext> {
    context: C,
    font: FontId,
    config: EngineConfig,
    kerning: bool,
    batch: BatchState,
}

impl<C: RasterContext> Loaded<C> {
    /// Run `f` inside a rasterizer session, opening one only when no batch is
    /// active
    fn in_session<R>(&mut self, f: impl FnOnce(&mut C, FontId) -> R) -> R {
        let owns_session = self.batch == BatchState::Idle;
        if owns_session {
            self.context.begin_draw();
        }
        let result = f(&mut self.context, self.font);
        if owns_session {
            self.context.end_draw();
        }
        result
    }

    fn line_offset(&self, index: usize, size: f32, line_height: f32) -> f32 {
        line_offset(
            index,
            size,
            line_height,
            self.config.line_height_multiplier,
            self.config.dpi_scale,
        )
    }
}

impl<C: RasterContext> Drop for Loaded<C> {
    fn drop(&mut self) {
        if self.batch == BatchState::Batching {
            tracing::warn!(target: LOG_TARGET, "engine dropped inside a batch, closing it");
            self.context.end_draw();
        }
    }
}

/// Log `err` for `op` and return it
fn fail<T>(op: &'static str, err: TextError) -> Result<T> {
    tracing::error!(target: LOG_TARGET, op, "{}", err);
    Err(err)
}

/// Multi-line text layout on top of a glyph-atlas rasterizer
pub struct TextLayoutEngine<R: Rasterizer, A: AssetResolver = DataPathResolver> {
    rasterizer: R,
    resolver: A,
    loaded: Option<Loaded<R::Context>>,
    line_height: f32,
    size: f32,
}

impl<R: Rasterizer> TextLayoutEngine<R> {
    /// Create an engine that resolves fonts under the default data directory
    pub fn new(rasterizer: R) -> Self {
        Self::with_resolver(rasterizer, DataPathResolver::default())
    }
}

impl<R: Rasterizer, A: AssetResolver> TextLayoutEngine<R, A> {
    /// Create an engine with a custom asset resolver
    pub fn with_resolver(rasterizer: R, resolver: A) -> Self {
        let defaults = EngineConfig::default();
        Self {
            rasterizer,
            resolver,
            loaded: None,
            line_height: defaults.line_height,
            size: defaults.size,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Setup
    // ─────────────────────────────────────────────────────────────────────

    /// Create the raster context and load `font_file`.
    ///
    /// `texture_dimension` is rounded up to the next power of two; a size with
    /// no power of two in `u32` range fails with [`TextError::Config`]. Kerning
    /// starts disabled and character spacing neutral. Only the first
    /// successful call takes effect; later calls fail with
    /// [`TextError::AlreadyInitialized`].
    pub fn setup(
        &mut self,
        font_file: &str,
        line_height: f32,
        texture_dimension: u32,
        mipmaps: bool,
        padding: u32,
        dpi_scale: f32,
    ) -> Result<()> {
        let mut config =
            match EngineConfig::new(line_height, texture_dimension, mipmaps, padding, dpi_scale) {
                Ok(config) => config,
                Err(err) => return fail("setup", err),
            };
        config.size = self.size;
        self.setup_with(&config, font_file)
    }

    /// [`setup`](Self::setup) from an explicit engine config
    pub fn setup_with(&mut self, config: &EngineConfig, font_file: &str) -> Result<()> {
        if self.loaded.is_some() {
            return fail(
                "setup",
                TextError::AlreadyInitialized {
                    font: font_file.to_string(),
                },
            );
        }
        if let Err(err) = config.validate() {
            return fail("setup", err);
        }

        let texture_dimension = match next_power_of_two(config.texture_dimension) {
            Ok(texture_dimension) => texture_dimension,
            Err(err) => return fail("setup", err),
        };
        let config = EngineConfig {
            texture_dimension,
            ..*config
        };
        let mut context = self.rasterizer.create(&config.atlas_descriptor());
        context.set_kerning(false);
        context.set_char_spacing(0.0);

        let path = self.resolver.resolve(font_file);
        let Some(font) = context.add_font(&path) else {
            // Dropping the context releases it
            return fail(
                "setup",
                TextError::FontLoadFailed {
                    path: path.display().to_string(),
                },
            );
        };

        tracing::info!(
            target: LOG_TARGET,
            "loaded font '{}' in texture ({} x {})",
            font_file,
            config.texture_dimension,
            config.texture_dimension
        );
        self.line_height = config.line_height;
        self.size = config.size;
        self.loaded = Some(Loaded {
            context,
            font,
            config,
            kerning: false,
            batch: BatchState::Idle,
        });
        Ok(())
    }

    /// Set up from a parsed font configuration file
    pub fn setup_from_config(&mut self, config: &FontConfig) -> Result<()> {
        let engine_config = match config.engine_config() {
            Ok(engine_config) => engine_config,
            Err(err) => return fail("setup", err),
        };
        self.setup_with(&engine_config, &config.font)
    }

    /// Set the default size and set up with mipmaps off, no padding and a
    /// dpi scale of 1
    pub fn load_font(
        &mut self,
        font_file: &str,
        size: f32,
        line_height: f32,
        texture_dimension: u32,
    ) -> Result<()> {
        self.size = size;
        self.setup(font_file, line_height, texture_dimension, false, 0, 1.0)
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.is_some()
    }

    fn loaded(&self, op: &'static str) -> Result<&Loaded<R::Context>> {
        match &self.loaded {
            Some(loaded) => Ok(loaded),
            None => fail(op, TextError::NotInitialized { op }),
        }
    }

    fn loaded_mut(&mut self, op: &'static str) -> Result<&mut Loaded<R::Context>> {
        match &mut self.loaded {
            Some(loaded) => Ok(loaded),
            None => fail(op, TextError::NotInitialized { op }),
        }
    }

    /// Loaded state, additionally requiring an active batch
    fn batching(&mut self, op: &'static str) -> Result<&mut Loaded<R::Context>> {
        let loaded = self.loaded_mut(op)?;
        if loaded.batch != BatchState::Batching {
            return fail(op, TextError::BatchNotActive { op });
        }
        Ok(loaded)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Drawing
    // ─────────────────────────────────────────────────────────────────────

    /// Draw `text` as a single run with its origin at `(x, y)`.
    ///
    /// Line breaks are not interpreted; use
    /// [`draw_multi_line`](Self::draw_multi_line) for those.
    pub fn draw<T>(
        &mut self,
        transform: &mut T,
        text: &str,
        size: f32,
        x: f32,
        y: f32,
    ) -> Result<()>
    where
        T: TransformStack + ?Sized,
    {
        let loaded = self.loaded_mut("draw")?;
        draw_run(loaded, transform, text, size, x, y);
        Ok(())
    }

    /// Draw each line of `text` below the previous one, anchored at `(x, y)`
    pub fn draw_multi_line<T>(
        &mut self,
        transform: &mut T,
        text: &str,
        size: f32,
        x: f32,
        y: f32,
    ) -> Result<()>
    where
        T: TransformStack + ?Sized,
    {
        let line_height = self.line_height;
        let loaded = self.loaded_mut("draw_multi_line")?;
        draw_lines(loaded, transform, text, size, line_height, x, y);
        Ok(())
    }

    /// Like [`draw`](Self::draw), into the session of the active batch
    pub fn draw_batch<T>(
        &mut self,
        transform: &mut T,
        text: &str,
        size: f32,
        x: f32,
        y: f32,
    ) -> Result<()>
    where
        T: TransformStack + ?Sized,
    {
        let loaded = self.batching("draw_batch")?;
        draw_run(loaded, transform, text, size, x, y);
        Ok(())
    }

    /// Like [`draw_multi_line`](Self::draw_multi_line), into the session of
    /// the active batch
    pub fn draw_multi_line_batch<T>(
        &mut self,
        transform: &mut T,
        text: &str,
        size: f32,
        x: f32,
        y: f32,
    ) -> Result<()>
    where
        T: TransformStack + ?Sized,
    {
        let line_height = self.line_height;
        let loaded = self.batching("draw_multi_line_batch")?;
        draw_lines(loaded, transform, text, size, line_height, x, y);
        Ok(())
    }

    /// [`draw`](Self::draw) at the default size
    pub fn draw_string<T>(&mut self, transform: &mut T, text: &str, x: f32, y: f32) -> Result<()>
    where
        T: TransformStack + ?Sized,
    {
        let size = self.size;
        self.draw(transform, text, size, x, y)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Batching
    // ─────────────────────────────────────────────────────────────────────

    /// Open a rasterizer session shared by every draw until
    /// [`end_batch`](Self::end_batch)
    pub fn begin_batch(&mut self) -> Result<()> {
        let loaded = self.loaded_mut("begin_batch")?;
        if loaded.batch == BatchState::Batching {
            return fail("begin_batch", TextError::BatchAlreadyActive);
        }
        loaded.context.begin_draw();
        loaded.batch = BatchState::Batching;
        Ok(())
    }

    /// Close the batch session, flushing everything drawn into it
    pub fn end_batch(&mut self) -> Result<()> {
        let loaded = self.batching("end_batch")?;
        loaded.context.end_draw();
        loaded.batch = BatchState::Idle;
        Ok(())
    }

    pub fn batch_state(&self) -> BatchState {
        self.loaded
            .as_ref()
            .map_or(BatchState::Idle, |loaded| loaded.batch)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Metrics
    // ─────────────────────────────────────────────────────────────────────

    /// Bounds of `text` drawn at `(x, y)`.
    ///
    /// Each line is measured at `size / dpi_scale`; its box sits above its
    /// baseline and the block's bounds are the union of the line boxes. The
    /// atlas padding is taken off the final width and height.
    pub fn try_bounding_box(&mut self, text: &str, size: f32, x: f32, y: f32) -> Result<Rect> {
        let line_height = self.line_height;
        let loaded = self.loaded_mut("bounding_box")?;
        let measure_size = size / loaded.config.dpi_scale;

        let rects: SmallVec<[Rect; 4]> = split_lines(text)
            .iter()
            .enumerate()
            .map(|(i, line)| {
                let offset = loaded.line_offset(i, size, line_height);
                let extent = loaded.context.measure_text(loaded.font, measure_size, line);
                line_rect(&extent, x, y, offset)
            })
            .collect();

        Ok(aggregate_bounds(&rects, loaded.config.padding as f32))
    }

    /// [`try_bounding_box`](Self::try_bounding_box), or [`Rect::ZERO`] on
    /// failure
    pub fn bounding_box(&mut self, text: &str, size: f32, x: f32, y: f32) -> Rect {
        self.try_bounding_box(text, size, x, y).unwrap_or_default()
    }

    /// Bounds of `text` at the default size
    pub fn string_bounding_box(&mut self, text: &str, x: f32, y: f32) -> Rect {
        let size = self.size;
        self.bounding_box(text, size, x, y)
    }

    pub fn string_width(&mut self, text: &str) -> f32 {
        self.string_bounding_box(text, 0.0, 0.0).width()
    }

    pub fn string_height(&mut self, text: &str) -> f32 {
        self.string_bounding_box(text, 0.0, 0.0).height()
    }

    /// Width of a single space at the default size
    pub fn space_size(&mut self) -> f32 {
        self.string_width(" ")
    }

    // ─────────────────────────────────────────────────────────────────────
    // Settings
    // ─────────────────────────────────────────────────────────────────────

    pub fn line_height(&self) -> f32 {
        self.line_height
    }

    /// Line height as a fraction of the font size; applies to later calls
    pub fn set_line_height(&mut self, line_height: f32) {
        self.line_height = line_height;
    }

    /// Default size used by the `*_string` calls
    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn set_size(&mut self, size: f32) {
        self.size = size;
    }

    pub fn set_kerning(&mut self, enabled: bool) -> Result<()> {
        let loaded = self.loaded_mut("set_kerning")?;
        loaded.context.set_kerning(enabled);
        loaded.kerning = enabled;
        Ok(())
    }

    /// Whether kerning is on; `false` before setup
    pub fn kerning(&self) -> bool {
        self.loaded("kerning").is_ok_and(|loaded| loaded.kerning)
    }

    /// Extra spacing between characters, in pixels
    pub fn set_char_spacing(&mut self, spacing: f32) -> Result<()> {
        let loaded = self.loaded_mut("set_char_spacing")?;
        loaded.context.set_char_spacing(spacing);
        Ok(())
    }

    /// Mipmap level-of-detail bias for the atlas texture
    pub fn set_lod_bias(&mut self, bias: f32) -> Result<()> {
        let loaded = self.loaded_mut("set_lod_bias")?;
        loaded.context.set_lod_bias(bias);
        Ok(())
    }

    /// Settings as of setup; `None` before setup
    pub fn config(&self) -> Option<&EngineConfig> {
        self.loaded.as_ref().map(|loaded| &loaded.config)
    }

    /// Atlas width and height; `None` before setup
    pub fn texture_dimension(&self) -> Option<u32> {
        self.config().map(|config| config.texture_dimension)
    }

    pub fn font(&self) -> Option<FontId> {
        self.loaded.as_ref().map(|loaded| loaded.font)
    }

    pub fn context(&self) -> Option<&R::Context> {
        self.loaded.as_ref().map(|loaded| &loaded.context)
    }

    pub fn rasterizer(&self) -> &R {
        &self.rasterizer
    }
}

fn draw_run<C, T>(
    loaded: &mut Loaded<C>,
    transform: &mut T,
    text: &str,
    size: f32,
    x: f32,
    y: f32,
) where
    C: RasterContext,
    T: TransformStack + ?Sized,
{
    with_translation(transform, x, y, || {
        loaded.in_session(|context, font| {
            context.draw_text(font, size, 0.0, 0.0, text);
        })
    });
}

fn draw_lines<C, T>(
    loaded: &mut Loaded<C>,
    transform: &mut T,
    text: &str,
    size: f32,
    line_height: f32,
    x: f32,
    y: f32,
) where
    C: RasterContext,
    T: TransformStack + ?Sized,
{
    let lines = split_lines(text);
    let offsets: SmallVec<[f32; 4]> = (0..lines.len())
        .map(|i| loaded.line_offset(i, size, line_height))
        .collect();
    with_translation(transform, x, y, || {
        loaded.in_session(|context, font| {
            for (line, offset) in lines.iter().zip(offsets) {
                context.draw_text(font, size, 0.0, offset, line);
            }
        })
    });
}
