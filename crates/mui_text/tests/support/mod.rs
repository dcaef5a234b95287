//! Recording rasterizer and transform stack for engine tests

#![allow(dead_code)]

use mui_text::{AtlasDescriptor, FontId, RasterContext, Rasterizer, TextExtent, TransformStack};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Horizontal advance of every glyph, as a fraction of the size
pub const GLYPH_ADVANCE: f32 = 0.5;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Create(AtlasDescriptor),
    AddFont(PathBuf),
    Begin,
    End,
    Draw {
        size: f32,
        x: f32,
        y: f32,
        text: String,
    },
    Measure {
        size: f32,
        text: String,
    },
    LodBias(f32),
    Kerning(bool),
    CharSpacing(f32),
    Push,
    Translate(f32, f32),
    Pop,
    Destroy,
}

#[derive(Debug, Clone, Default)]
pub struct CallLog(Rc<RefCell<Vec<Call>>>);

impl CallLog {
    pub fn push(&self, call: Call) {
        self.0.borrow_mut().push(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.0.borrow().clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    pub fn draws(&self) -> Vec<(f32, f32, String)> {
        self.0
            .borrow()
            .iter()
            .filter_map(|call| match call {
                Call::Draw { x, y, text, .. } => Some((*x, *y, text.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, wanted: &Call) -> usize {
        self.0.borrow().iter().filter(|call| *call == wanted).count()
    }
}

/// Rasterizer whose fonts load unless the path contains "missing".
///
/// Measuring a line of `n` characters at size `s` yields the extent
/// `(0, 0, n * s * GLYPH_ADVANCE, s)`; empty lines measure as all zeros.
#[derive(Debug, Clone, Default)]
pub struct MockRasterizer {
    pub log: CallLog,
}

impl MockRasterizer {
    pub fn new() -> (Self, CallLog) {
        let log = CallLog::default();
        (Self { log: log.clone() }, log)
    }
}

impl Rasterizer for MockRasterizer {
    type Context = MockContext;

    fn create(&mut self, desc: &AtlasDescriptor) -> MockContext {
        self.log.push(Call::Create(*desc));
        MockContext {
            log: self.log.clone(),
            kerning: true,
            char_spacing: f32::NAN,
        }
    }
}

#[derive(Debug)]
pub struct MockContext {
    log: CallLog,
    pub kerning: bool,
    pub char_spacing: f32,
}

impl RasterContext for MockContext {
    fn add_font(&mut self, path: &Path) -> Option<FontId> {
        self.log.push(Call::AddFont(path.to_path_buf()));
        if path.to_string_lossy().contains("missing") {
            None
        } else {
            FontId::new(1)
        }
    }

    fn begin_draw(&mut self) {
        self.log.push(Call::Begin);
    }

    fn end_draw(&mut self) {
        self.log.push(Call::End);
    }

    fn draw_text(&mut self, _font: FontId, size: f32, x: f32, y: f32, text: &str) -> f32 {
        self.log.push(Call::Draw {
            size,
            x,
            y,
            text: text.to_string(),
        });
        text.chars().count() as f32 * size * GLYPH_ADVANCE
    }

    fn measure_text(&mut self, _font: FontId, size: f32, text: &str) -> TextExtent {
        self.log.push(Call::Measure {
            size,
            text: text.to_string(),
        });
        if text.is_empty() {
            return TextExtent::default();
        }
        TextExtent::new(0.0, 0.0, text.chars().count() as f32 * size * GLYPH_ADVANCE, size)
    }

    fn set_lod_bias(&mut self, bias: f32) {
        self.log.push(Call::LodBias(bias));
    }

    fn set_kerning(&mut self, enabled: bool) {
        self.kerning = enabled;
        self.log.push(Call::Kerning(enabled));
    }

    fn set_char_spacing(&mut self, spacing: f32) {
        self.char_spacing = spacing;
        self.log.push(Call::CharSpacing(spacing));
    }
}

impl Drop for MockContext {
    fn drop(&mut self) {
        self.log.push(Call::Destroy);
    }
}

/// Transform stack that records into the rasterizer's log
#[derive(Debug, Clone)]
pub struct RecordingStack {
    log: CallLog,
}

impl RecordingStack {
    pub fn new(log: &CallLog) -> Self {
        Self { log: log.clone() }
    }
}

impl TransformStack for RecordingStack {
    fn push(&mut self) {
        self.log.push(Call::Push);
    }

    fn translate(&mut self, x: f32, y: f32) {
        self.log.push(Call::Translate(x, y));
    }

    fn pop(&mut self) {
        self.log.push(Call::Pop);
    }
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
