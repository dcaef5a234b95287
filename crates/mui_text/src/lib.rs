//! Multi-line text layout for mui
//!
//! This crate provides:
//! - A rasterizer abstraction over an external glyph-atlas engine
//! - Multi-line drawing with a configurable line-height policy
//! - Bounding-box aggregation across lines
//! - Batched drawing that shares one rasterizer session across calls
//! - Font configuration loaded from TOML

pub mod config;
pub mod engine;
pub mod lines;
pub mod metrics;
pub mod rasterizer;
pub mod resolver;
pub mod transform;

pub use config::{EngineConfig, FontConfig};
pub use engine::{BatchState, TextLayoutEngine};
pub use lines::{line_offset, split_lines, Lines};
pub use metrics::{aggregate_bounds, line_rect};
pub use mui_core::{Point, Rect, Size};
pub use rasterizer::{AtlasDescriptor, FontId, RasterContext, Rasterizer, TextExtent};
pub use resolver::{AssetResolver, DataPathResolver};
pub use transform::{MatrixStack, TransformStack};

use thiserror::Error;

/// Scales the nominal font size into the distance between baselines
pub const LINE_HEIGHT_MULTIPLIER: f32 = 0.9;

/// Log target used for every event emitted by this crate
pub(crate) const LOG_TARGET: &str = "mui_text";

/// Text layout errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TextError {
    #[error("can't {op}() without having been setup first")]
    NotInitialized { op: &'static str },

    #[error("don't call setup() more than once ({font})")]
    AlreadyInitialized { font: String },

    #[error("can't load font '{path}'")]
    FontLoadFailed { path: String },

    #[error("can't {op}() without calling begin_batch() first")]
    BatchNotActive { op: &'static str },

    #[error("begin_batch() called while a batch is already active")]
    BatchAlreadyActive,

    #[error("invalid font configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, TextError>;
