//! mui Core
//!
//! Shared primitives for the mui toolkit crates:
//!
//! - **Geometry**: `Point`, `Size` and `Rect` in logical pixels, with the
//!   rectangle union used to aggregate multi-line text bounds.

pub mod geometry;

pub use geometry::{Point, Rect, Size};
