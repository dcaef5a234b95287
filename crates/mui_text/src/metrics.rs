//! Bounding-box aggregation for multi-line text
//!
//! Each line is measured on its own and placed so that its box sits above its
//! baseline. The block's bounds are the union of all line boxes, tightened by
//! the atlas glyph padding.

use crate::rasterizer::TextExtent;
use mui_core::Rect;

/// Box of one measured line anchored at `(x, y)`, `offset` below the first
/// baseline
pub fn line_rect(extent: &TextExtent, x: f32, y: f32, offset: f32) -> Rect {
    let width = extent.width();
    let height = extent.height();
    Rect::new(
        x + extent.min_x,
        y + extent.min_y + offset - height,
        width,
        height,
    )
}

/// Union of `lines`, minus `padding` on width and height.
///
/// The padding is taken off whenever it is positive. A box narrower than the
/// padding, such as the zero-size box of an empty string, would otherwise end
/// up with a negative size, so width and height are clamped at zero.
pub fn aggregate_bounds(lines: &[Rect], padding: f32) -> Rect {
    let Some((first, rest)) = lines.split_first() else {
        return Rect::ZERO;
    };
    let mut total = rest.iter().fold(*first, |acc, rect| acc.union(rect));

    if padding > 0.0 {
        total.size.width = (total.size.width - padding).max(0.0);
        total.size.height = (total.size.height - padding).max(0.0);
    }
    total
}
