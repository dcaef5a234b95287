//! Line splitting and per-line vertical placement

use smallvec::SmallVec;

/// Lines of a text block, borrowed from the source string
pub type Lines<'a> = SmallVec<[&'a str; 4]>;

/// Split `text` on `\n`, keeping empty lines.
///
/// A trailing line break produces a final empty line, and a `\r` preceding a
/// `\n` is dropped. An empty string is a single empty line.
pub fn split_lines(text: &str) -> Lines<'_> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

/// Vertical offset of line `index` below the first line's baseline
pub fn line_offset(
    index: usize,
    size: f32,
    line_height: f32,
    multiplier: f32,
    dpi_scale: f32,
) -> f32 {
    dpi_scale * size * line_height * multiplier * index as f32
}
