//! Layout strategies
//!
//! A closed set of arrangements dispatched through [`Layout`]. Every strategy
//! places children relative to the container's top-left corner and returns the
//! extent the arranged children cover.

use crate::container::Container;
use mui_core::{Point, Size};

/// Gap between neighbouring children, in pixels
pub const DEFAULT_SPACING: f32 = 3.0;

/// Layout strategy for a container
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Layout {
    Row(RowLayout),
    Column(ColumnLayout),
    Grid(GridLayout),
}

impl Layout {
    /// Arrange the children of `container`, returning the occupied extent
    pub fn layout<C: Container + ?Sized>(&self, container: &mut C) -> Size {
        let extent = match self {
            Layout::Row(row) => row.layout(container),
            Layout::Column(column) => column.layout(container),
            Layout::Grid(grid) => grid.layout(container),
        };
        tracing::trace!(
            target: "mui_layout",
            strategy = ?self,
            children = container.child_count(),
            width = extent.width,
            height = extent.height,
            "layout pass"
        );
        extent
    }
}

impl Default for Layout {
    fn default() -> Self {
        Layout::Row(RowLayout::default())
    }
}

impl From<RowLayout> for Layout {
    fn from(row: RowLayout) -> Self {
        Layout::Row(row)
    }
}

impl From<ColumnLayout> for Layout {
    fn from(column: ColumnLayout) -> Self {
        Layout::Column(column)
    }
}

impl From<GridLayout> for Layout {
    fn from(grid: GridLayout) -> Self {
        Layout::Grid(grid)
    }
}

/// Places children left to right along y = 0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowLayout {
    pub spacing: f32,
}

impl RowLayout {
    pub fn new(spacing: f32) -> Self {
        Self { spacing }
    }

    pub fn layout<C: Container + ?Sized>(&self, container: &mut C) -> Size {
        let mut x = 0.0;
        let mut height = 0.0f32;
        for i in 0..container.child_count() {
            let size = container.child_size(i);
            container.set_child_origin(i, Point::new(x, 0.0));
            x += size.width + self.spacing;
            height = height.max(size.height);
        }
        // No trailing gap after the last child
        let width = if container.child_count() > 0 {
            x - self.spacing
        } else {
            0.0
        };
        Size::new(width, height)
    }
}

impl Default for RowLayout {
    fn default() -> Self {
        Self::new(DEFAULT_SPACING)
    }
}

/// Places children top to bottom along x = 0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnLayout {
    pub spacing: f32,
}

impl ColumnLayout {
    pub fn new(spacing: f32) -> Self {
        Self { spacing }
    }

    pub fn layout<C: Container + ?Sized>(&self, container: &mut C) -> Size {
        let mut y = 0.0;
        let mut width = 0.0f32;
        for i in 0..container.child_count() {
            let size = container.child_size(i);
            container.set_child_origin(i, Point::new(0.0, y));
            y += size.height + self.spacing;
            width = width.max(size.width);
        }
        let height = if container.child_count() > 0 {
            y - self.spacing
        } else {
            0.0
        };
        Size::new(width, height)
    }
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self::new(DEFAULT_SPACING)
    }
}

/// Fills rows of `columns` cells, left to right then top to bottom.
///
/// A column is as wide as its widest child and a row as tall as its tallest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub columns: usize,
    pub spacing: f32,
}

impl GridLayout {
    pub fn new(columns: usize, spacing: f32) -> Self {
        Self { columns, spacing }
    }

    pub fn layout<C: Container + ?Sized>(&self, container: &mut C) -> Size {
        let count = container.child_count();
        if count == 0 {
            return Size::ZERO;
        }
        let columns = self.columns.max(1);
        let rows = count.div_ceil(columns);

        let mut col_widths = vec![0.0f32; columns.min(count)];
        let mut row_heights = vec![0.0f32; rows];
        for i in 0..count {
            let size = container.child_size(i);
            let (row, col) = (i / columns, i % columns);
            col_widths[col] = col_widths[col].max(size.width);
            row_heights[row] = row_heights[row].max(size.height);
        }

        let col_x = offsets(&col_widths, self.spacing);
        let row_y = offsets(&row_heights, self.spacing);
        for i in 0..count {
            let (row, col) = (i / columns, i % columns);
            container.set_child_origin(i, Point::new(col_x[col], row_y[row]));
        }

        Size::new(span(&col_widths, self.spacing), span(&row_heights, self.spacing))
    }
}

impl Default for GridLayout {
    fn default() -> Self {
        Self::new(2, DEFAULT_SPACING)
    }
}

fn offsets(tracks: &[f32], spacing: f32) -> Vec<f32> {
    let mut at = 0.0;
    tracks
        .iter()
        .map(|track| {
            let start = at;
            at += track + spacing;
            start
        })
        .collect()
}

fn span(tracks: &[f32], spacing: f32) -> f32 {
    let gaps = tracks.len().saturating_sub(1) as f32;
    tracks.iter().sum::<f32>() + gaps * spacing
}
