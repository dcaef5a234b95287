//! The view of a container that layout strategies operate on

use mui_core::{Point, Rect, Size};

/// Children of a widget container, as seen by a [`Layout`](crate::Layout).
///
/// Indices are stable for the duration of a layout pass.
pub trait Container {
    /// Number of children to arrange
    fn child_count(&self) -> usize;

    /// Current size of the child at `index`
    fn child_size(&self, index: usize) -> Size;

    /// Move the child at `index` so its top-left corner sits at `origin`
    fn set_child_origin(&mut self, index: usize, origin: Point);
}

impl Container for [Rect] {
    fn child_count(&self) -> usize {
        self.len()
    }

    fn child_size(&self, index: usize) -> Size {
        self[index].size
    }

    fn set_child_origin(&mut self, index: usize, origin: Point) {
        self[index].origin = origin;
    }
}

impl Container for Vec<Rect> {
    fn child_count(&self) -> usize {
        self.as_slice().child_count()
    }

    fn child_size(&self, index: usize) -> Size {
        self.as_slice().child_size(index)
    }

    fn set_child_origin(&mut self, index: usize, origin: Point) {
        self.as_mut_slice().set_child_origin(index, origin);
    }
}
