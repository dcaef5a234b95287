//! Ambient 2D transform stack
//!
//! Text is drawn in local coordinates; the engine pushes the stack, translates
//! to the caller's anchor and pops again around every draw.

use mui_core::Point;
use smallvec::SmallVec;

/// The caller's rendering transform
pub trait TransformStack {
    /// Save the current transform
    fn push(&mut self);

    /// Translate the current transform
    fn translate(&mut self, x: f32, y: f32);

    /// Restore the most recently saved transform
    fn pop(&mut self);
}

/// Run `f` with the transform translated to `(x, y)`, restoring it afterwards
pub(crate) fn with_translation<T, R>(
    stack: &mut T,
    x: f32,
    y: f32,
    f: impl FnOnce() -> R,
) -> R
where
    T: TransformStack + ?Sized,
{
    stack.push();
    stack.translate(x, y);
    let result = f();
    stack.pop();
    result
}

/// Translation-only transform stack
#[derive(Debug, Clone, Default)]
pub struct MatrixStack {
    current: Point,
    saved: SmallVec<[Point; 8]>,
}

impl MatrixStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Where local (0, 0) currently maps to
    pub fn origin(&self) -> Point {
        self.current
    }

    /// Number of saved transforms
    pub fn depth(&self) -> usize {
        self.saved.len()
    }
}

impl TransformStack for MatrixStack {
    fn push(&mut self) {
        self.saved.push(self.current);
    }

    fn translate(&mut self, x: f32, y: f32) {
        self.current.x += x;
        self.current.y += y;
    }

    fn pop(&mut self) {
        match self.saved.pop() {
            Some(previous) => self.current = previous,
            None => tracing::warn!(target: crate::LOG_TARGET, "transform stack underflow"),
        }
    }
}
