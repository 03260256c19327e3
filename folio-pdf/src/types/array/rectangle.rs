use crate::types::{Array, Numeric, Object};

/// A box on the page, written as `[llx lly urx ury]`.
///
/// Corners are normalized on construction, so the first pair is always the
/// lower left one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    left: f64,
    bottom: f64,
    right: f64,
    top: f64,
}

impl Rectangle {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            left: x1.min(x2),
            bottom: y1.min(y2),
            right: x1.max(x2),
            top: y1.max(y2),
        }
    }

    /// A box anchored at the origin, as media boxes are.
    pub fn sized(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    pub fn right(&self) -> f64 {
        self.right
    }

    pub fn top(&self) -> f64 {
        self.top
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }
}

impl From<Rectangle> for Array {
    fn from(rect: Rectangle) -> Self {
        [rect.left, rect.bottom, rect.right, rect.top]
            .into_iter()
            .map(|coord| Object::Numeric(Numeric::Real(coord)))
            .collect()
    }
}
