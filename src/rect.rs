//! Axis-aligned rectangles.

use float_cmp::approx_eq;

/// A rectangle given by its top-left `(x0, y0)` and bottom-right `(x1, y1)` corners.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Rect {
    #[inline]
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Creates a rectangle from an origin and a size, like SVG's `x/y/width/height`.
    #[inline]
    pub fn from_origin_size(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    /// Compares corners with a small tolerance, for bounds computed from transformed geometry.
    pub fn approx_eq(&self, other: &Self) -> bool {
        approx_eq!(f64, self.x0, other.x0, epsilon = 0.0001)
            && approx_eq!(f64, self.y0, other.y0, epsilon = 0.0001)
            && approx_eq!(f64, self.x1, other.x1, epsilon = 0.0001)
            && approx_eq!(f64, self.y1, other.y1, epsilon = 0.0001)
    }
}
