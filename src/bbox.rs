//! Bounding box of everything drawn in a document.

use crate::rect::Rect;

/// Anything whose extents can be reported as a rectangle, like a drawn path.
///
/// Returns `None` for geometry with no extent, like an empty path.
pub trait PathBounds {
    fn bounds(&self) -> Option<Rect>;
}

impl PathBounds for Rect {
    fn bounds(&self) -> Option<Rect> {
        Some(*self)
    }
}

impl PathBounds for [(f64, f64)] {
    fn bounds(&self) -> Option<Rect> {
        let mut tracker = BoundsTracker::new();

        for &(x, y) in self {
            tracker.include_point(x, y);
        }

        tracker.rect()
    }
}

/// Accumulates the extents of drawn geometry.
///
/// It starts out empty and only ever grows.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BoundsTracker {
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
}

impl Default for BoundsTracker {
    fn default() -> BoundsTracker {
        BoundsTracker {
            left: f64::INFINITY,
            top: f64::INFINITY,
            right: f64::NEG_INFINITY,
            bottom: f64::NEG_INFINITY,
        }
    }
}

impl BoundsTracker {
    pub fn new() -> BoundsTracker {
        BoundsTracker::default()
    }

    pub fn is_empty(&self) -> bool {
        self.left > self.right || self.top > self.bottom
    }

    /// The rectangle covering everything included so far, or `None` if nothing was.
    pub fn rect(&self) -> Option<Rect> {
        if self.is_empty() {
            None
        } else {
            Some(Rect::new(self.left, self.top, self.right, self.bottom))
        }
    }

    pub fn include_point(&mut self, x: f64, y: f64) {
        if x < self.left {
            self.left = x;
        }

        if x > self.right {
            self.right = x;
        }

        if y < self.top {
            self.top = y;
        }

        if y > self.bottom {
            self.bottom = y;
        }
    }

    /// Includes both corners of a rectangle given by origin and size.
    pub fn include_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.include_path(&Rect::from_origin_size(x, y, width, height));
    }

    pub fn include_path<P: PathBounds + ?Sized>(&mut self, path: &P) {
        if let Some(r) = path.bounds() {
            self.include_point(r.x0, r.y0);
            self.include_point(r.x1, r.y1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let b = BoundsTracker::new();
        assert!(b.is_empty());
        assert_eq!(b.rect(), None);
    }

    #[test]
    fn includes_points() {
        let mut b = BoundsTracker::new();
        b.include_point(10.0, 10.0);
        assert_eq!(b.rect(), Some(Rect::new(10.0, 10.0, 10.0, 10.0)));

        b.include_point(20.0, 5.0);
        assert_eq!(b.rect(), Some(Rect::new(10.0, 5.0, 20.0, 10.0)));
    }

    #[test]
    fn never_shrinks() {
        let mut b = BoundsTracker::new();
        b.include_rect(0.0, 0.0, 100.0, 50.0);
        b.include_point(10.0, 10.0);

        assert_eq!(b.rect(), Some(Rect::new(0.0, 0.0, 100.0, 50.0)));
    }

    #[test]
    fn rect_with_negative_size_covers_both_corners() {
        let mut b = BoundsTracker::new();
        b.include_rect(10.0, 10.0, -5.0, -2.0);

        assert_eq!(b.rect(), Some(Rect::new(5.0, 8.0, 10.0, 10.0)));
    }

    #[test]
    fn includes_paths() {
        let mut b = BoundsTracker::new();
        let points = [(1.0, 7.0), (-3.0, 2.0), (4.0, 4.0)];

        b.include_path(&points[..]);
        assert_eq!(b.rect(), Some(Rect::new(-3.0, 2.0, 4.0, 7.0)));

        b.include_path(&Rect::new(0.0, 0.0, 1.0, 1.0));
        assert_eq!(b.rect(), Some(Rect::new(-3.0, 0.0, 4.0, 7.0)));

        let empty: [(f64, f64); 0] = [];
        b.include_path(&empty[..]);
        assert_eq!(b.rect(), Some(Rect::new(-3.0, 0.0, 4.0, 7.0)));
    }
}
