//! # Pixel Geometry
//!
//! Axis-aligned rectangles in pixel space. Both the player body and the
//! tiles it collides with are expressed as [`Rect`]s.

/// Axis-aligned rectangle in pixel space (y grows downward).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width.
    pub w: f32,
    /// Height.
    pub h: f32,
}

impl Rect {
    /// Creates a new rectangle from its top-left corner and size.
    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Right edge (`x + w`).
    #[inline]
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Bottom edge (`y + h`).
    #[inline]
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Center point.
    #[inline]
    #[must_use]
    pub fn center(&self) -> [f32; 2] {
        [self.x + self.w / 2.0, self.y + self.h / 2.0]
    }

    /// Moves the right edge to `right`, keeping the width.
    #[inline]
    pub fn set_right(&mut self, right: f32) {
        self.x = right - self.w;
    }

    /// Moves the bottom edge to `bottom`, keeping the height.
    #[inline]
    pub fn set_bottom(&mut self, bottom: f32) {
        self.y = bottom - self.h;
    }

    /// Returns a copy moved by `(dx, dy)`.
    #[inline]
    #[must_use]
    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Checks if this rectangle overlaps another.
    ///
    /// Touching edges do not count as overlap.
    #[inline]
    #[must_use]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_intersection() {
        let a = Rect::new(0.0, 0.0, 32.0, 32.0);
        let b = Rect::new(16.0, 16.0, 32.0, 32.0);
        let c = Rect::new(64.0, 64.0, 32.0, 32.0);

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 32.0, 32.0);
        let below = Rect::new(0.0, 32.0, 32.0, 32.0);
        let beside = Rect::new(32.0, 0.0, 32.0, 32.0);

        assert!(!a.intersects(&below));
        assert!(!a.intersects(&beside));
        assert!(a.translated(0.0, 1.0).intersects(&below));
    }

    #[test]
    fn test_edge_setters() {
        let mut r = Rect::new(10.0, 10.0, 32.0, 32.0);
        r.set_right(100.0);
        r.set_bottom(64.0);
        assert_eq!(r.x, 68.0);
        assert_eq!(r.y, 32.0);
        assert_eq!(r.center(), [84.0, 48.0]);
    }
}
