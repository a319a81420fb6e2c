//! Layout geometry in CSS pixels.
//!
//! Renderer-specific rectangles are converted into these types at the
//! UI boundary so the state machines never depend on a live DOM.

use serde::{Deserialize, Serialize};

/// A position in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A width/height pair in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned bounding box, top-left origin.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn left(&self) -> f64 {
        self.origin.x
    }

    pub fn top(&self) -> f64 {
        self.origin.y
    }

    pub fn right(&self) -> f64 {
        self.origin.x + self.size.width
    }

    pub fn bottom(&self) -> f64 {
        self.origin.y + self.size.height
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }

    /// A rect is measurable when every component is finite and the size
    /// is non-negative. Unmounted or collapsed elements report garbage
    /// here and must be treated as absent.
    pub fn is_measurable(&self) -> bool {
        self.origin.x.is_finite()
            && self.origin.y.is_finite()
            && self.size.width.is_finite()
            && self.size.height.is_finite()
            && self.size.width >= 0.0
            && self.size.height >= 0.0
    }

    /// Inclusive on all four edges.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }

    /// Strict overlap; rects that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Grow (positive margin) or shrink (negative margin) on every side.
    ///
    /// Shrinking past zero collapses to an empty rect centred on the
    /// original centre.
    pub fn inset(&self, margin: f64) -> Rect {
        let width = (self.size.width + 2.0 * margin).max(0.0);
        let height = (self.size.height + 2.0 * margin).max(0.0);
        let c = self.center();
        Rect::new(c.x - width / 2.0, c.y - height / 2.0, width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_edge_inclusive() {
        let r = Rect::new(10.0, 20.0, 200.0, 100.0);
        assert!(r.contains(Point::new(10.0, 20.0)));
        assert!(r.contains(Point::new(210.0, 120.0)));
        assert!(!r.contains(Point::new(9.9, 50.0)));
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(100.0, 0.0, 50.0, 50.0);
        assert!(!a.intersects(&b));
        assert!(a.intersects(&Rect::new(99.0, 99.0, 10.0, 10.0)));
    }

    #[test]
    fn negative_inset_shrinks() {
        let viewport = Rect::new(0.0, 0.0, 1000.0, 800.0);
        let inner = viewport.inset(-100.0);
        assert_eq!(inner, Rect::new(100.0, 100.0, 800.0, 600.0));
    }

    #[test]
    fn oversized_inset_collapses_to_center() {
        let r = Rect::new(0.0, 0.0, 100.0, 40.0).inset(-50.0);
        assert_eq!(r.size, Size::new(0.0, 0.0));
        assert_eq!(r.origin, Point::new(50.0, 20.0));
    }

    #[test]
    fn nan_rect_is_not_measurable() {
        assert!(!Rect::new(f64::NAN, 0.0, 10.0, 10.0).is_measurable());
        assert!(!Rect::new(0.0, 0.0, -1.0, 10.0).is_measurable());
        assert!(Rect::new(0.0, 0.0, 0.0, 0.0).is_measurable());
    }
}
