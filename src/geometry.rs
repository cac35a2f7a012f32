//! Planar geometry in layout coordinates (origin top-left, y grows downward).

use core::ops::{Add, Neg, Sub};

/// A point, or a displacement between two points.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self { Point { x, y } }

    /// Scale both components by `s`.
    pub fn scale(self, s: f64) -> Self { Point { x: self.x * s, y: self.y * s } }

    /// Copy of this point shifted vertically by `dy`.
    pub fn offset_y(self, dy: f64) -> Self { Point { x: self.x, y: self.y + dy } }

    pub fn length_sq(self) -> f64 { self.x * self.x + self.y * self.y }

    pub fn length(self) -> f64 { libm::sqrt(self.length_sq()) }

    /// Manhattan distance, `|dx| + |dy|`.
    pub fn manhattan(self, other: Self) -> f64 {
        libm::fabs(self.x - other.x) + libm::fabs(self.y - other.y)
    }
}

impl Add for Point {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Point { x: self.x + rhs.x, y: self.y + rhs.y } }
}

impl Sub for Point {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Point { x: self.x - rhs.x, y: self.y - rhs.y } }
}

impl Neg for Point {
    type Output = Self;
    fn neg(self) -> Self { Point { x: -self.x, y: -self.y } }
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Size = Size { width: 0.0, height: 0.0 };

    pub const fn new(width: f64, height: f64) -> Self { Size { width, height } }
}

/// Axis-aligned rectangle described by its top-left origin and size.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Rect { origin: Point::new(x, y), size: Size::new(width, height) }
    }

    /// Rectangle of `size` centered on `center`.
    pub fn centered(center: Point, size: Size) -> Self {
        Rect {
            origin: Point::new(center.x - size.width * 0.5, center.y - size.height * 0.5),
            size,
        }
    }

    pub fn min_x(&self) -> f64 { self.origin.x }
    pub fn min_y(&self) -> f64 { self.origin.y }
    pub fn max_x(&self) -> f64 { self.origin.x + self.size.width }
    pub fn max_y(&self) -> f64 { self.origin.y + self.size.height }

    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size.width * 0.5,
            self.origin.y + self.size.height * 0.5,
        )
    }

    /// Inclusive on all four edges.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min_x()
            && point.x <= self.max_x()
            && point.y >= self.min_y()
            && point.y <= self.max_y()
    }

    /// True when the two rectangles share a region of positive area.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.min_x() < other.max_x()
            && other.min_x() < self.max_x()
            && self.min_y() < other.max_y()
            && other.min_y() < self.max_y()
    }
}

/// Padding around a section of items.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct EdgeInsets {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl EdgeInsets {
    pub const ZERO: EdgeInsets = EdgeInsets { top: 0.0, left: 0.0, bottom: 0.0, right: 0.0 };

    pub const fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        EdgeInsets { top, left, bottom, right }
    }

    pub fn horizontal(&self) -> f64 { self.left + self.right }

    pub(crate) fn is_valid(&self) -> bool {
        [self.top, self.left, self.bottom, self.right]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_distance() {
        let a = Point::new(150.0, 75.0);
        let b = Point::new(100.0, 175.0);
        assert!(libm::fabs(a.manhattan(b) - 150.0) < 1e-12);
    }

    #[test]
    fn centered_rect_round_trips_center() {
        let r = Rect::centered(Point::new(150.0, 85.0), Size::new(300.0, 150.0));
        assert_eq!(r.origin, Point::new(0.0, 10.0));
        assert_eq!(r.center(), Point::new(150.0, 85.0));
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
        assert!(a.intersects(&Rect::new(9.0, 9.0, 5.0, 5.0)));
    }

    #[test]
    fn contains_is_inclusive() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(Point::new(10.0, 10.0)));
        assert!(!r.contains(Point::new(10.1, 5.0)));
    }

    #[test]
    fn negative_inset_is_invalid() {
        assert!(EdgeInsets::new(10.0, 0.0, 0.0, 0.0).is_valid());
        assert!(!EdgeInsets::new(-1.0, 0.0, 0.0, 0.0).is_valid());
        assert!(!EdgeInsets::new(0.0, f64::NAN, 0.0, 0.0).is_valid());
    }
}
