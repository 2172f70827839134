//! Axis-aligned rectangular bounding boxes.

use serde::{Deserialize, Serialize};

use crate::point::Point;

/// An axis-aligned rectangle, given by its lower-left and upper-right corners.
#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Rect {
    p0: Point,
    p1: Point,
}

impl Rect {
    /// Creates a rectangle from its left, bottom, right and top sides.
    ///
    /// # Panics
    ///
    /// Panics if `left > right` or `bot > top`.
    pub fn from_sides(left: f64, bot: f64, right: f64, top: f64) -> Self {
        assert!(left <= right && bot <= top, "invalid rectangle sides");
        Self {
            p0: Point::new(left, bot),
            p1: Point::new(right, top),
        }
    }

    /// Creates a zero-area rectangle containing only `p`.
    pub fn from_point(p: Point) -> Self {
        Self { p0: p, p1: p }
    }

    /// The lower-left corner.
    #[inline]
    pub fn lower_left(&self) -> Point {
        self.p0
    }

    /// The upper-right corner.
    #[inline]
    pub fn upper_right(&self) -> Point {
        self.p1
    }

    /// The width of the rectangle.
    #[inline]
    pub fn width(&self) -> f64 {
        self.p1.x - self.p0.x
    }

    /// The height of the rectangle.
    #[inline]
    pub fn height(&self) -> f64 {
        self.p1.y - self.p0.y
    }

    /// The center point of the rectangle.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let rect = Rect::from_sides(-2., 0., 4., 10.);
    /// assert_eq!(rect.center(), Point::new(1., 5.));
    /// ```
    pub fn center(&self) -> Point {
        Point::new((self.p0.x + self.p1.x) / 2., (self.p0.y + self.p1.y) / 2.)
    }

    /// The smallest rectangle containing both `self` and `other`.
    pub fn union(&self, other: Rect) -> Rect {
        Rect {
            p0: Point::new(self.p0.x.min(other.p0.x), self.p0.y.min(other.p0.y)),
            p1: Point::new(self.p1.x.max(other.p1.x), self.p1.y.max(other.p1.y)),
        }
    }
}

/// A geometric object that has a bounding box.
///
/// # Examples
///
/// ```
/// # use geometry::prelude::*;
/// let points = vec![Point::new(1., 2.), Point::new(-3., 5.)];
/// assert_eq!(points.bbox(), Some(Rect::from_sides(-3., 2., 1., 5.)));
/// let empty: Vec<Point> = Vec::new();
/// assert_eq!(empty.bbox(), None);
/// ```
pub trait Bbox {
    /// Computes the axis-aligned rectangular bounding box.
    ///
    /// If empty, this method should return `None`. A single point is not
    /// empty: its bounding box is a zero-area rectangle.
    fn bbox(&self) -> Option<Rect>;
}

impl<T> Bbox for &T
where
    T: Bbox + ?Sized,
{
    fn bbox(&self) -> Option<Rect> {
        T::bbox(*self)
    }
}

impl Bbox for Point {
    fn bbox(&self) -> Option<Rect> {
        Some(Rect::from_point(*self))
    }
}

impl Bbox for Rect {
    fn bbox(&self) -> Option<Rect> {
        Some(*self)
    }
}

impl<T: Bbox> Bbox for [T] {
    fn bbox(&self) -> Option<Rect> {
        self.iter()
            .filter_map(Bbox::bbox)
            .reduce(|acc, rect| acc.union(rect))
    }
}

impl<T: Bbox> Bbox for Vec<T> {
    fn bbox(&self) -> Option<Rect> {
        self.as_slice().bbox()
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use crate::prelude::*;

    #[test]
    fn bbox_works_for_vecs() {
        let v = vec![
            Rect::from_sides(0., 0., 100., 200.),
            Rect::from_sides(-50., 20., 90., 250.),
        ];
        assert_eq!(v.bbox(), Some(Rect::from_sides(-50., 0., 100., 250.)));
    }

    #[test]
    fn bbox_of_points_has_center() {
        let points = [
            Point::new(-10., 25.),
            Point::new(0., 16.),
            Point::new(40., -20.),
        ];
        let bbox = points.bbox().unwrap();
        assert_eq!(bbox, Rect::from_sides(-10., -20., 40., 25.));
        assert_eq!(bbox.center(), Point::new(15., 2.5));
        assert_eq!(bbox.width(), 50.);
        assert_eq!(bbox.height(), 45.);
    }
}
