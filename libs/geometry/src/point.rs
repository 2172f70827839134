//! 2-D points.

use approx::{AbsDiffEq, RelativeEq};
use serde::{Deserialize, Serialize};

use crate::polar::Polar;
use crate::snap::snap_to_grid;
use crate::TAU;

/// A point in two-dimensional space.
#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize, PartialEq, PartialOrd)]
pub struct Point {
    /// The x-coordinate of the point.
    pub x: f64,
    /// The y-coordinate of the point.
    pub y: f64,
}

impl Point {
    /// Creates a new [`Point`] from (x,y) coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the origin, `(0, 0)`.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let origin = Point::zero();
    /// assert_eq!(origin, Point::new(0., 0.));
    /// ```
    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0., y: 0. }
    }

    /// Converts this point to polar coordinates.
    ///
    /// The angle of the result is normalized into `[0, 2π)`.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let p = Point::new(0., -2.).to_polar();
    /// assert_eq!(p.radius, 2.);
    /// assert_eq!(p.angle, 3. * TAU / 4.);
    /// ```
    pub fn to_polar(&self) -> Polar {
        let radius = (self.x * self.x + self.y * self.y).sqrt();
        // `atan2` lies in (-π, π]; shifting by a full turn first keeps the
        // remainder away from the negative side.
        let angle = (TAU + self.y.atan2(self.x)) % TAU;
        Polar { radius, angle }
    }

    /// Flips the y-coordinate to match the host canvas, whose y-axis grows downwards.
    #[inline]
    pub fn to_canvas_axes(&self) -> Self {
        Self::new(self.x, -self.y)
    }

    /// Returns the Euclidean distance between two points.
    pub fn distance(&self, other: Point) -> f64 {
        (*self - other).to_polar().radius
    }

    /// Snaps both coordinates to the nearest multiple of `grid`, measured from `origin`.
    #[inline]
    pub fn snap_to_grid(&self, grid: f64, origin: Point) -> Self {
        Self::new(
            snap_to_grid(self.x - origin.x, grid) + origin.x,
            snap_to_grid(self.y - origin.y, grid) + origin.y,
        )
    }
}

impl std::ops::Add<Point> for Point {
    type Output = Self;
    fn add(self, rhs: Point) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::AddAssign<Point> for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl std::ops::Sub<Point> for Point {
    type Output = Self;
    fn sub(self, rhs: Point) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::SubAssign<Point> for Point {
    fn sub_assign(&mut self, rhs: Point) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl std::ops::Mul<f64> for Point {
    type Output = Self;

    /// Scales both coordinates by `rhs`.
    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl From<(f64, f64)> for Point {
    fn from(value: (f64, f64)) -> Self {
        Self {
            x: value.0,
            y: value.1,
        }
    }
}

impl From<Point> for (f64, f64) {
    fn from(value: Point) -> Self {
        (value.x, value.y)
    }
}

impl AbsDiffEq for Point {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl RelativeEq for Point {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use test_log::test;

    use super::*;

    #[test]
    fn to_polar_stays_in_first_turn() {
        for (x, y) in [(1., 0.), (0., 1.), (-1., 0.), (0., -1.), (-1., -1e-300)] {
            let p = Point::new(x, y).to_polar();
            assert!((0. ..TAU).contains(&p.angle), "{p:?}");
        }
        assert_abs_diff_eq!(Point::new(-1., 0.).to_polar().angle, TAU / 2., epsilon = 1e-12);
    }

    #[test]
    fn cartesian_polar_round_trip() {
        let p = Point::new(-3., 4.);
        let polar = p.to_polar();
        assert_abs_diff_eq!(polar.radius, 5.);
        assert_abs_diff_eq!(polar.to_cartesian(), p, epsilon = 1e-12);
    }

    #[test]
    fn canvas_axes_flip_y() {
        assert_eq!(Point::new(2., 3.).to_canvas_axes(), Point::new(2., -3.));
        assert_eq!(crate::to_canvas_axes(2., -3.), (2., 3.));
    }

    #[test]
    fn snaps_relative_to_origin() {
        let origin = Point::new(1., 1.);
        let p = Point::new(7.4, -3.6).snap_to_grid(5., origin);
        assert_eq!(p, Point::new(6., -4.));
    }
}
