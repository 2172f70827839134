//! Vectors in polar form.

use approx::{AbsDiffEq, RelativeEq};
use serde::{Deserialize, Serialize};

use crate::normalize_angle;
use crate::point::Point;

/// A 2-D vector given by its length and direction.
#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize, PartialEq, PartialOrd)]
pub struct Polar {
    /// Distance from the origin.
    pub radius: f64,
    /// Direction in radians, counterclockwise from the positive x-axis.
    pub angle: f64,
}

impl Polar {
    /// Creates a new [`Polar`] vector.
    pub const fn new(radius: f64, angle: f64) -> Self {
        Self { radius, angle }
    }

    /// Converts this vector to cartesian coordinates.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// assert_eq!(Polar::new(2., 0.).to_cartesian(), Point::new(2., 0.));
    /// ```
    pub fn to_cartesian(&self) -> Point {
        Point::new(
            self.radius * self.angle.cos(),
            self.radius * self.angle.sin(),
        )
    }

    /// Returns this vector turned counterclockwise by `delta` radians.
    ///
    /// The resulting angle is not normalized.
    #[inline]
    pub fn rotated(&self, delta: f64) -> Self {
        Self::new(self.radius, self.angle + delta)
    }

    /// Expresses `self` in a frame centered on `origin` whose zero axis points
    /// radially outward from `origin`.
    ///
    /// The radius of the result is the straight-line distance from `origin` to
    /// `self`. The angle, in `[0, 2π)`, is how far `self` sits counterclockwise
    /// of the outward direction at `origin`.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// # use approx::assert_abs_diff_eq;
    /// let origin = Polar::new(1., TAU / 4.);
    /// let p = Polar::new(2., TAU / 4.).relative_to(origin);
    /// assert_abs_diff_eq!(p.radius, 1.);
    /// assert_abs_diff_eq!(p.angle, 0.);
    /// ```
    pub fn relative_to(&self, origin: Polar) -> Polar {
        let c = self.rotated(-origin.angle).to_cartesian();
        Point::new(c.x - origin.radius, c.y).to_polar()
    }
}

impl std::ops::Add<Polar> for Polar {
    type Output = Polar;

    /// Adds two vectors, returning the sum in polar form.
    ///
    /// The magnitude follows the law of cosines; the direction is measured
    /// from `self` with `atan2`, then normalized into `[0, 2π)`.
    fn add(self, rhs: Polar) -> Self::Output {
        let t = rhs.angle - self.angle;
        let (sin, cos) = t.sin_cos();
        let radius = (self.radius.powi(2)
            + rhs.radius.powi(2)
            + 2. * self.radius * rhs.radius * cos)
            .sqrt();
        let angle = self.angle + (rhs.radius * sin).atan2(self.radius + rhs.radius * cos);
        Polar::new(radius, normalize_angle(angle))
    }
}

impl From<(f64, f64)> for Polar {
    fn from(value: (f64, f64)) -> Self {
        Self::new(value.0, value.1)
    }
}

impl From<Polar> for Point {
    fn from(value: Polar) -> Self {
        value.to_cartesian()
    }
}

impl AbsDiffEq for Polar {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.radius.abs_diff_eq(&other.radius, epsilon)
            && self.angle.abs_diff_eq(&other.angle, epsilon)
    }
}

impl RelativeEq for Polar {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.radius.relative_eq(&other.radius, epsilon, max_relative)
            && self.angle.relative_eq(&other.angle, epsilon, max_relative)
    }
}
