//! 2-D geometric operations for placing parts on a circuit board.
//!
//! Coordinates are `f64`. Angles are radians, measured counterclockwise from
//! the positive x-axis in model space. The host canvas has its y-axis pointing
//! down; use [`to_canvas_axes`] (or [`Point::to_canvas_axes`]) when handing
//! points to it.
//!
//! # Examples
//!
//! Place a point 18 units out at a quarter turn and flip it onto the canvas:
//!
//! ```
//! # use geometry::prelude::*;
//! # use approx::assert_abs_diff_eq;
//! let p = Polar::new(18., TAU / 4.).to_cartesian().to_canvas_axes();
//! assert_abs_diff_eq!(p, Point::new(0., -18.), epsilon = 1e-12);
//! ```
#![warn(missing_docs)]

pub mod bbox;
pub mod point;
pub mod polar;
pub mod prelude;
pub mod snap;
pub mod units;

pub use std::f64::consts::TAU;

use crate::point::Point;
use crate::polar::Polar;

/// Wraps the given angle (in radians) to the interval `[0, 2π)`.
///
/// # Examples
///
/// ```
/// use geometry::{normalize_angle, TAU};
///
/// assert_eq!(normalize_angle(1.), 1.);
/// assert_eq!(normalize_angle(TAU), 0.);
/// assert_eq!(normalize_angle(-TAU / 2.), TAU / 2.);
/// assert_eq!(normalize_angle(-1e-20), 0.);
/// ```
pub fn normalize_angle(theta: f64) -> f64 {
    let wrapped = theta.rem_euclid(TAU);
    // Tiny negative inputs round up to exactly `TAU`.
    if wrapped >= TAU {
        0.
    } else {
        wrapped
    }
}

/// Converts an angle in radians to degrees.
///
/// ```
/// use geometry::{to_degrees, TAU};
///
/// assert_eq!(to_degrees(TAU / 2.), 180.);
/// ```
pub fn to_degrees(theta: f64) -> f64 {
    theta * 360. / TAU
}

/// Converts polar coordinates to cartesian coordinates.
pub fn to_cartesian(radius: f64, angle: f64) -> (f64, f64) {
    let p = Polar::new(radius, angle).to_cartesian();
    (p.x, p.y)
}

/// Converts cartesian coordinates to polar coordinates.
///
/// The returned angle is in `[0, 2π)`.
pub fn to_polar(x: f64, y: f64) -> (f64, f64) {
    let p = Point::new(x, y).to_polar();
    (p.radius, p.angle)
}

/// Adds two vectors given in polar form, returning the sum in polar form.
pub fn add_polar(a: (f64, f64), b: (f64, f64)) -> (f64, f64) {
    let sum = Polar::from(a) + Polar::from(b);
    (sum.radius, sum.angle)
}

/// Flips the y-axis to match the host canvas, which grows downwards.
pub fn to_canvas_axes(x: f64, y: f64) -> (f64, f64) {
    (x, -y)
}

pub use crate::units::to_device_units;
