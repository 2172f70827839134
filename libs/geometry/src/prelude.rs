//! An import prelude that re-exports commonly used items.

pub use crate::bbox::{Bbox, Rect};
pub use crate::point::Point;
pub use crate::polar::Polar;
pub use crate::units::{to_device_units, to_mm};
pub use crate::{normalize_angle, to_degrees, TAU};
