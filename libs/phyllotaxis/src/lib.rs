//! Golden-angle point fields and the orderings built on top of them.
//!
//! A [`SeedField`] grows seeds the way a sunflower head does: each new seed
//! sits a golden angle further around and slightly further out than the last.
//! From a field, this crate derives
//!
//! * a [`BoundaryContour`]: a closed outline through the outermost seeds, and
//! * a [`StripOrder`]: a single visiting order through the seeds, where
//!   consecutive seeds are close together and the path spirals without
//!   crossing itself.
//!
//! # Examples
//!
//! ```
//! use phyllotaxis::{SeedField, StripOrder};
//!
//! let field = SeedField::generate(64, 18.);
//! let strip = StripOrder::build(field.as_slice());
//! assert_eq!(strip.len(), 64);
//! assert_eq!(strip.last(), Some(63));
//! ```
#![warn(missing_docs)]

pub mod contour;
pub mod seed;
pub mod strip;


pub use contour::{BoundaryContour, RingRadius};
pub use seed::{Seed, SeedField, GOLDEN_RATIO};
pub use strip::{StripOrder, ANGULAR_BUDGET};
