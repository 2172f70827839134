//! Sunflower: LED chains laid out on a phyllotaxis spiral.
//!
//! A [`Layout`] grows a golden-angle seed field, walks a non-crossing strip
//! through it, and places the chained devices of a board document along the
//! strip. Each device is turned to follow the spiral and gets a via at each
//! of its six pads, named so that consecutive devices form a daisy chain.
//! The layout also draws a copper ring around the field.
//!
//! All document access goes through an [`easyeda::Host`].
//!
//! ```
//! use config::Config;
//! use easyeda::{Document, Recorder};
//! use sunflower::Layout;
//!
//! let mut config = Config::default();
//! config.field.seed_count = 64;
//! let layout = Layout::new(&config).unwrap();
//!
//! let mut host = Recorder::new(Document::default());
//! let placements = layout.place_devices(&mut host).unwrap();
//! assert!(placements.is_empty());
//! ```
#![warn(missing_docs)]

pub mod devices;
pub mod error;
pub mod layout;
pub mod nets;
pub mod plan;
pub mod tools;

pub use devices::Device;
pub use error::{Error, Result};
pub use layout::Layout;
pub use nets::{NetScheme, PadRole};
pub use plan::{PadSite, Placement};

#[doc(inline)]
pub use easyeda;
#[doc(inline)]
pub use geometry;
#[doc(inline)]
pub use phyllotaxis;
