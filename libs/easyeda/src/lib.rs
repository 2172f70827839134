//! Access to the EasyEDA board editor as a document-mutation service.
//!
//! The [`Host`] trait is the narrow interface layout tools drive: read the
//! document, move and rotate objects, create shapes. [`Recorder`] implements
//! it over an in-memory [`Document`] and records the calls, so that a plan can
//! be computed offline and replayed in the editor.
#![warn(missing_docs)]

pub mod document;
pub mod error;
pub mod host;
pub mod shape;

#[cfg(test)]
mod tests;

pub use document::{Canvas, Document, Footprint, Head, SchLib, Text, Track, TrackPoint};
pub use error::{Error, Result};
pub use host::{Command, Host, ObjectRef, Recorder};
pub use shape::{CopperArea, Shape, Via};
