//! A partial model of the host's board document.
//!
//! Only the collections the layout tools read are modeled. Every other field,
//! at any level, is kept verbatim in an `extra` map so that a document can be
//! read, edited and written back without losing anything.

use std::path::Path;

use geometry::prelude::*;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;

/// The host document, as returned by the host's `getSource` call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Footprints on the board, keyed by object id.
    #[serde(rename = "FOOTPRINT", default, skip_serializing_if = "IndexMap::is_empty")]
    pub footprints: IndexMap<String, Footprint>,
    /// Tracks on the board, keyed by object id.
    #[serde(rename = "TRACK", default, skip_serializing_if = "IndexMap::is_empty")]
    pub tracks: IndexMap<String, Track>,
    /// Schematic library instances, keyed by object id.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub schlib: IndexMap<String, SchLib>,
    /// Object ids in creation order.
    #[serde(rename = "itemOrder", default, skip_serializing_if = "Vec::is_empty")]
    pub item_order: Vec<String>,
    /// Canvas settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canvas: Option<Canvas>,
    /// Fields not modeled here.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A placed footprint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Footprint {
    /// The footprint header.
    pub head: Head,
    /// Text objects of the footprint, keyed by object id.
    #[serde(rename = "TEXT", default)]
    pub text: IndexMap<String, Text>,
    /// Fields not modeled here.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The header shared by footprints and schematic instances.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Head {
    /// Custom parameters, encoded as ``key`value`key`value``.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub c_para: Option<String>,
    /// Library uuid of the part.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    /// X-coordinate of the object origin, canvas axes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    /// Y-coordinate of the object origin, canvas axes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    /// Fields not modeled here.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A text object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Text {
    /// Text kind; `P` marks the designator (prefix) text.
    #[serde(rename = "type", default)]
    pub kind: String,
    /// The text itself.
    #[serde(default)]
    pub text: String,
    /// Fields not modeled here.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A track: a polyline of copper.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// The track's vertices.
    #[serde(rename = "pointArr", default)]
    pub points: Vec<TrackPoint>,
    /// Fields not modeled here.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One vertex of a [`Track`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackPoint {
    /// X-coordinate, canvas axes.
    pub x: f64,
    /// Y-coordinate, canvas axes.
    pub y: f64,
    /// Fields not modeled here.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A schematic library instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchLib {
    /// The instance header.
    pub head: Head,
    /// Fields not modeled here.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Canvas settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Canvas {
    /// The snap grid pitch, in device units.
    pub snap_size: f64,
    /// X-coordinate of the canvas origin.
    #[serde(rename = "originX")]
    pub origin_x: f64,
    /// Y-coordinate of the canvas origin.
    #[serde(rename = "originY")]
    pub origin_y: f64,
    /// Fields not modeled here.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Document {
    /// Parses a document from its JSON source.
    pub fn from_json(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Reads a document from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("reading host document: {:?}", path);
        let source = std::fs::read_to_string(path)?;
        Self::from_json(&source)
    }

    /// Serializes the document as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes the document to a JSON file.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// The header of the footprint or schematic instance with the given id.
    pub fn head(&self, id: &str) -> Option<&Head> {
        self.footprints
            .get(id)
            .map(|f| &f.head)
            .or_else(|| self.schlib.get(id).map(|s| &s.head))
    }

    /// Mutable access to the header of the footprint or schematic instance
    /// with the given id.
    pub fn head_mut(&mut self, id: &str) -> Option<&mut Head> {
        if let Some(footprint) = self.footprints.get_mut(id) {
            return Some(&mut footprint.head);
        }
        self.schlib.get_mut(id).map(|s| &mut s.head)
    }

    /// The origin of the object with the given id, in canvas axes.
    ///
    /// Returns `None` if no such object exists or it has no position.
    pub fn position(&self, id: &str) -> Option<Point> {
        let head = self.head(id)?;
        Some(Point::new(head.x?, head.y?))
    }
}

impl Footprint {
    /// The designator text (eg. `D12`), if the footprint has one.
    ///
    /// If several texts are marked as designators, the last one wins.
    pub fn designator(&self) -> Option<&str> {
        self.text
            .values()
            .rev()
            .find(|t| t.kind == "P")
            .map(|t| t.text.as_str())
    }

    /// Looks up a custom parameter of the footprint.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.head.param(key)
    }
}

impl Head {
    /// Looks up a custom parameter in [`Head::c_para`].
    ///
    /// # Example
    ///
    /// ```
    /// # use easyeda::document::Head;
    /// let head = Head {
    ///     c_para: Some("package`SK9822 LED`pre`D?`".into()),
    ///     ..Default::default()
    /// };
    /// assert_eq!(head.param("package"), Some("SK9822 LED"));
    /// assert_eq!(head.param("pre"), Some("D?"));
    /// assert_eq!(head.param("nope"), None);
    /// ```
    pub fn param(&self, key: &str) -> Option<&str> {
        let mut parts = self.c_para.as_deref()?.split('`');
        while let (Some(k), Some(v)) = (parts.next(), parts.next()) {
            if k == key {
                return Some(v);
            }
        }
        None
    }
}

impl Canvas {
    /// The canvas origin.
    #[inline]
    pub fn origin(&self) -> Point {
        Point::new(self.origin_x, self.origin_y)
    }
}

impl TrackPoint {
    /// The vertex as a [`Point`].
    #[inline]
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}
