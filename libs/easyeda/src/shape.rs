//! Payloads for the host's `createShape` call.

use serde::{Deserialize, Serialize};

/// A board feature to create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shapeType", content = "jsonCache")]
pub enum Shape {
    /// A filled copper area.
    #[serde(rename = "COPPERAREA")]
    CopperArea(CopperArea),
    /// A plated through-hole via.
    #[serde(rename = "VIA")]
    Via(Via),
}

/// A filled copper area bounded by a path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CopperArea {
    /// Copper layer id.
    #[serde(rename = "layerid")]
    pub layer: String,
    /// Clearance to other copper, device units.
    pub clearance_width: f64,
    /// Clearance to the board outline, device units.
    pub to_board_outline: f64,
    /// Fill style, eg. `solid`.
    pub fill_style: String,
    /// Thermal relief style, eg. `spoke`.
    pub thermal: String,
    /// Thermal spoke width, device units.
    #[serde(rename = "spoke_width")]
    pub spoke_width: f64,
    /// Island removal policy, eg. `none`.
    pub keep_island: String,
    /// The outline, as `M x y L x y ... Z`.
    #[serde(rename = "pathStr")]
    pub path: String,
    /// `1` if the area is locked against editing.
    pub locked: u8,
}

/// A via.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Via {
    /// Object id to create the via with.
    #[serde(rename = "gId")]
    pub id: String,
    /// Outer diameter, device units.
    pub diameter: f64,
    /// Drill hole radius, device units.
    #[serde(rename = "holeR")]
    pub hole_radius: f64,
    /// Layer id.
    #[serde(rename = "layerid")]
    pub layer: u32,
    /// X-coordinate, canvas axes.
    pub x: f64,
    /// Y-coordinate, canvas axes.
    pub y: f64,
    /// Name of the net the via joins.
    pub net: String,
}

impl From<CopperArea> for Shape {
    fn from(value: CopperArea) -> Self {
        Self::CopperArea(value)
    }
}

impl From<Via> for Shape {
    fn from(value: Via) -> Self {
        Self::Via(value)
    }
}
