//! Utilities for loading and merging layout configuration files.
//!
//! Configuration is read from `sunflower.toml` files in the working directory
//! and each of its ancestors. Files closer to the working directory take
//! priority, key by key. Any key with a default can also be set through an
//! environment variable named after its path, eg. `SUNFLOWER_FIELD_SEED_COUNT`
//! for `field.seed-count`; environment variables take priority over files.
#![warn(missing_docs)]

mod raw;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use phyllotaxis::RingRadius;
use serde::{Deserialize, Serialize};

use crate::raw::RawConfig;

/// Name of the configuration files searched for.
pub const CONFIG_FILE_NAME: &str = "sunflower.toml";

/// Layout configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// The seed field and strip.
    pub field: FieldConfig,
    /// The copper ring around the field.
    pub ring: RingConfig,
    /// Vias placed around each device.
    pub via: ViaConfig,
    /// Device selection and net naming.
    pub chain: ChainConfig,
    /// Grid snapping.
    pub grid: GridConfig,
}

/// Seed field parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct FieldConfig {
    /// Number of seeds walked by the strip and available for devices.
    pub seed_count: usize,
    /// Number of seeds grown; seeds past `seed-count` are headroom.
    pub field_size: usize,
    /// Radius of seed 0, in device units.
    pub scale: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            seed_count: 1024,
            field_size: 1024 + 144,
            scale: 18.,
        }
    }
}

/// Copper ring parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RingConfig {
    /// Number of outer seeds the ring passes through.
    pub points: usize,
    /// Where ring vertex radii come from.
    pub radius: RingRadius,
    /// Copper layer id.
    pub layer: String,
    /// Clearance to other copper, mm.
    pub clearance_mm: f64,
    /// Clearance to the board outline, mm.
    pub to_board_outline_mm: f64,
    /// Fill style.
    pub fill_style: String,
    /// Thermal relief style.
    pub thermal: String,
    /// Thermal spoke width, device units.
    pub spoke_width: f64,
    /// Island removal policy.
    pub keep_island: String,
    /// Whether to lock the ring against editing.
    pub locked: bool,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            points: 55,
            radius: RingRadius::default(),
            layer: "1".to_string(),
            clearance_mm: 0.3,
            to_board_outline_mm: 0.3,
            fill_style: "solid".to_string(),
            thermal: "spoke".to_string(),
            spoke_width: 0.,
            keep_island: "none".to_string(),
            locked: false,
        }
    }
}

/// Via parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ViaConfig {
    /// Distance from the device origin to each via, device units.
    pub offset: f64,
    /// Outer diameter, mm.
    pub diameter_mm: f64,
    /// Drill diameter, mm.
    pub hole_mm: f64,
    /// Layer id.
    pub layer: u32,
}

impl Default for ViaConfig {
    fn default() -> Self {
        Self {
            offset: 10.,
            diameter_mm: 0.9,
            hole_mm: 0.6,
            layer: 11,
        }
    }
}

/// Device selection and net naming.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ChainConfig {
    /// Footprints whose `package` parameter equals this are chained.
    pub package: String,
    /// Name of the supply net.
    pub supply: String,
    /// Name of the ground net.
    pub ground: String,
    /// Designator prefix used in chain net names.
    pub prefix: String,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            package: "SK9822 LED".to_string(),
            supply: "+5V".to_string(),
            ground: "GND".to_string(),
            prefix: "D".to_string(),
        }
    }
}

/// Grid snapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct GridConfig {
    /// Snap pitch in device units; the document's own snap size if unset.
    pub snap_size: Option<f64>,
}

impl Config {
    /// Loads the configuration that applies in `cwd`, using the process environment.
    pub fn load(cwd: impl Into<PathBuf>) -> Result<Self> {
        RawConfig::new(cwd.into()).load()
    }

    /// Loads the configuration that applies in `cwd`, with `env` standing in
    /// for the process environment.
    pub fn load_with_env(cwd: impl Into<PathBuf>, env: HashMap<String, String>) -> Result<Self> {
        let mut raw = RawConfig::new(cwd.into());
        raw.set_env(env);
        raw.load()
    }

    /// Loads exactly one configuration file, without searching or environment overrides.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?;
        Self::from_toml(&source)
            .with_context(|| format!("could not load configuration from `{}`", path.display()))
    }

    /// Parses a configuration from TOML source. Missing keys take their defaults.
    pub fn from_toml(source: &str) -> Result<Self> {
        toml::from_str(source).context("invalid layout configuration")
    }
}
