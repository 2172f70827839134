//! Finding the chained devices in a board document.

use easyeda::Document;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

lazy_static! {
    static ref NUMBER: Regex = Regex::new(r"[0-9]+").unwrap();
}

/// A footprint to place.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Device {
    /// The footprint's object id.
    pub id: String,
    /// The designator, eg. `D12`.
    pub designator: String,
    /// The first number in the designator, which orders devices.
    pub number: u64,
}

impl Device {
    /// Creates a device, reading its number from the designator.
    ///
    /// # Example
    ///
    /// ```
    /// # use sunflower::devices::Device;
    /// let device = Device::new("gge7", "D12").unwrap();
    /// assert_eq!(device.number, 12);
    /// assert!(Device::new("gge8", "LED").is_err());
    /// ```
    pub fn new(id: impl Into<String>, designator: impl Into<String>) -> Result<Self> {
        let id = id.into();
        let designator = designator.into();
        let Some(digits) = NUMBER.find(&designator) else {
            return Err(Error::UnnumberedDesignator { id, designator });
        };
        match digits.as_str().parse() {
            Ok(number) => Ok(Self {
                id,
                designator,
                number,
            }),
            Err(_) => Err(Error::DesignatorNumberTooLarge { id, designator }),
        }
    }
}

/// The first run of decimal digits in `s`, if any and if it fits a `u64`.
pub fn first_number(s: &str) -> Option<u64> {
    NUMBER.find(s)?.as_str().parse().ok()
}

/// Returns the footprints whose `package` parameter is `package`, ordered by
/// designator number.
///
/// Devices with equal numbers keep document order.
pub fn discover(document: &Document, package: &str) -> Result<Vec<Device>> {
    let mut devices = document
        .footprints
        .iter()
        .filter(|(_, footprint)| footprint.param("package") == Some(package))
        .map(|(id, footprint)| {
            let designator = footprint
                .designator()
                .ok_or_else(|| Error::MissingDesignator(id.clone()))?;
            Device::new(id.as_str(), designator)
        })
        .collect::<Result<Vec<_>>>()?;
    devices.sort_by_key(|d| d.number);
    tracing::debug!(package, count = devices.len(), "discovered devices");
    Ok(devices)
}
