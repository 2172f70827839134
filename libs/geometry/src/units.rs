//! Conversions between physical and device units.
//!
//! The host document measures lengths in device units of a hundredth of an
//! inch (`0.254` mm).

/// Millimetres per device unit.
pub const MM_PER_DEVICE_UNIT: f64 = 0.254;

/// Converts a length in millimetres to device units.
///
/// # Example
///
/// ```
/// use geometry::units::to_device_units;
///
/// assert_eq!(to_device_units(0.254), 1.);
/// ```
#[inline]
pub fn to_device_units(mm: f64) -> f64 {
    mm / MM_PER_DEVICE_UNIT
}

/// Converts a length in device units to millimetres.
#[inline]
pub fn to_mm(units: f64) -> f64 {
    units * MM_PER_DEVICE_UNIT
}
