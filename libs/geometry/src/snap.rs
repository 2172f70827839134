//! Snapping utilities (eg. snap to a grid).

/// Snaps `pos` to the nearest multiple of `grid`.
///
/// Halfway values round towards positive infinity, matching the host's own
/// snapping.
///
/// # Example
///
/// ```
/// use geometry::snap::snap_to_grid;
///
/// assert_eq!(snap_to_grid(12., 5.), 10.);
/// assert_eq!(snap_to_grid(12.5, 5.), 15.);
/// assert_eq!(snap_to_grid(-12.5, 5.), -10.);
/// ```
pub fn snap_to_grid(pos: f64, grid: f64) -> f64 {
    assert!(grid > 0.);
    (pos / grid + 0.5).floor() * grid
}
