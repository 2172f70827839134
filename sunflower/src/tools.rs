//! Document utilities used alongside placement.

use easyeda::Host;
use geometry::prelude::*;

use crate::error::{Error, Result};

/// Pitch between instances arranged by [`arrange_row`], in device units.
pub const ROW_PITCH: f64 = 100.;

/// Snaps every vertex of the selected tracks to the snap grid, measured from
/// the canvas origin, and writes the document back.
///
/// `grid` overrides the canvas snap size. Returns the number of ordinates
/// that moved.
pub fn snap_tracks(host: &mut impl Host, grid: Option<f64>) -> Result<usize> {
    let mut document = host.read_document()?;
    let canvas = document.canvas.as_ref().ok_or(easyeda::Error::MissingCanvas)?;
    let grid = grid.unwrap_or(canvas.snap_size);
    if !(grid.is_finite() && grid > 0.) {
        return Err(Error::InvalidGrid(grid));
    }
    let origin = canvas.origin();

    let mut changed = 0;
    for id in host.selected_ids()? {
        let Some(track) = document.tracks.get_mut(&id) else {
            tracing::warn!(%id, "selected object is not a track");
            continue;
        };
        for (i, point) in track.points.iter_mut().enumerate() {
            let snapped = point.point().snap_to_grid(grid, origin);
            let ordinates = [("x", &mut point.x, snapped.x), ("y", &mut point.y, snapped.y)];
            for (ordinate, value, to) in ordinates {
                if *value != to {
                    tracing::info!(track = %id, point = i, ordinate, from = *value, to, "snapped");
                    *value = to;
                    changed += 1;
                }
            }
        }
    }

    host.apply_document(&document)?;
    Ok(changed)
}

/// The center of the bounding box of the selected objects' origins, in
/// millimetres with the y-axis pointing up.
///
/// Returns `None` if no selected object has a position.
pub fn selection_center(host: &mut impl Host) -> Result<Option<Point>> {
    let document = host.read_document()?;
    let points: Vec<Point> = host
        .selected_ids()?
        .iter()
        .filter_map(|id| {
            let position = document.position(id);
            if position.is_none() {
                tracing::debug!(%id, "selected object has no position");
            }
            position
        })
        .map(|p| p.to_canvas_axes())
        .collect();
    Ok(points.bbox().map(|rect| {
        let center = rect.center();
        Point::new(to_mm(center.x), to_mm(center.y))
    }))
}

/// Moves every schematic instance of the part `uuid` into a row, one every
/// `pitch` device units along the x-axis, in creation order.
///
/// Annotating the schematic afterwards then numbers the instances in creation
/// order. Instances missing from the document's creation order follow the
/// others. Returns the ids moved, in row order.
pub fn arrange_row(host: &mut impl Host, uuid: &str, pitch: f64) -> Result<Vec<String>> {
    let document = host.read_document()?;
    let matches = |id: &String| {
        document
            .schlib
            .get(id)
            .is_some_and(|s| s.head.uuid.as_deref() == Some(uuid))
    };

    let mut row: Vec<String> = document
        .item_order
        .iter()
        .filter(|id| matches(*id))
        .cloned()
        .collect();
    for id in document.schlib.keys() {
        if matches(id) && !row.contains(id) {
            row.push(id.clone());
        }
    }

    for (i, id) in row.iter().enumerate() {
        host.move_object(id, Point::new(i as f64 * pitch, 0.))?;
    }
    tracing::info!(uuid, count = row.len(), "arranged schematic row");
    Ok(row)
}
