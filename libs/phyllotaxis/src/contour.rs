//! Closed outlines through the outermost seeds of a field.

use geometry::prelude::*;
use serde::{Deserialize, Serialize};

use crate::seed::SeedField;

/// Where the radius of each contour vertex comes from.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RingRadius {
    /// Regrow the radius from the vertex's local index, counted inwards from
    /// the outermost selected seed.
    ///
    /// The outermost seed gets the smallest radius, so the contour winds
    /// inside the field rather than around it.
    Local,
    /// Keep the radius of the selected seed, so the contour hugs the outside
    /// of the field.
    #[default]
    Field,
}

/// A closed polygon in canvas axes.
///
/// Vertices are distinct and stored once; the closing edge from the last
/// vertex back to the first is implied.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BoundaryContour {
    vertices: Vec<Point>,
}

impl BoundaryContour {
    /// Builds a contour through the last `points` seeds of `field`.
    ///
    /// The outermost seed gets local index 0. Each selected seed keeps the
    /// angle it was grown with; its radius is chosen by `radius`. Vertices
    /// are sorted by angle, then flipped onto the canvas axes.
    ///
    /// Asking for more points than the field holds selects the whole field.
    ///
    /// # Example
    ///
    /// ```
    /// # use phyllotaxis::{BoundaryContour, RingRadius, SeedField};
    /// let field = SeedField::generate(1024, 18.);
    /// let contour = BoundaryContour::build(&field, 55, RingRadius::Field);
    /// assert_eq!(contour.vertices().len(), 55);
    /// assert!(contour.path().starts_with("M "));
    /// assert!(contour.path().ends_with(" Z"));
    /// ```
    pub fn build(field: &SeedField, points: usize, radius: RingRadius) -> Self {
        let points = points.min(field.len());
        let mut ring: Vec<Polar> = (0..points)
            .map(|local| {
                let seed = &field[field.len() - 1 - local];
                let r = match radius {
                    RingRadius::Local => field.scale() * (1. + local as f64).sqrt(),
                    RingRadius::Field => seed.radius,
                };
                Polar::new(r, seed.angle)
            })
            .collect();
        ring.sort_by(|a, b| a.angle.total_cmp(&b.angle));

        let vertices = ring
            .iter()
            .map(|p| p.to_cartesian().to_canvas_axes())
            .collect();
        tracing::debug!(points, ?radius, "built boundary contour");
        Self { vertices }
    }

    /// The distinct vertices of the contour, in angular order.
    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// The vertices followed by the first vertex again.
    ///
    /// Empty if the contour has no vertices.
    pub fn closed(&self) -> Vec<Point> {
        let mut points = self.vertices.clone();
        if let Some(first) = self.vertices.first() {
            points.push(*first);
        }
        points
    }

    /// Formats the contour as an SVG-style path: `M x0 y0 L x1 y1 ... Z`.
    pub fn path(&self) -> String {
        self.vertices
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let op = if i == 0 { 'M' } else { 'L' };
                format!("{op} {} {}", fmt_coord(p.x), fmt_coord(p.y))
            })
            .chain(std::iter::once("Z".to_string()))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Bbox for BoundaryContour {
    fn bbox(&self) -> Option<Rect> {
        self.vertices.bbox()
    }
}

/// Formats a coordinate without a negative zero.
fn fmt_coord(v: f64) -> f64 {
    v + 0.
}
