//! Phyllotaxis seed fields.

use geometry::prelude::*;
use serde::{Deserialize, Serialize};

/// The golden ratio, `(1 + √5) / 2`.
pub const GOLDEN_RATIO: f64 = 1.618033988749895;

/// One point of a [`SeedField`].
#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Seed {
    /// Position of the seed in generation order.
    pub index: usize,
    /// Distance from the center of the field.
    pub radius: f64,
    /// Direction of the seed, in `[0, 2π)`.
    pub angle: f64,
}

impl Seed {
    /// Grows seed `index` of a field with the given `scale`.
    ///
    /// The radius is `scale * √(1 + index)` and the angle is `index` golden
    /// turns (`2π/φ` each), wrapped into the first turn.
    pub fn grow(index: usize, scale: f64) -> Self {
        let i = index as f64;
        Self {
            index,
            radius: scale * (1. + i).sqrt(),
            angle: normalize_angle(i * TAU / GOLDEN_RATIO),
        }
    }

    /// The position of this seed in polar form.
    #[inline]
    pub fn polar(&self) -> Polar {
        Polar::new(self.radius, self.angle)
    }

    /// The position of this seed in cartesian model coordinates.
    #[inline]
    pub fn position(&self) -> Point {
        self.polar().to_cartesian()
    }
}

/// An ordered, immutable sequence of seeds grown from the inside out.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SeedField {
    scale: f64,
    seeds: Vec<Seed>,
}

impl SeedField {
    /// Grows a field of `count` seeds.
    ///
    /// # Example
    ///
    /// ```
    /// # use phyllotaxis::SeedField;
    /// let field = SeedField::generate(5, 18.);
    /// assert_eq!(field.len(), 5);
    /// assert_eq!(field[0].radius, 18.);
    /// assert_eq!(field[0].angle, 0.);
    /// ```
    pub fn generate(count: usize, scale: f64) -> Self {
        Self {
            scale,
            seeds: (0..count).map(|i| Seed::grow(i, scale)).collect(),
        }
    }

    /// The scale the field was grown with.
    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// The number of seeds in the field.
    #[inline]
    pub fn len(&self) -> usize {
        self.seeds.len()
    }

    /// Returns `true` if the field has no seeds.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.seeds.is_empty()
    }

    /// The seeds of the field, in generation order.
    #[inline]
    pub fn as_slice(&self) -> &[Seed] {
        &self.seeds
    }

    /// Returns an iterator over the seeds, in generation order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Seed> {
        self.seeds.iter()
    }

    /// Returns the seed with the given index, if it exists.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Seed> {
        self.seeds.get(index)
    }

    /// The first `count` seeds, or `None` if the field is smaller than that.
    #[inline]
    pub fn prefix(&self, count: usize) -> Option<&[Seed]> {
        self.seeds.get(..count)
    }

    /// A new field holding only the first `count` seeds.
    ///
    /// Returns `None` if the field is smaller than `count`.
    pub fn truncated(&self, count: usize) -> Option<SeedField> {
        self.prefix(count).map(|seeds| SeedField {
            scale: self.scale,
            seeds: seeds.to_vec(),
        })
    }
}

impl std::ops::Index<usize> for SeedField {
    type Output = Seed;

    fn index(&self, index: usize) -> &Self::Output {
        &self.seeds[index]
    }
}

impl<'a> IntoIterator for &'a SeedField {
    type Item = &'a Seed;
    type IntoIter = std::slice::Iter<'a, Seed>;

    fn into_iter(self) -> Self::IntoIter {
        self.seeds.iter()
    }
}
