//! Non-crossing visiting orders through a seed field.
//!
//! The walk starts at the outermost seed and repeatedly steps to a nearby
//! remaining seed. Each candidate is measured in a frame anchored at the
//! current seed, whose zero axis points radially outward: its radius is the
//! distance from the current seed, its angle how far it sits counterclockwise
//! of outward. The walk takes the nearest candidate whose angle is within
//! [`ANGULAR_BUDGET`] of the smallest angle on offer, which keeps it winding
//! inwards along one spiral arm instead of jumping across arms.
//!
//! This is a greedy heuristic with no backtracking. It produces a
//! non-crossing strip for golden-angle fields at the scales it was tuned for,
//! but nothing guarantees that for arbitrary point sets.

use geometry::prelude::*;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::seed::Seed;

/// How far past the least-advanced candidate the walk may look, in radians.
///
/// Tuned by hand: an eighth of a turn.
pub const ANGULAR_BUDGET: f64 = TAU * 128. / 1024.;

/// A permutation of seed indices `0..n` giving the order the strip visits them.
///
/// Position 0 holds the last seed the walk reached (near the center of the
/// field); the final position holds the seed the walk started from, `n - 1`.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct StripOrder {
    order: Vec<usize>,
}

impl StripOrder {
    /// Walks every seed of `seeds` exactly once, starting from the last.
    ///
    /// Runs in `O(n² log n)` for `n` seeds.
    ///
    /// # Example
    ///
    /// ```
    /// # use phyllotaxis::{SeedField, StripOrder};
    /// let field = SeedField::generate(2, 18.);
    /// assert_eq!(StripOrder::build(field.as_slice()).as_slice(), &[0, 1]);
    /// ```
    pub fn build(seeds: &[Seed]) -> Self {
        let n = seeds.len();
        let Some(anchor) = n.checked_sub(1) else {
            return Self::default();
        };

        let mut remaining = vec![true; n];
        let mut spin = vec![Polar::default(); n];
        let mut candidates = Vec::with_capacity(n);
        // Collected in walk order, reversed once at the end.
        let mut walk = Vec::with_capacity(n);

        let mut current = anchor;
        remaining[current] = false;
        walk.push(current);

        while walk.len() < n {
            let origin = seeds[current].polar();
            candidates.clear();
            candidates.extend((0..n).filter(|&j| remaining[j]));
            for &j in &candidates {
                spin[j] = seeds[j].polar().relative_to(origin);
            }

            let Some((least, least_angle)) = candidates
                .iter()
                .map(|&j| (j, spin[j].angle))
                .min_by(|a, b| a.1.total_cmp(&b.1))
            else {
                break;
            };
            let acceptable = ANGULAR_BUDGET + least_angle;

            // Stable, so equidistant candidates keep ascending index order.
            candidates.sort_by(|&j, &k| spin[j].radius.total_cmp(&spin[k].radius));
            let next = candidates
                .iter()
                .copied()
                .find(|&j| spin[j].angle <= acceptable)
                .unwrap_or(least);

            tracing::trace!(from = current, to = next, acceptable, "strip step");
            remaining[next] = false;
            walk.push(next);
            current = next;
        }

        walk.reverse();
        tracing::debug!(seeds = n, "built strip order");
        Self { order: walk }
    }

    /// The seed indices in strip order.
    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.order
    }

    /// The number of steps in the strip.
    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the strip visits no seeds.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The seed index visited at `step`.
    #[inline]
    pub fn get(&self, step: usize) -> Option<usize> {
        self.order.get(step).copied()
    }

    /// The seed index visited last, which is always the starting anchor.
    #[inline]
    pub fn last(&self) -> Option<usize> {
        self.order.last().copied()
    }

    /// Returns an iterator over `(step, seed index)` pairs.
    pub fn steps(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.order.iter().copied().enumerate()
    }

    /// Returns `true` if every index in `0..len` appears exactly once.
    pub fn is_permutation(&self) -> bool {
        self.order.iter().all(|&i| i < self.order.len()) && self.order.iter().all_unique()
    }

    /// Consumes the strip, returning the seed indices in order.
    pub fn into_vec(self) -> Vec<usize> {
        self.order
    }
}
