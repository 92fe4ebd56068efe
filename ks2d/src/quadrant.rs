// Splits point sets into the four quadrants around a pivot.
// Copyright (C) 2023, Tony Rippy
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository, or online at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::error::Result;
use crate::points::{Point, PointSet};
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

/// How a point lying exactly on one of the lines through the pivot is counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryPolicy {
    /// The point belongs to every quadrant it borders. A point equal to the
    /// pivot is counted in all four, so fractions may add up to more than one.
    /// The test only compares fractions between samples, never sums them.
    Inclusive,
}

/// Do not change this: it alters every statistic computed by the crate.
pub const BOUNDARY_POLICY: BoundaryPolicy = BoundaryPolicy::Inclusive;

fn at_or_above(v: f64, pivot: f64) -> bool {
    match BOUNDARY_POLICY {
        BoundaryPolicy::Inclusive => v >= pivot,
    }
}

fn at_or_below(v: f64, pivot: f64) -> bool {
    match BOUNDARY_POLICY {
        BoundaryPolicy::Inclusive => v <= pivot,
    }
}

/// One of the four regions around a pivot. The first sign refers to x, the second to y.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quadrant {
    PlusPlus,
    MinusPlus,
    PlusMinus,
    MinusMinus,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::PlusPlus,
        Quadrant::MinusPlus,
        Quadrant::PlusMinus,
        Quadrant::MinusMinus,
    ];

    pub fn contains(self, pivot: Point, p: &Point) -> bool {
        let x = match self {
            Quadrant::PlusPlus | Quadrant::PlusMinus => at_or_above(p.x, pivot.x),
            Quadrant::MinusPlus | Quadrant::MinusMinus => at_or_below(p.x, pivot.x),
        };
        let y = match self {
            Quadrant::PlusPlus | Quadrant::MinusPlus => at_or_above(p.y, pivot.y),
            Quadrant::PlusMinus | Quadrant::MinusMinus => at_or_below(p.y, pivot.y),
        };
        x && y
    }
}

/// The fraction of a point set found in each quadrant around a pivot.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuadrantFractions {
    pub pp: f64,
    pub mp: f64,
    pub pm: f64,
    pub mm: f64,
}

impl QuadrantFractions {
    pub fn get(&self, q: Quadrant) -> f64 {
        match q {
            Quadrant::PlusPlus => self.pp,
            Quadrant::MinusPlus => self.mp,
            Quadrant::PlusMinus => self.pm,
            Quadrant::MinusMinus => self.mm,
        }
    }

    pub fn sum(&self) -> f64 {
        self.pp + self.mp + self.pm + self.mm
    }

    /// The largest absolute difference between corresponding quadrants.
    pub fn max_difference(&self, other: &QuadrantFractions) -> f64 {
        Quadrant::ALL
            .iter()
            .map(|&q| (self.get(q) - other.get(q)).abs())
            .fold(0.0, f64::max)
    }
}

/// Counts the fraction of `points` in each of the four quadrants defined by a
/// vertical and a horizontal line crossing `pivot`.
///
/// Boundary points follow [`BOUNDARY_POLICY`]. Each count is scaled by the
/// reciprocal of N rather than divided by N. Fails if the pivot has a
/// non-finite coordinate.
pub fn count_quads(points: &PointSet, pivot: Point) -> Result<QuadrantFractions> {
    Ok(fractions(points, pivot.finite()?))
}

/// [`count_quads`] for a pivot already known to be finite.
pub(crate) fn fractions(points: &PointSet, pivot: Point) -> QuadrantFractions {
    let mut counts = [0usize; 4];
    for p in points {
        for (count, q) in counts.iter_mut().zip(Quadrant::ALL) {
            if q.contains(pivot, p) {
                *count += 1;
            }
        }
    }
    let n = points.len();
    trace!(
        "quadrant counts {:?} around {:?}, all {} points counted exactly once: {}",
        counts,
        pivot,
        n,
        counts.iter().sum::<usize>() == n
    );
    let ff = 1.0 / n as f64;
    QuadrantFractions {
        pp: counts[0] as f64 * ff,
        mp: counts[1] as f64 * ff,
        pm: counts[2] as f64 * ff,
        mm: counts[3] as f64 * ff,
    }
}

/// Like [`count_quads`], but takes an unvalidated numeric table and pivot.
///
/// The table may be in either orientation; see [`PointSet::from_table`].
pub fn count_quads_in<R, T, P>(table: &[R], pivot: &[P]) -> Result<QuadrantFractions>
where
    R: AsRef<[T]>,
    T: ToPrimitive,
    P: ToPrimitive,
{
    let pivot = Point::from_slice(pivot)?;
    let points = PointSet::from_table(table)?;
    Ok(fractions(&points, pivot))
}

/// Returns the members of each quadrant, in [`Quadrant::ALL`] order.
///
/// A boundary point shows up in every quadrant it is counted in.
pub fn split(points: &PointSet, pivot: Point) -> [Vec<Point>; 4] {
    Quadrant::ALL.map(|q| points.iter().filter(|p| q.contains(pivot, p)).copied().collect())
}
