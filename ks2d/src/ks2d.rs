// The two-sample Kolmogorov-Smirnov test for points in the plane.
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

use crate::error::{Ks2dError, Result};
use crate::kstest::{qks_with, SeriesOptions};
use crate::points::{Point, PointSet};
use crate::quadrant::fractions;
#[cfg(feature = "rayon")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ks2dOptions {
    pub series: SeriesOptions,
}

/// The outcome of a two-sample test.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ks2dResult {
    /// The KS statistic D: the largest quadrant-fraction discrepancy, averaged
    /// over both choices of pivot sample.
    pub statistic: f64,
    /// The asymptotic significance of `statistic`. Higher means less evidence
    /// that the samples come from different distributions.
    pub probability: f64,
    /// The scaled distance that `probability` was evaluated at.
    pub lambda: f64,
}

impl Ks2dResult {
    /// Whether the same-distribution hypothesis is rejected at significance level `alpha`.
    pub fn rejects_at(&self, alpha: f64) -> bool {
        self.probability < alpha
    }
}

/// Runs the two-dimensional, two-sample Kolmogorov-Smirnov test with default options.
///
/// Tests the hypothesis that `a` and `b` are drawn from the same bivariate
/// distribution (Peacock 1983; Fasano & Franceschini 1987; Numerical Recipes
/// in C, 2nd ed., section 14.7).
///
/// A small statistic with a large probability means the hypothesis cannot be
/// rejected. Probabilities above roughly 0.20 are not accurate, but the
/// conclusion that the samples are not significantly different still holds.
///
/// Every point of both samples is used as a pivot, and each pivot counts both
/// samples, so the cost is quadratic in the total number of points. That is
/// fine for hundreds of points, less so for many thousands.
pub fn ks2d2s(a: &PointSet, b: &PointSet) -> Result<Ks2dResult> {
    ks2d2s_with(a, b, &Ks2dOptions::default())
}

pub fn ks2d2s_with(a: &PointSet, b: &PointSet, options: &Ks2dOptions) -> Result<Ks2dResult> {
    // Validate before the expensive part.
    let ra = labelled_correlation(a, "sample A")?;
    let rb = labelled_correlation(b, "sample B")?;

    let d1 = max_discrepancy(a, a, b);
    let d2 = max_discrepancy(b, a, b);
    let d = (d1 + d2) / 2.0;

    let na = a.len() as f64;
    let nb = b.len() as f64;
    let sqen = (na * nb / (na + nb)).sqrt();
    let rr = (1.0 - (ra * ra + rb * rb) / 2.0).sqrt();
    let lambda = d * sqen / (1.0 + rr * (0.25 - 0.75 / sqen));
    let probability = qks_with(lambda, &options.series);
    debug!(
        "d1 = {}, d2 = {}, D = {}, n_eff = {}, R_A = {}, R_B = {}, RR = {}, lambda = {}, prob = {}",
        d1, d2, d, sqen, ra, rb, rr, lambda, probability
    );
    Ok(Ks2dResult {
        statistic: d,
        probability,
        lambda,
    })
}

fn discrepancy(pivot: Point, a: &PointSet, b: &PointSet) -> f64 {
    fractions(a, pivot).max_difference(&fractions(b, pivot))
}

/// The largest discrepancy between `a` and `b` over every pivot in `pivots`.
#[cfg(not(feature = "rayon"))]
fn max_discrepancy(pivots: &PointSet, a: &PointSet, b: &PointSet) -> f64 {
    pivots
        .iter()
        .map(|&p| discrepancy(p, a, b))
        .fold(0.0, f64::max)
}

/// The largest discrepancy between `a` and `b` over every pivot in `pivots`.
#[cfg(feature = "rayon")]
fn max_discrepancy(pivots: &PointSet, a: &PointSet, b: &PointSet) -> f64 {
    pivots
        .as_slice()
        .par_iter()
        .map(|&p| discrepancy(p, a, b))
        .reduce(|| 0.0, f64::max)
}

/// Pearson's correlation coefficient between the x and y coordinates of a sample.
///
/// Fails when either coordinate has no variance, including single-point samples.
pub fn correlation(points: &PointSet) -> Result<f64> {
    labelled_correlation(points, "sample")
}

fn labelled_correlation(points: &PointSet, name: &str) -> Result<f64> {
    let xs: Vec<f64> = points.xs().collect();
    let ys: Vec<f64> = points.ys().collect();
    let sx = xs.iter().std_dev();
    let sy = ys.iter().std_dev();
    for (axis, s) in [("x", sx), ("y", sy)] {
        // The deviation is NaN for fewer than two points.
        if s.is_nan() || s <= 0.0 {
            return Err(Ks2dError::DegenerateInput(format!(
                "{} has no variance in {} across {} point(s); correlation is undefined",
                name,
                axis,
                points.len()
            )));
        }
    }
    let r = xs.iter().covariance(ys.iter()) / (sx * sy);
    Ok(r.clamp(-1.0, 1.0))
}
