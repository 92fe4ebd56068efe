// The asymptotic distribution of the Kolmogorov-Smirnov statistic.
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

use serde::{Deserialize, Serialize};

/// Controls how far the series in [`qks_with`] is summed.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesOptions {
    /// The loop counter starts at 1; once it reaches this value the series is
    /// considered non-convergent. At most `max_iter - 1` terms are summed.
    pub max_iter: usize,
    /// Summation stops once the magnitude of the last term added is at or below this.
    pub tolerance: f64,
}

impl Default for SeriesOptions {
    fn default() -> Self {
        SeriesOptions {
            max_iter: 101,
            tolerance: 1e-6,
        }
    }
}

/// Calculates the Kolmogorov-Smirnov probability function,
///
///   Q(λ) = 2 Σ_{j≥1} (-1)^(j-1) exp(-2 j² λ²)
///
/// which gives the significance of an observed (scaled) KS distance λ under
/// the null hypothesis. See Numerical Recipes in C, 2nd ed., p. 623.
///
/// This uses the default [`SeriesOptions`].
pub fn qks(lambda: f64) -> f64 {
    qks_with(lambda, &SeriesOptions::default())
}

/// Calculates the Kolmogorov-Smirnov probability function with explicit series options.
///
/// `lambda` should be non-negative; the series only depends on λ².
///
/// NOTE: When the loop counter reaches `options.max_iter` the result is 1.0,
/// no matter what the partial sum was. Small λ converge too slowly for the
/// default cap, and 1.0 ("cannot reject") is the conservative answer there.
/// Otherwise the partial sum is returned as is, without clamping; for small
/// λ it may exceed 1.0 by up to `options.tolerance`.
pub fn qks_with(lambda: f64, options: &SeriesOptions) -> f64 {
    if lambda == 0.0 {
        return 1.0;
    }
    let l2 = lambda * lambda;
    let mut sum = 0.0;
    let mut term: f64 = 1.0;
    let mut sign = 2.0;
    let mut j: usize = 1;
    while j < options.max_iter && term.abs() > options.tolerance {
        let jf = j as f64;
        term = sign * (-2.0 * (jf * jf) * l2).exp();
        sum += term;
        sign = -sign;
        j += 1;
    }
    if j == options.max_iter {
        warn!(
            "KS series for lambda = {} did not converge within {} iterations",
            lambda, options.max_iter
        );
        return 1.0;
    }
    sum
}
