// A two-dimensional, two-sample Kolmogorov-Smirnov test.
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

//! Tests whether two samples of points in the plane come from the same
//! bivariate distribution.
//!
//! ```
//! use ks2d::{ks2d2s, PointSet};
//!
//! let a = PointSet::from_table(&[[0.1, 0.2], [0.4, 0.1], [0.5, 0.7], [0.9, 0.6], [0.3, 0.8]])?;
//! // Column-major input: all x values, then all y values.
//! let b = PointSet::from_table(&[[0.2, 0.6, 0.8, 0.7], [0.3, 0.5, 0.9, 0.2]])?;
//! let result = ks2d2s(&a, &b)?;
//! assert!(!result.rejects_at(0.05));
//! # Ok::<(), ks2d::Ks2dError>(())
//! ```

#[macro_use]
extern crate log;

mod error;
mod ks2d;
pub mod kstest;
#[cfg(feature = "plot")]
pub mod plot;
mod points;
pub mod quadrant;

pub use crate::error::{Ks2dError, Result};
pub use crate::ks2d::{correlation, ks2d2s, ks2d2s_with, Ks2dOptions, Ks2dResult};
pub use crate::kstest::{qks, qks_with, SeriesOptions};
pub use crate::points::{Point, PointSet};
pub use crate::quadrant::{count_quads, count_quads_in, QuadrantFractions};
