// Errors reported by the two-dimensional Kolmogorov-Smirnov test.
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

use thiserror::Error;

/// Errors that can be raised while preparing or running a test.
///
/// Both variants are raised before any statistics are computed, so a caller
/// never sees a partial result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Ks2dError {
    /// A point set or pivot has the wrong shape, or holds something that is not a finite number.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The input is well formed but the statistic is undefined for it,
    /// e.g. an empty sample or a coordinate with no variance.
    #[error("degenerate input: {0}")]
    DegenerateInput(String),
}

pub type Result<T> = std::result::Result<T, Ks2dError>;
