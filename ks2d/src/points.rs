// Points in the plane, and the validated point sets the tests run on.
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
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::slice::Iter;

#[derive(Debug, Copy, Clone, PartialOrd, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    /// Returns the point if both coordinates are finite.
    pub fn finite(self) -> Result<Point> {
        to_finite(&self.x)?;
        to_finite(&self.y)?;
        Ok(self)
    }

    /// Builds a point from exactly two numeric values.
    pub fn from_slice<T: ToPrimitive>(values: &[T]) -> Result<Point> {
        match values {
            [x, y] => Ok(Point::new(to_finite(x)?, to_finite(y)?)),
            _ => Err(Ks2dError::InvalidArgument(format!(
                "a point needs 2 coordinates, found {}",
                values.len()
            ))),
        }
    }

    /// Builds a point from a table holding exactly two values in total,
    /// whatever its orientation: `[[x, y]]` and `[[x], [y]]` are both accepted.
    pub fn from_table<R, T>(rows: &[R]) -> Result<Point>
    where
        R: AsRef<[T]>,
        T: ToPrimitive,
    {
        let flat: Vec<&T> = rows.iter().flat_map(|r| r.as_ref().iter()).collect();
        match flat.as_slice() {
            [x, y] => Ok(Point::new(to_finite(*x)?, to_finite(*y)?)),
            _ => Err(Ks2dError::InvalidArgument(format!(
                "a point needs 2 coordinates, found {}",
                flat.len()
            ))),
        }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

fn to_finite<T: ToPrimitive>(value: &T) -> Result<f64> {
    match value.to_f64() {
        Some(v) if v.is_finite() => Ok(v),
        Some(v) => Err(Ks2dError::InvalidArgument(format!(
            "coordinate {v} is not finite"
        ))),
        None => Err(Ks2dError::InvalidArgument(
            "coordinate is not representable as a number".to_string(),
        )),
    }
}

/// A non-empty collection of points.
///
/// Every constructor checks its input once, so code that receives a
/// `PointSet` can rely on it holding at least one point with finite
/// coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    pub fn new(points: Vec<Point>) -> Result<PointSet> {
        if points.is_empty() {
            return Err(Ks2dError::DegenerateInput("point set is empty".to_string()));
        }
        for p in &points {
            p.finite()?;
        }
        Ok(PointSet { points })
    }

    pub fn from_pairs<I, T>(pairs: I) -> Result<PointSet>
    where
        I: IntoIterator<Item = (T, T)>,
        T: ToPrimitive,
    {
        let points = pairs
            .into_iter()
            .map(|(x, y)| -> Result<Point> { Ok(Point::new(to_finite(&x)?, to_finite(&y)?)) })
            .collect::<Result<Vec<Point>>>()?;
        PointSet::new(points)
    }

    /// Builds a point set from a numeric table.
    ///
    /// The table is normally N rows of `[x, y]`. If it has more columns than
    /// rows it is read as column-major instead (a row of x values followed by a
    /// row of y values), so both orientations describe the same points. A
    /// square 2x2 table is read row-major. A single point may be given as
    /// `[[x, y]]` or `[[x], [y]]`.
    pub fn from_table<R, T>(rows: &[R]) -> Result<PointSet>
    where
        R: AsRef<[T]>,
        T: ToPrimitive,
    {
        let width = match rows.first() {
            Some(r) => r.as_ref().len(),
            None => return Err(Ks2dError::DegenerateInput("point set is empty".to_string())),
        };
        if let Some((i, r)) = rows
            .iter()
            .enumerate()
            .find(|(_, r)| r.as_ref().len() != width)
        {
            return Err(Ks2dError::InvalidArgument(format!(
                "ragged table: row {} has {} values, expected {}",
                i,
                r.as_ref().len(),
                width
            )));
        }

        let column_major = match (rows.len(), width) {
            (1, 2) => false,
            (2, 1) => true,
            (n, w) => w > n,
        };
        let (count, dims) = if column_major {
            (width, rows.len())
        } else {
            (rows.len(), width)
        };
        if dims != 2 {
            return Err(Ks2dError::InvalidArgument(format!(
                "expected 2 coordinates per point, found {dims}"
            )));
        }

        let mut points = Vec::with_capacity(count);
        for i in 0..count {
            let (x, y) = if column_major {
                (&rows[0].as_ref()[i], &rows[1].as_ref()[i])
            } else {
                let r = rows[i].as_ref();
                (&r[0], &r[1])
            };
            points.push(Point::new(to_finite(x)?, to_finite(y)?));
        }
        PointSet::new(points)
    }

    /// The number of points, N.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; a `PointSet` cannot be constructed empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Point {
        self.points[0]
    }

    pub fn iter(&self) -> Iter<'_, Point> {
        self.points.iter()
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    pub fn xs(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.x)
    }

    pub fn ys(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.y)
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl Serialize for PointSet {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.points.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PointSet {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let points = Vec::<Point>::deserialize(deserializer)?;
        PointSet::new(points).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_major_table() {
        let s = PointSet::from_table(&[[0.0, 1.0], [2.0, 3.0], [4.0, 5.0]]).unwrap();
        assert_eq!(s.len(), 3);
        assert_eq!(
            s.as_slice(),
            &[
                Point::new(0.0, 1.0),
                Point::new(2.0, 3.0),
                Point::new(4.0, 5.0)
            ]
        );
    }

    #[test]
    fn column_major_table_is_transposed() {
        let rows = PointSet::from_table(&[[0.0, 1.0], [2.0, 3.0], [4.0, 5.0]]).unwrap();
        let cols = PointSet::from_table(&[vec![0.0, 2.0, 4.0], vec![1.0, 3.0, 5.0]]).unwrap();
        assert_eq!(rows, cols);
    }

    #[test]
    fn square_table_is_row_major() {
        let s = PointSet::from_table(&[[1, 2], [3, 4]]).unwrap();
        assert_eq!(s.as_slice(), &[Point::new(1.0, 2.0), Point::new(3.0, 4.0)]);
    }

    #[test]
    fn integer_tables_are_accepted() {
        let s = PointSet::from_table(&[vec![1u32, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(s.as_slice()[2], Point::new(3.0, 6.0));
    }

    #[test]
    fn empty_table() {
        let empty: [[f64; 2]; 0] = [];
        assert!(matches!(
            PointSet::from_table(&empty),
            Err(Ks2dError::DegenerateInput(_))
        ));
        assert!(matches!(
            PointSet::new(vec![]),
            Err(Ks2dError::DegenerateInput(_))
        ));
    }

    #[test]
    fn ragged_table() {
        let rows = vec![vec![0.0, 1.0], vec![2.0], vec![3.0, 4.0]];
        assert!(matches!(
            PointSet::from_table(&rows),
            Err(Ks2dError::InvalidArgument(_))
        ));
    }

    #[test]
    fn wrong_dimension() {
        let rows = [[0.0, 1.0, 2.0], [3.0, 4.0, 5.0], [6.0, 7.0, 8.0]];
        assert!(matches!(
            PointSet::from_table(&rows),
            Err(Ks2dError::InvalidArgument(_))
        ));
        assert!(matches!(
            PointSet::from_table(&[[0.0], [1.0], [2.0]]),
            Err(Ks2dError::InvalidArgument(_))
        ));
        assert!(matches!(
            PointSet::from_table(&[[0.0, 1.0, 2.0]]),
            Err(Ks2dError::InvalidArgument(_))
        ));
    }

    #[test]
    fn single_point_table() {
        let expected = [Point::new(0.25, 0.75)];
        let rows = PointSet::from_table(&[[0.25, 0.75]]).unwrap();
        assert_eq!(rows.as_slice(), &expected);
        let cols = PointSet::from_table(&[[0.25], [0.75]]).unwrap();
        assert_eq!(cols.as_slice(), &expected);
    }

    #[test]
    fn non_finite_values() {
        assert!(matches!(
            PointSet::from_table(&[[0.0, f64::NAN], [1.0, 2.0]]),
            Err(Ks2dError::InvalidArgument(_))
        ));
        assert!(matches!(
            PointSet::from_pairs(vec![(0.0, 1.0), (f64::INFINITY, 2.0)]),
            Err(Ks2dError::InvalidArgument(_))
        ));
        assert!(matches!(
            PointSet::new(vec![Point::new(f64::NAN, 0.0)]),
            Err(Ks2dError::InvalidArgument(_))
        ));
    }

    #[test]
    fn pivots() {
        assert_eq!(Point::from_slice(&[0.1, 0.5]).unwrap(), Point::new(0.1, 0.5));
        assert_eq!(
            Point::from_table(&[[0.1], [0.5]]).unwrap(),
            Point::new(0.1, 0.5)
        );
        assert_eq!(Point::from_table(&[[0.1, 0.5]]).unwrap(), Point::new(0.1, 0.5));
        assert!(matches!(
            Point::from_slice(&[0.1]),
            Err(Ks2dError::InvalidArgument(_))
        ));
        assert!(matches!(
            Point::from_slice(&[0.1, 0.2, 0.3]),
            Err(Ks2dError::InvalidArgument(_))
        ));
        assert!(matches!(
            Point::from_table(&[[0.1, 0.5], [0.2, 0.3]]),
            Err(Ks2dError::InvalidArgument(_))
        ));
    }

    #[test]
    fn deserialize_rejects_empty() {
        let s: PointSet = serde_json::from_str(r#"[{"x":1.0,"y":2.0}]"#).unwrap();
        assert_eq!(s.len(), 1);
        assert!(serde_json::from_str::<PointSet>("[]").is_err());
    }
}
