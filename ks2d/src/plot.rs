// Diagnostic rendering of a quadrant split.
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

use crate::points::{Point, PointSet};
use crate::quadrant::split;
use plotters::prelude::*;
use std::error::Error;
use std::ops::Range;
use std::path::Path;

/// Colours for the ++, -+, +- and -- quadrants, in that order.
const QUADRANT_COLORS: [RGBColor; 4] = [BLUE, GREEN, CYAN, YELLOW];

fn padded(lo: f64, hi: f64) -> Range<f64> {
    let pad = if hi > lo { (hi - lo) * 0.05 } else { 1.0 };
    (lo - pad)..(hi + pad)
}

fn bounds(points: &PointSet, pivot: Point) -> (Range<f64>, Range<f64>) {
    let (mut x0, mut x1, mut y0, mut y1) = (pivot.x, pivot.x, pivot.y, pivot.y);
    for p in points {
        x0 = x0.min(p.x);
        x1 = x1.max(p.x);
        y0 = y0.min(p.y);
        y1 = y1.max(p.y);
    }
    (padded(x0, x1), padded(y0, y1))
}

/// Renders `points` split into quadrants around `pivot` as a PNG at `path`.
///
/// All points are drawn in black first, then each quadrant in its own colour,
/// so a point counted in several quadrants shows the colour of the last one.
/// The pivot and the dividing lines are red. This has no effect on any
/// statistic.
pub fn render_quadrants(points: &PointSet, pivot: Point, path: &Path) -> Result<(), Box<dyn Error>> {
    let (xr, yr) = bounds(points, pivot);
    let root = BitMapBackend::new(path, (1000, 1000)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Quadrants around ({:.3}, {:.3})", pivot.x, pivot.y),
            ("sans-serif", 20),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(xr.clone(), yr.clone())?;

    chart.configure_mesh().x_desc("x").y_desc("y").draw()?;

    chart.draw_series(
        points
            .iter()
            .map(|p| Circle::new((p.x, p.y), 3, BLACK.filled())),
    )?;
    for (part, color) in split(points, pivot).iter().zip(QUADRANT_COLORS) {
        chart.draw_series(part.iter().map(|p| Circle::new((p.x, p.y), 3, color.filled())))?;
    }

    chart.draw_series(LineSeries::new(
        vec![(pivot.x, yr.start), (pivot.x, yr.end)],
        &RED,
    ))?;
    chart.draw_series(LineSeries::new(
        vec![(xr.start, pivot.y), (xr.end, pivot.y)],
        &RED,
    ))?;
    chart.draw_series(std::iter::once(Circle::new(
        (pivot.x, pivot.y),
        5,
        RED.filled(),
    )))?;

    root.present()?;
    debug!("wrote quadrant plot to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::SmallRng, Rng, SeedableRng};
    use std::fs::File;

    #[test]
    fn bounds_include_pivot() {
        let s = PointSet::from_pairs(vec![(0.0, 0.0), (1.0, 1.0)]).unwrap();
        let (xr, yr) = bounds(&s, Point::new(2.0, -1.0));
        assert!(xr.start < 0.0 && xr.end > 2.0);
        assert!(yr.start < -1.0 && yr.end > 1.0);
        let single = PointSet::from_pairs(vec![(3.0, 3.0)]).unwrap();
        let (xr, _) = bounds(&single, Point::new(3.0, 3.0));
        assert_eq!(xr, 2.0..4.0);
    }

    #[test]
    #[ignore]
    fn plot_quadrants_png() {
        let mut rng = SmallRng::seed_from_u64(2018);
        let s = PointSet::from_pairs((0..100).map(|_| (rng.gen::<f64>(), rng.gen::<f64>()))).unwrap();
        let out_path = Path::new("target/test_quadrant_split.png");
        render_quadrants(&s, Point::new(0.1, 0.5), out_path).unwrap();
        assert!(File::open(out_path).is_ok());
    }
}
