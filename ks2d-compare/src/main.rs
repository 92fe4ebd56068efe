// Compares two samples of points with the 2D Kolmogorov-Smirnov test.
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

#[macro_use]
extern crate log;

mod input;

use clap::Parser;
use env_logger::Env;
use ks2d::{plot, ks2d2s_with, Ks2dOptions, Ks2dResult, Point, PointSet, SeriesOptions};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::Serialize;
use std::{error::Error, ops::Range, path::PathBuf, process::ExitCode};

#[derive(Parser)]
struct Cli {
    /// CSV file with the first sample: one "x,y" row per point, or a row of
    /// x values followed by a row of y values. Gzip is supported for ".gz" files.
    #[arg(value_hint = clap::ValueHint::FilePath, required_unless_present = "demo")]
    sample_a: Option<String>,

    /// CSV file with the second sample, in the same format.
    #[arg(value_hint = clap::ValueHint::FilePath, required_unless_present = "demo")]
    sample_b: Option<String>,

    /// The input files have no header row.
    #[arg(long)]
    no_headers: bool,

    /// Compare two randomly generated samples instead of reading files.
    #[arg(long, conflicts_with_all = ["sample_a", "sample_b"])]
    demo: bool,

    /// With --demo, draw the second sample from [0.2, 0.5]² instead of the unit square.
    // Not `requires = "demo"`: the default of a SetTrue flag satisfies that.
    #[arg(long, conflicts_with_all = ["sample_a", "sample_b"])]
    shifted: bool,

    /// Number of points in each generated sample.
    #[arg(long, default_value_t = 100)]
    size: usize,

    /// Seed for the generated samples. Random if not given.
    #[arg(long)]
    seed: Option<u64>,

    /// Significance level used to report whether the samples differ.
    #[arg(short, long, default_value_t = 0.05)]
    alpha: f64,

    /// Iteration cap for the probability series.
    #[arg(long, default_value_t = 101)]
    max_iter: usize,

    /// Convergence tolerance for the probability series.
    #[arg(long, default_value_t = 1e-6)]
    tolerance: f64,

    /// Print the result as JSON.
    #[arg(long)]
    json: bool,

    /// Write a PNG showing the first sample split into quadrants.
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    plot: Option<PathBuf>,

    /// Pivot for --plot as "X,Y". Defaults to the first point of the first sample.
    #[arg(long, requires = "plot", value_parser = parse_pivot, allow_hyphen_values = true)]
    pivot: Option<Point>,
}

#[derive(Serialize)]
struct Report {
    #[serde(flatten)]
    result: Ks2dResult,
    alpha: f64,
    rejected: bool,
}

fn parse_pivot(s: &str) -> Result<Point, String> {
    let values = s
        .split(',')
        .map(|v| v.trim().parse::<f64>().map_err(|e| format!("{v:?}: {e}")))
        .collect::<Result<Vec<f64>, String>>()?;
    Point::from_slice(&values).map_err(|e| e.to_string())
}

fn uniform_sample(rng: &mut SmallRng, n: usize, range: Range<f64>) -> ks2d::Result<PointSet> {
    PointSet::from_pairs(
        (0..n).map(|_| (rng.gen_range(range.clone()), rng.gen_range(range.clone()))),
    )
}

fn demo_samples(args: &Cli) -> ks2d::Result<(PointSet, PointSet)> {
    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    let a = uniform_sample(&mut rng, args.size, 0.0..1.0)?;
    let b = if args.shifted {
        uniform_sample(&mut rng, args.size, 0.2..0.5)?
    } else {
        uniform_sample(&mut rng, args.size, 0.0..1.0)?
    };
    Ok((a, b))
}

fn run(args: &Cli) -> Result<(), Box<dyn Error>> {
    let (a, b) = if args.demo {
        demo_samples(args)?
    } else {
        match (&args.sample_a, &args.sample_b) {
            (Some(pa), Some(pb)) => (
                input::read_sample(pa, !args.no_headers)?,
                input::read_sample(pb, !args.no_headers)?,
            ),
            _ => return Err("two sample files are required unless --demo is given".into()),
        }
    };
    info!("sample A: {} points, sample B: {} points", a.len(), b.len());

    let options = Ks2dOptions {
        series: SeriesOptions {
            max_iter: args.max_iter,
            tolerance: args.tolerance,
        },
    };
    let result = ks2d2s_with(&a, &b, &options)?;
    let report = Report {
        result,
        alpha: args.alpha,
        rejected: result.rejects_at(args.alpha),
    };
    if args.json {
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("D           = {:.6}", result.statistic);
        println!("probability = {:.6}", result.probability);
        if report.rejected {
            println!("the samples differ at significance level {}", args.alpha);
        } else {
            println!(
                "cannot reject that the samples share a distribution at significance level {}",
                args.alpha
            );
        }
    }

    if let Some(path) = &args.plot {
        let pivot = args.pivot.unwrap_or_else(|| a.first());
        plot::render_quadrants(&a, pivot, path)?;
        info!("wrote quadrant plot to {}", path.display());
    }
    Ok(())
}

fn main() -> ExitCode {
    // Parse command-line arguments
    let args = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn pivots() {
        assert_eq!(parse_pivot("0.1,0.5").unwrap(), Point::new(0.1, 0.5));
        assert_eq!(parse_pivot(" -1 , 2.5 ").unwrap(), Point::new(-1.0, 2.5));
        assert!(parse_pivot("0.1").is_err());
        assert!(parse_pivot("0.1,0.2,0.3").is_err());
        assert!(parse_pivot("a,0.2").is_err());
    }

    #[test]
    fn demo_arguments() {
        let args = Cli::try_parse_from(["ks2d-compare", "--demo", "--shifted", "--seed", "7"]).unwrap();
        let (a, b) = demo_samples(&args).unwrap();
        assert_eq!(a.len(), 100);
        assert_eq!(b.len(), 100);
        assert!(b.iter().all(|p| (0.2..0.5).contains(&p.x) && (0.2..0.5).contains(&p.y)));

        // Same seed, same samples.
        let (c, d) = demo_samples(&args).unwrap();
        assert_eq!(a, c);
        assert_eq!(b, d);
    }

    #[test]
    fn files_are_required_without_demo() {
        assert!(Cli::try_parse_from(["ks2d-compare"]).is_err());
        assert!(Cli::try_parse_from(["ks2d-compare", "a.csv", "b.csv"]).is_ok());
        assert!(Cli::try_parse_from(["ks2d-compare", "--demo", "a.csv"]).is_err());
        assert!(Cli::try_parse_from(["ks2d-compare", "a.csv", "b.csv", "--shifted"]).is_err());
        assert!(Cli::try_parse_from(["ks2d-compare", "--shifted", "a.csv", "b.csv"]).is_err());
        assert!(Cli::try_parse_from(["ks2d-compare", "--shifted"]).is_err());
    }

    #[test]
    fn shifted_demo_is_rejected() {
        let args = Cli::try_parse_from(["ks2d-compare", "--demo", "--shifted", "--seed", "1"]).unwrap();
        let (a, b) = demo_samples(&args).unwrap();
        let options = Ks2dOptions::default();
        assert!(ks2d2s_with(&a, &b, &options).unwrap().rejects_at(0.05));
    }

    #[test]
    fn report_json() {
        let report = Report {
            result: Ks2dResult {
                statistic: 0.5,
                probability: 0.01,
                lambda: 2.0,
            },
            alpha: 0.05,
            rejected: true,
        };
        assert_eq!(
            serde_json::to_string(&report).unwrap(),
            r#"{"statistic":0.5,"probability":0.01,"lambda":2.0,"alpha":0.05,"rejected":true}"#
        );
    }
}
