// Reads point samples from CSV files.
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

use flate2::read::GzDecoder;
use ks2d::PointSet;
use std::{
    error::Error,
    fs::File,
    io::{self, BufReader, Read},
};

/// Opens a file for reading, automatically decompressing it if it ends in ".gz".
pub fn open_gzip_or_regular_file(path: &str) -> Result<BufReader<Box<dyn Read>>, io::Error> {
    let f = File::open(path)?;
    Ok(if path.ends_with(".gz") {
        BufReader::new(Box::new(GzDecoder::new(f)))
    } else {
        BufReader::new(Box::new(f))
    })
}

/// Reads a table of numbers from CSV. Every cell must parse as a number;
/// rows may differ in length here and are checked when the table is turned
/// into points.
pub fn read_table<R: Read>(reader: R, has_headers: bool) -> Result<Vec<Vec<f64>>, csv::Error> {
    csv::ReaderBuilder::new()
        .has_headers(has_headers)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader)
        .deserialize::<Vec<f64>>()
        .collect()
}

/// Reads a point sample from a CSV file, in either orientation.
pub fn read_sample(path: &str, has_headers: bool) -> Result<PointSet, Box<dyn Error>> {
    let reader = open_gzip_or_regular_file(path)?;
    let table = read_table(reader, has_headers)?;
    debug!("read {} rows from {}", table.len(), path);
    Ok(PointSet::from_table(&table)?)
}
