// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Plain-text graymaps
//!
//! Reads and writes the ASCII ("P2") flavour of the portable graymap
//! format.  The header line and the maximum value are carried along
//! untouched so that a load, carve, save cycle changes nothing but
//! the samples and the dimensions.
//!
//! The reader is line oriented: after skipping comments and blank
//! lines, the first line is the header, the second holds the width
//! and height, the third the maximum value, and everything after that
//! is samples.

use crate::error::PgmError;
use crate::grid::Grid;
use itertools::Itertools;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

const MAGIC: &str = "P2";
const SAMPLES_PER_LINE: usize = 15;
/// Largest maximum value a graymap may declare (16 bits per sample).
pub const MAX_MAX_VALUE: i32 = 65535;

#[derive(Debug, Clone, PartialEq)]
pub struct PgmImage {
    /// The header line, magic number first, exactly as read.
    pub header: String,
    pub max_value: i32,
    pub grid: Grid<i32>,
}

fn is_skippable(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line.starts_with('#')
}

fn parse_numbers<N: FromStr>(line: &str) -> Option<Vec<N>> {
    line.split_whitespace().map(|token| token.parse().ok()).collect()
}

impl PgmImage {
    pub fn new(grid: Grid<i32>, max_value: i32) -> Self {
        PgmImage {
            header: MAGIC.to_string(),
            max_value,
            grid,
        }
    }

    /// The same header and maximum value around a different grid.
    pub fn with_grid(&self, grid: Grid<i32>) -> Self {
        PgmImage {
            header: self.header.clone(),
            max_value: self.max_value,
            grid,
        }
    }

    pub fn read<R: BufRead>(reader: R) -> Result<Self, PgmError> {
        let mut lines = reader.lines().filter(|line| match line {
            Ok(line) => !is_skippable(line),
            Err(_) => true,
        });

        let header = lines.next().ok_or(PgmError::MissingHeader)??;
        let header = header.trim_end().to_string();
        if header.split_whitespace().next() != Some(MAGIC) {
            return Err(PgmError::UnsupportedFormat(header));
        }

        let size = lines
            .next()
            .ok_or_else(|| PgmError::BadDimensions(String::new()))??;
        let (width, height) = match parse_numbers::<usize>(&size).as_ref().map(Vec::as_slice) {
            Some([width, height]) => (*width, *height),
            _ => return Err(PgmError::BadDimensions(size)),
        };
        let expected = width
            .checked_mul(height)
            .ok_or_else(|| PgmError::BadDimensions(size.clone()))?;

        let maxval = lines
            .next()
            .ok_or_else(|| PgmError::BadMaxValue(String::new()))??;
        let max_value = match parse_numbers::<i32>(&maxval).as_ref().map(Vec::as_slice) {
            Some([max_value]) if (1..=MAX_MAX_VALUE).contains(max_value) => *max_value,
            _ => return Err(PgmError::BadMaxValue(maxval)),
        };

        let mut samples = Vec::new();
        for line in lines {
            if samples.len() == expected {
                break;
            }
            for token in line?.split_whitespace().take(expected - samples.len()) {
                match token.parse::<i32>() {
                    Ok(sample) if (0..=max_value).contains(&sample) => samples.push(sample),
                    _ => return Err(PgmError::BadSample(token.to_string())),
                }
            }
        }
        if samples.len() < expected {
            return Err(PgmError::NotEnoughData {
                expected,
                actual: samples.len(),
            });
        }

        Ok(PgmImage {
            header,
            max_value,
            grid: Grid::from_vec(width, height, samples)?,
        })
    }

    /// Write the graymap, optionally with a comment line after the
    /// header.  Samples are written row-major, fifteen to a line.
    pub fn write<W: Write>(&self, mut out: W, comment: Option<&str>) -> Result<(), PgmError> {
        writeln!(out, "{}", self.header)?;
        if let Some(comment) = comment {
            writeln!(out, "# {}", comment)?;
        }
        writeln!(out, "{} {}", self.grid.width(), self.grid.height())?;
        writeln!(out, "{}", self.max_value)?;
        for line in &self.grid.iter().chunks(SAMPLES_PER_LINE) {
            for sample in line {
                write!(out, "{} ", sample)?;
            }
            writeln!(out)?;
        }
        out.flush()?;
        Ok(())
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PgmError> {
        PgmImage::read(BufReader::new(File::open(path)?))
    }

    /// Save to `path`, with an optional comment line after the header.
    pub fn save<P: AsRef<Path>>(&self, path: P, comment: Option<&str>) -> Result<(), PgmError> {
        self.write(BufWriter::new(File::create(path)?), comment)
    }
}
