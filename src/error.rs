// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors
//!
//! Carving errors and codec errors are kept apart: a bad file is never
//! reported as a carving failure, and vice versa.

use crate::mode::CarvingMode;
use failure::Fail;
use std::io;

/// Everything that can go wrong while addressing a grid or carving it.
#[derive(Debug, Fail)]
pub enum CarveError {
    #[fail(
        display = "coordinate ({}, {}) is outside a {}x{} grid",
        x, y, width, height
    )]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[fail(display = "expected {} samples, got {}", expected, actual)]
    SizeMismatch { expected: usize, actual: usize },

    #[fail(
        display = "cost map is {}x{} but the grid is {}x{}",
        cost_width, cost_height, width, height
    )]
    DimensionMismatch {
        width: usize,
        height: usize,
        cost_width: usize,
        cost_height: usize,
    },

    #[fail(display = "cannot grow a dimension from {} to {}", current, requested)]
    GrowDimension { current: usize, requested: usize },

    #[fail(
        display = "cannot remove {} {} seams from a dimension of {}",
        count, mode, available
    )]
    OverRemoval {
        mode: CarvingMode,
        count: usize,
        available: usize,
    },

    #[fail(display = "unrecognized carving mode: {:?}", _0)]
    InvalidMode(String),

    #[fail(
        display = "seamcarve cannot upscale {}x{} to {}x{}",
        width, height, new_width, new_height
    )]
    Upscale {
        width: usize,
        height: usize,
        new_width: usize,
        new_height: usize,
    },
}

/// Failures reading or writing image files.
#[derive(Debug, Fail)]
pub enum PgmError {
    #[fail(display = "i/o error: {}", _0)]
    Io(#[cause] io::Error),

    #[fail(display = "graymap has no header line")]
    MissingHeader,

    #[fail(display = "unsupported graymap format: {:?}", _0)]
    UnsupportedFormat(String),

    #[fail(display = "graymap dimensions invalid: {:?}", _0)]
    BadDimensions(String),

    #[fail(display = "graymap maximum value invalid: {:?}", _0)]
    BadMaxValue(String),

    #[fail(display = "graymap sample invalid: {:?}", _0)]
    BadSample(String),

    #[fail(
        display = "not enough samples to fill the graymap: expected {}, got {}",
        expected, actual
    )]
    NotEnoughData { expected: usize, actual: usize },

    #[fail(display = "image error: {}", _0)]
    Image(String),

    #[fail(display = "{}", _0)]
    Grid(#[cause] CarveError),
}

impl From<io::Error> for PgmError {
    fn from(err: io::Error) -> Self {
        PgmError::Io(err)
    }
}

impl From<CarveError> for PgmError {
    fn from(err: CarveError) -> Self {
        PgmError::Grid(err)
    }
}

pub type CarveResult<T> = Result<T, CarveError>;
