// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Bridge to the `image` crate
//!
//! Anything `image` can decode is brought in as 8-bit luma and carved
//! like a graymap with a maximum value of 255.  Going the other way,
//! samples are clamped to the graymap's range and rescaled to 8 bits.

use crate::error::PgmError;
use crate::grid::Grid;
use crate::pgm::PgmImage;
use image::GrayImage;
use num_traits::clamp;
use std::convert::TryFrom;
use std::path::Path;

fn image_error<E: ToString>(err: E) -> PgmError {
    PgmError::Image(err.to_string())
}

fn to_u32(value: usize) -> Result<u32, PgmError> {
    u32::try_from(value).map_err(image_error)
}

pub fn grid_from_luma(image: GrayImage) -> Result<Grid<i32>, PgmError> {
    let (width, height) = image.dimensions();
    let samples = image.into_raw().into_iter().map(i32::from).collect();
    Ok(Grid::from_vec(width as usize, height as usize, samples)?)
}

/// Rescale `[0, max_value]` onto `[0, 255]`; samples outside the range
/// are clamped first.
pub fn grid_to_luma(grid: &Grid<i32>, max_value: i32) -> Result<GrayImage, PgmError> {
    if max_value <= 0 {
        return Err(PgmError::BadMaxValue(max_value.to_string()));
    }
    let max_value = i64::from(max_value);
    let samples = grid
        .iter()
        .map(|sample| (clamp(i64::from(*sample), 0, max_value) * 255 / max_value) as u8)
        .collect();
    GrayImage::from_raw(to_u32(grid.width())?, to_u32(grid.height())?, samples)
        .ok_or_else(|| image_error("sample buffer does not match dimensions"))
}

/// Render an energy map, brightest where the energy is highest.  A map
/// with no energy anywhere comes out black.
pub fn energy_to_luma(energy: &Grid<i32>) -> Result<GrayImage, PgmError> {
    let factor = energy.iter().copied().max().unwrap_or(0).max(1);
    grid_to_luma(energy, factor)
}

pub fn load_raster<P: AsRef<Path>>(path: P) -> Result<PgmImage, PgmError> {
    let image = image::open(path).map_err(image_error)?;
    Ok(PgmImage::new(grid_from_luma(image.to_luma())?, 255))
}

pub fn save_raster<P: AsRef<Path>>(image: &PgmImage, path: P) -> Result<(), PgmError> {
    grid_to_luma(&image.grid, image.max_value)?
        .save(path)
        .map_err(image_error)
}
