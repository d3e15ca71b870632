// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The main function
//!
//! The main seamcarver routine.  Every pass recomputes the energy and
//! cost maps from the current, already-shrunk working grid and takes
//! out exactly one seam; seams are never batched.

use crate::cost::compute_cost;
use crate::energy::{compute_energy, Sample};
use crate::error::{CarveError, CarveResult};
use crate::grid::Grid;
use crate::mode::CarvingMode;
use crate::pgm::PgmImage;
use crate::seam::remove_seam;
use log::{debug, trace};

fn carveonce<T: Sample>(grid: &mut Grid<T>, mode: CarvingMode) -> CarveResult<Vec<usize>> {
    let energy = compute_energy(grid)?;
    let cost = compute_cost(&energy, mode)?;
    remove_seam(grid, &cost, mode)
}

/// A struct for holding the grid to be carved.  The grid is only ever
/// read; every carve works on its own private copy.
pub struct SeamCarver<'a, T: Sample> {
    grid: &'a Grid<T>,
}

impl<'a, T: Sample> SeamCarver<'a, T> {
    /// Creates a new SeamCarver with a grid to be carved.
    pub fn new(grid: &'a Grid<T>) -> Self {
        Self { grid }
    }

    /// Remove `count` seams of one orientation.  Removing as many
    /// seams as the perpendicular dimension has slots (or more) is
    /// refused up front, before any work is done.
    pub fn carve(&self, mode: CarvingMode, count: usize) -> CarveResult<Grid<T>> {
        let available = mode.perpendicular_len(self.grid);
        if count > 0 && count >= available {
            return Err(CarveError::OverRemoval {
                mode,
                count,
                available,
            });
        }

        let mut scratch = self.grid.clone();
        for pass in 0..count {
            let seam = carveonce(&mut scratch, mode)?;
            trace!("{} seam {:?}", mode, seam);
            debug!(
                "{} seam {}/{} removed, now {}x{}",
                mode,
                pass + 1,
                count,
                scratch.width(),
                scratch.height()
            );
        }
        Ok(scratch)
    }

    /// Given a desired new width and height, repeatedly carve seams
    /// out of the grid.  While both dimensions are too large the
    /// orientation alternates, starting vertical; whichever dimension
    /// is left over is then finished on its own.
    pub fn carve_to(&self, new_width: usize, new_height: usize) -> CarveResult<Grid<T>> {
        let (mut width, mut height) = self.grid.dimensions();
        if width < new_width || height < new_height {
            return Err(CarveError::Upscale {
                width,
                height,
                new_width,
                new_height,
            });
        }
        if new_width == 0 && width > 0 {
            return Err(CarveError::OverRemoval {
                mode: CarvingMode::Vertical,
                count: width,
                available: width,
            });
        }
        if new_height == 0 && height > 0 {
            return Err(CarveError::OverRemoval {
                mode: CarvingMode::Horizontal,
                count: height,
                available: height,
            });
        }

        let mut direction = CarvingMode::Vertical;
        let mut scratch = self.grid.clone();

        while width > new_width && height > new_height {
            carveonce(&mut scratch, direction)?;
            direction = direction.turn();
            width = scratch.width();
            height = scratch.height();
            debug!("B: {}, {}", width, height);
        }
        while width > new_width {
            carveonce(&mut scratch, CarvingMode::Vertical)?;
            width = scratch.width();
            debug!("W: {}, {}", width, height);
        }
        while height > new_height {
            carveonce(&mut scratch, CarvingMode::Horizontal)?;
            height = scratch.height();
            debug!("H: {}, {}", width, height);
        }
        Ok(scratch)
    }
}

/// Return a copy of `grid` with `count` seams of the given
/// orientation removed.
pub fn seamcarve<T: Sample>(
    grid: &Grid<T>,
    mode: CarvingMode,
    count: usize,
) -> CarveResult<Grid<T>> {
    SeamCarver::new(grid).carve(mode, count)
}

/// Remove `vertical` seams and then `horizontal` seams from a graymap,
/// keeping its header and maximum value.
///
/// A 16-bit sample can carry up to 4 * 65535 of energy, so a tall
/// enough image would overflow an `i32` cost map; carving is done in
/// `i64` instead.
pub fn carve_image(image: &PgmImage, vertical: usize, horizontal: usize) -> CarveResult<PgmImage> {
    let wide = image.grid.map(i64::from);
    let narrowed = SeamCarver::new(&wide).carve(CarvingMode::Vertical, vertical)?;
    let carved = SeamCarver::new(&narrowed).carve(CarvingMode::Horizontal, horizontal)?;
    // Carving only ever moves samples, so every one still fits an i32.
    Ok(image.with_grid(carved.map(|sample| sample as i32)))
}
