// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of a grid
//!
//! The energy of a sample is the sum of its absolute differences from
//! each of its four direct neighbours.  Neighbours that fall off the
//! edge of the grid simply don't contribute; there is no wraparound
//! and no padding, so a perfectly flat grid has zero energy
//! everywhere, borders included.

use crate::cq;
use crate::error::CarveResult;
use crate::grid::Grid;
use itertools::iproduct;
use num_traits::Signed;
use std::fmt::Debug;

/// The numeric types the carving engine works over.  Differences must
/// be able to go negative, so unsigned samples should be widened
/// before carving.
pub trait Sample: Signed + Copy + PartialOrd + Debug {}

impl<T: Signed + Copy + PartialOrd + Debug> Sample for T {}

/// Compute the energy of every sample in a grid.  The result has the
/// same dimensions as the source.
pub fn compute_energy<T: Sample>(grid: &Grid<T>) -> CarveResult<Grid<T>> {
    let (width, height) = grid.dimensions();
    let mut emap = Grid::filled(width, height, T::zero());

    for (y, x) in iproduct!(0..height, 0..width) {
        let current = grid.get(x, y)?;
        let neighbours = [
            cq!(x > 0 => grid.get(x - 1, y)?),
            cq!(x + 1 < width => grid.get(x + 1, y)?),
            cq!(y > 0 => grid.get(x, y - 1)?),
            cq!(y + 1 < height => grid.get(x, y + 1)?),
        ];
        let energy = neighbours
            .iter()
            .flatten()
            .fold(T::zero(), |acc, n| acc + (current - *n).abs());
        emap.set(x, y, energy)?;
    }
    Ok(emap)
}
