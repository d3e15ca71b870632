// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Accumulate seam costs
//!
//! Given an energy map, build the dynamic-programming table in which
//! every cell holds the cheapest total energy of any seam that starts
//! on the first line of the traversal axis and ends at that cell.
//!
//! A cell's predecessors are the (up to) three cells on the previous
//! line at perpendicular offsets -1, 0 and +1.  Offsets that fall off
//! the grid are not candidates at all; they are never read as zero or
//! as infinity.  When candidates tie, the lowest perpendicular index
//! wins.  The seam tracer uses the very same selection, so the path it
//! walks back is always one the accumulation actually produced.

use crate::cq;
use crate::energy::Sample;
use crate::error::{CarveError, CarveResult};
use crate::grid::Grid;
use crate::mode::CarvingMode;

/// The first of the smallest values, scanning candidates in order.  A
/// later candidate replaces the running best only when strictly
/// smaller.
pub(crate) fn first_minimum<T, I>(candidates: I) -> Option<(usize, T)>
where
    T: PartialOrd + Copy,
    I: IntoIterator<Item = (usize, T)>,
{
    candidates
        .into_iter()
        .fold(None, |best, (index, value)| match best {
            Some((_, lowest)) if !(value < lowest) => best,
            _ => Some((index, value)),
        })
}

/// Find the cheapest existing predecessor of the cell at
/// (`along`, `across`), returning its perpendicular index and cost.
/// `along` must be at least 1.
pub(crate) fn cheapest_predecessor<T: Sample>(
    cost: &Grid<T>,
    mode: CarvingMode,
    along: usize,
    across: usize,
) -> CarveResult<(usize, T)> {
    let previous = along - 1;
    let last = mode.perpendicular_len(cost).saturating_sub(1);
    let candidates = [
        cq!(across > 0 => across - 1),
        Some(across),
        cq!(across < last => across + 1),
    ];

    let mut scored: [Option<(usize, T)>; 3] = [None; 3];
    for (slot, index) in scored.iter_mut().zip(candidates.iter()) {
        if let Some(index) = *index {
            *slot = Some((index, mode.get(cost, previous, index)?));
        }
    }

    first_minimum(scored.iter().flatten().copied()).ok_or_else(|| {
        let (x, y) = mode.coords(previous, across);
        CarveError::OutOfBounds {
            x,
            y,
            width: cost.width(),
            height: cost.height(),
        }
    })
}

/// Given an energy map, compute the cumulative cost map for seams of
/// the given orientation.
pub fn compute_cost<T: Sample>(energy: &Grid<T>, mode: CarvingMode) -> CarveResult<Grid<T>> {
    let (width, height) = energy.dimensions();
    let mut cost = Grid::filled(width, height, T::zero());
    let (length, breadth) = (mode.traversal_len(energy), mode.perpendicular_len(energy));
    if length == 0 || breadth == 0 {
        return Ok(cost);
    }

    // The first line costs exactly its own energy.
    for across in 0..breadth {
        mode.set(&mut cost, 0, across, mode.get(energy, 0, across)?)?;
    }

    for along in 1..length {
        for across in 0..breadth {
            let (_, parent) = cheapest_predecessor(&cost, mode, along, across)?;
            let total = mode.get(energy, along, across)? + parent;
            mode.set(&mut cost, along, across, total)?;
        }
    }
    Ok(cost)
}
