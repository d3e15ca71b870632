// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Trace and remove a seam
//!
//! The seam ends at the cheapest cell on the last line of the cost
//! map.  From there we walk back toward the first line, each step
//! moving to the cheapest predecessor by exactly the rule the cost
//! accumulation used.  As each line is visited, everything past the
//! seam cell on that line slides down one slot to close the gap;
//! once the walk is done the trailing slot of every line is a stale
//! duplicate and the perpendicular dimension is truncated.

use crate::cost::{cheapest_predecessor, first_minimum};
use crate::energy::Sample;
use crate::error::{CarveError, CarveResult};
use crate::grid::Grid;
use crate::mode::CarvingMode;

// Ties go to the lowest index.
fn seam_end<T: Sample>(cost: &Grid<T>, mode: CarvingMode) -> CarveResult<usize> {
    let last = mode.traversal_len(cost) - 1;
    let breadth = mode.perpendicular_len(cost);
    let scored = (0..breadth)
        .map(|across| mode.get(cost, last, across).map(|value| (across, value)))
        .collect::<CarveResult<Vec<_>>>()?;
    first_minimum(scored)
        .map(|(across, _)| across)
        .ok_or(CarveError::OverRemoval {
            mode,
            count: 1,
            available: breadth,
        })
}

/// Given a cost map, return the perpendicular index of the seam on
/// each line of the traversal axis, first line first.  For a vertical
/// seam that is the x coordinate for each y; for a horizontal seam,
/// the y coordinate for each x.
pub fn find_seam<T: Sample>(cost: &Grid<T>, mode: CarvingMode) -> CarveResult<Vec<usize>> {
    let length = mode.traversal_len(cost);
    if length == 0 {
        return Ok(Vec::new());
    }

    let mut seam = vec![0; length];
    let mut across = seam_end(cost, mode)?;
    for along in (0..length).rev() {
        seam[along] = across;
        if along > 0 {
            across = cheapest_predecessor(cost, mode, along, across)?.0;
        }
    }
    Ok(seam)
}

/// Remove the cheapest seam from `grid` in place, shrinking the
/// perpendicular dimension by one.  Returns the seam that was removed,
/// in the same form as `find_seam`.
pub fn remove_seam<T: Sample>(
    grid: &mut Grid<T>,
    cost: &Grid<T>,
    mode: CarvingMode,
) -> CarveResult<Vec<usize>> {
    if grid.dimensions() != cost.dimensions() {
        return Err(CarveError::DimensionMismatch {
            width: grid.width(),
            height: grid.height(),
            cost_width: cost.width(),
            cost_height: cost.height(),
        });
    }

    let length = mode.traversal_len(grid);
    let breadth = mode.perpendicular_len(grid);
    if length == 0 {
        mode.shrink(grid)?;
        return Ok(Vec::new());
    }

    let mut seam = vec![0; length];
    let mut across = seam_end(cost, mode)?;
    for along in (0..length).rev() {
        seam[along] = across;
        for slot in across..breadth - 1 {
            let next = mode.get(grid, along, slot + 1)?;
            mode.set(grid, along, slot, next)?;
        }
        if along > 0 {
            across = cheapest_predecessor(cost, mode, along, across)?.0;
        }
    }

    mode.shrink(grid)?;
    Ok(seam)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::compute_cost;
    use crate::energy::compute_energy;

    const IMAGE_DATA: [i32; 12] = [1, 2, 3, 4, 5, 5, 5, 5, 9, 1, 1, 9];

    fn carve_once(grid: &mut Grid<i32>, mode: CarvingMode) -> Vec<usize> {
        let cost = compute_cost(&compute_energy(grid).unwrap(), mode).unwrap();
        remove_seam(grid, &cost, mode).unwrap()
    }

    fn flat(grid: &Grid<i32>) -> Vec<i32> {
        grid.iter().copied().collect()
    }

    #[test]
    fn grid_to_vertical_seam() {
        let mut grid = Grid::from_vec(4, 3, IMAGE_DATA.to_vec()).unwrap();
        assert_eq!(carve_once(&mut grid, CarvingMode::Vertical), vec![3, 3, 2]);
        assert_eq!(grid.dimensions(), (3, 3));
        assert_eq!(flat(&grid), vec![1, 2, 3, 5, 5, 5, 9, 1, 9]);
    }

    #[test]
    fn grid_to_horizontal_seam() {
        let mut grid = Grid::from_vec(4, 3, IMAGE_DATA.to_vec()).unwrap();
        assert_eq!(
            carve_once(&mut grid, CarvingMode::Horizontal),
            vec![0, 0, 0, 0]
        );
        assert_eq!(grid.dimensions(), (4, 2));
        assert_eq!(flat(&grid), vec![5, 5, 5, 5, 9, 1, 1, 9]);
    }

    #[test]
    fn seam_avoids_the_bright_centre() {
        let mut grid = Grid::from_vec(3, 3, vec![0, 0, 0, 0, 9, 0, 0, 0, 0]).unwrap();
        assert_eq!(carve_once(&mut grid, CarvingMode::Vertical), vec![0, 0, 0]);
        assert_eq!(flat(&grid), vec![0, 0, 9, 0, 0, 0]);

        let mut grid = Grid::from_vec(3, 3, vec![0, 0, 0, 0, 9, 0, 0, 0, 0]).unwrap();
        assert_eq!(carve_once(&mut grid, CarvingMode::Horizontal), vec![0, 0, 0]);
        assert_eq!(flat(&grid), vec![0, 9, 0, 0, 0, 0]);
    }

    #[test]
    fn endpoint_ties_keep_the_lowest_index() {
        let cost = Grid::from_vec(3, 2, vec![0, 0, 0, 2, 1, 1]).unwrap();
        assert_eq!(find_seam(&cost, CarvingMode::Vertical).unwrap(), vec![0, 1]);
    }

    #[test]
    fn trace_ties_move_toward_lower_index() {
        let cost = Grid::from_vec(3, 2, vec![4, 4, 4, 9, 5, 5]).unwrap();
        assert_eq!(find_seam(&cost, CarvingMode::Vertical).unwrap(), vec![0, 1]);
        let cost = Grid::from_vec(2, 3, vec![4, 9, 4, 5, 4, 5]).unwrap();
        assert_eq!(find_seam(&cost, CarvingMode::Horizontal).unwrap(), vec![0, 1]);
    }

    #[test]
    fn find_and_remove_agree() {
        let grid = Grid::from_vec(4, 3, IMAGE_DATA.to_vec()).unwrap();
        for mode in &[CarvingMode::Vertical, CarvingMode::Horizontal] {
            let cost = compute_cost(&compute_energy(&grid).unwrap(), *mode).unwrap();
            let found = find_seam(&cost, *mode).unwrap();
            let mut working = grid.clone();
            assert_eq!(remove_seam(&mut working, &cost, *mode).unwrap(), found);
        }
    }

    #[test]
    fn repeated_traces_are_identical() {
        let grid = Grid::filled(3, 3, 7);
        let first = carve_once(&mut grid.clone(), CarvingMode::Vertical);
        for _ in 0..10 {
            assert_eq!(carve_once(&mut grid.clone(), CarvingMode::Vertical), first);
        }
        assert_eq!(first, vec![0, 0, 0]);
    }

    #[test]
    fn mismatched_cost_map_is_rejected() {
        let mut grid = Grid::filled(3, 3, 1);
        let cost = Grid::filled(3, 2, 0);
        assert!(matches!(
            remove_seam(&mut grid, &cost, CarvingMode::Vertical),
            Err(CarveError::DimensionMismatch { .. })
        ));
        assert_eq!(grid.dimensions(), (3, 3));
    }
}
