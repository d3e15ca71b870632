// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Carving orientation
//!
//! The horizontal and vertical algorithms are the same algorithm with
//! the axes swapped.  Rather than writing everything twice, the cost
//! and trace code talks about the *traversal* axis (the one the seam
//! runs along, and along which cost accumulates) and the
//! *perpendicular* axis (the one that loses a slot when the seam is
//! removed), and `CarvingMode` maps those back onto (x, y).

use crate::error::{CarveError, CarveResult};
use crate::grid::Grid;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum CarvingMode {
    /// One pixel per column; removes a row's worth of height.
    Horizontal,
    /// One pixel per row; removes a column's worth of width.
    Vertical,
}

impl CarvingMode {
    pub fn turn(self) -> Self {
        match self {
            CarvingMode::Horizontal => CarvingMode::Vertical,
            CarvingMode::Vertical => CarvingMode::Horizontal,
        }
    }

    /// Length of the axis the seam runs along.
    pub fn traversal_len<T: Copy>(self, grid: &Grid<T>) -> usize {
        match self {
            CarvingMode::Horizontal => grid.width(),
            CarvingMode::Vertical => grid.height(),
        }
    }

    /// Length of the axis that shrinks when a seam is removed.
    pub fn perpendicular_len<T: Copy>(self, grid: &Grid<T>) -> usize {
        match self {
            CarvingMode::Horizontal => grid.height(),
            CarvingMode::Vertical => grid.width(),
        }
    }

    /// Map a (traversal, perpendicular) position onto (x, y).
    #[inline]
    pub fn coords(self, along: usize, across: usize) -> (usize, usize) {
        match self {
            CarvingMode::Horizontal => (along, across),
            CarvingMode::Vertical => (across, along),
        }
    }

    pub(crate) fn get<T: Copy>(
        self,
        grid: &Grid<T>,
        along: usize,
        across: usize,
    ) -> CarveResult<T> {
        let (x, y) = self.coords(along, across);
        grid.get(x, y)
    }

    pub(crate) fn set<T: Copy>(
        self,
        grid: &mut Grid<T>,
        along: usize,
        across: usize,
        value: T,
    ) -> CarveResult<()> {
        let (x, y) = self.coords(along, across);
        grid.set(x, y, value)
    }

    /// Drop the last slot of the perpendicular axis.
    pub fn shrink<T: Copy>(self, grid: &mut Grid<T>) -> CarveResult<()> {
        let remaining = self
            .perpendicular_len(grid)
            .checked_sub(1)
            .ok_or(CarveError::OverRemoval {
                mode: self,
                count: 1,
                available: 0,
            })?;
        match self {
            CarvingMode::Horizontal => grid.shrink_height(remaining),
            CarvingMode::Vertical => grid.shrink_width(remaining),
        }
    }
}

impl fmt::Display for CarvingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CarvingMode::Horizontal => "horizontal",
            CarvingMode::Vertical => "vertical",
        })
    }
}

impl FromStr for CarvingMode {
    type Err = CarveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "horizontal" | "h" => Ok(CarvingMode::Horizontal),
            "vertical" | "v" => Ok(CarvingMode::Vertical),
            _ => Err(CarveError::InvalidMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axes_swap_between_modes() {
        let grid: Grid<i32> = Grid::new(4, 3);
        assert_eq!(CarvingMode::Vertical.traversal_len(&grid), 3);
        assert_eq!(CarvingMode::Vertical.perpendicular_len(&grid), 4);
        assert_eq!(CarvingMode::Horizontal.traversal_len(&grid), 4);
        assert_eq!(CarvingMode::Horizontal.perpendicular_len(&grid), 3);
        assert_eq!(CarvingMode::Vertical.coords(2, 1), (1, 2));
        assert_eq!(CarvingMode::Horizontal.coords(2, 1), (2, 1));
    }

    #[test]
    fn shrink_takes_the_perpendicular_axis() {
        let mut grid: Grid<i32> = Grid::new(4, 3);
        CarvingMode::Vertical.shrink(&mut grid).unwrap();
        assert_eq!(grid.dimensions(), (3, 3));
        CarvingMode::Horizontal.shrink(&mut grid).unwrap();
        assert_eq!(grid.dimensions(), (3, 2));
    }

    #[test]
    fn turn_alternates() {
        assert_eq!(CarvingMode::Vertical.turn(), CarvingMode::Horizontal);
        assert_eq!(CarvingMode::Horizontal.turn().turn(), CarvingMode::Horizontal);
    }

    #[test]
    fn parses_names() {
        assert_eq!("Vertical".parse::<CarvingMode>().unwrap(), CarvingMode::Vertical);
        assert_eq!("h".parse::<CarvingMode>().unwrap(), CarvingMode::Horizontal);
        assert!(matches!(
            "diagonal".parse::<CarvingMode>(),
            Err(CarveError::InvalidMode(_))
        ));
    }
}
