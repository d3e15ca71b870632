// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The grid
//!
//! An addressable two-dimensional field of samples.  The same type
//! holds the working image, its energy map, and its cost map.  Every
//! read and write is bounds-checked, and both dimensions can be
//! shrunk in place as seams are carved away.

use crate::error::{CarveError, CarveResult};
use std::ops::Index;
use std::slice::Chunks;

#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T: Copy> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

impl<T: Copy + Default> Grid<T> {
    /// A new grid with every cell set to the default value.
    pub fn new(width: usize, height: usize) -> Self {
        Grid::filled(width, height, T::default())
    }
}

impl<T: Copy> Grid<T> {
    pub fn filled(width: usize, height: usize, value: T) -> Self {
        Grid {
            width,
            height,
            data: vec![value; width * height],
        }
    }

    /// Wrap row-major sample data.  The data must hold exactly
    /// `width * height` samples.
    pub fn from_vec(width: usize, height: usize, data: Vec<T>) -> CarveResult<Self> {
        let expected = width * height;
        if data.len() != expected {
            return Err(CarveError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Grid {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.
    fn get_index(&self, x: usize, y: usize) -> CarveResult<usize> {
        if x >= self.width || y >= self.height {
            return Err(CarveError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y * self.width + x)
    }

    /// Read the sample at (x, y).
    pub fn get(&self, x: usize, y: usize) -> CarveResult<T> {
        Ok(self.data[self.get_index(x, y)?])
    }

    /// Write the sample at (x, y).
    pub fn set(&mut self, x: usize, y: usize, value: T) -> CarveResult<()> {
        let index = self.get_index(x, y)?;
        self.data[index] = value;
        Ok(())
    }

    /// Truncate every row to its first `new_width` samples.
    pub fn shrink_width(&mut self, new_width: usize) -> CarveResult<()> {
        if new_width > self.width {
            return Err(CarveError::GrowDimension {
                current: self.width,
                requested: new_width,
            });
        }
        for y in 1..self.height {
            let start = y * self.width;
            self.data.copy_within(start..start + new_width, y * new_width);
        }
        self.data.truncate(new_width * self.height);
        self.width = new_width;
        Ok(())
    }

    /// Drop the trailing rows beyond `new_height`.
    pub fn shrink_height(&mut self, new_height: usize) -> CarveResult<()> {
        if new_height > self.height {
            return Err(CarveError::GrowDimension {
                current: self.height,
                requested: new_height,
            });
        }
        self.data.truncate(self.width * new_height);
        self.height = new_height;
        Ok(())
    }

    /// A grid of the same shape with `f` applied to every sample.
    pub fn map<U: Copy, F: FnMut(T) -> U>(&self, f: F) -> Grid<U> {
        Grid {
            width: self.width,
            height: self.height,
            data: self.data.iter().copied().map(f).collect(),
        }
    }

    /// Samples in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn rows(&self) -> Chunks<'_, T> {
        // chunks(0) panics; an empty grid has no rows anyway.
        self.data.chunks(self.width.max(1))
    }
}

impl<T: Copy> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    /// A convenience addressing mode for reading values.  Panics when
    /// out of range; use `get` where that is a recoverable error.
    fn index(&self, (x, y): (usize, usize)) -> &T {
        assert!(
            x < self.width && y < self.height,
            "({}, {}) outside {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );
        &self.data[y * self.width + x]
    }
}
