// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Content-aware shrinking of grayscale grids by seam carving.

pub mod ternary;

pub mod error;
pub use error::{CarveError, CarveResult, PgmError};

pub mod grid;
pub use grid::Grid;

pub mod mode;
pub use mode::CarvingMode;

pub mod energy;
pub use energy::{compute_energy, Sample};

pub mod cost;
pub use cost::compute_cost;

pub mod seam;
pub use seam::{find_seam, remove_seam};

pub mod seamcarver;
pub use seamcarver::{carve_image, seamcarve, SeamCarver};

pub mod pgm;
pub use pgm::PgmImage;

pub mod raster;

pub mod logger;
