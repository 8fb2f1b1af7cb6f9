//! Benchmark profiles for the gdt distance transforms.
//!
//! - [`reference_profile`]: 128x128 seeded maze (16K cells)
//! - [`volume_profile`]: 32x32x32 seeded maze (~33K cells)
//! - [`open_profile`]: 256x256 all-foreground grid (65K cells)

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use gdt_core::{Coord, Grid};
use gdt_test_utils::{open_grid, random_grid};

/// Foreground density of the maze profiles.
pub const MAZE_DENSITY: f64 = 0.75;

/// A grid plus the origin to transform from.
#[derive(Clone, Debug)]
pub struct Profile {
    /// Input grid.
    pub grid: Grid,
    /// First foreground cell in row-major order.
    pub origin: Coord,
}

impl Profile {
    fn new(grid: Grid) -> Self {
        let origin = grid
            .foreground_coords()
            .into_iter()
            .next()
            .unwrap_or_else(|| Coord::from_elem(0, grid.rank()));
        Self { grid, origin }
    }
}

/// 128x128 maze at [`MAZE_DENSITY`].
pub fn reference_profile(seed: u64) -> Profile {
    Profile::new(random_grid(&[128, 128], MAZE_DENSITY, seed))
}

/// 32x32x32 maze at [`MAZE_DENSITY`].
pub fn volume_profile(seed: u64) -> Profile {
    Profile::new(random_grid(&[32, 32, 32], MAZE_DENSITY, seed))
}

/// 256x256 with no obstacles; the best case for sweep convergence.
pub fn open_profile() -> Profile {
    Profile::new(open_grid(&[256, 256]))
}
