//! Reusable grid fixtures.
//!
//! - [`grid_from_rows`]: 2D grid from ASCII art (`#` foreground, `.` background)
//! - [`stack_rows`]: 3D grid from a list of ASCII slices
//! - [`open_grid`]: all-foreground grid of any shape
//! - [`random_grid`]: seeded random grid with a given foreground density

use gdt_core::Grid;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Build a 2D grid from rows of `#` (foreground) and `.` (background).
///
/// Panics on ragged rows or unknown characters; fixtures are expected to
/// be well-formed.
pub fn grid_from_rows(rows: &[&str]) -> Grid {
    let cols = rows.first().map_or(0, |r| r.len());
    let cells = parse_rows(rows, cols);
    Grid::new(&[rows.len(), cols], cells).expect("fixture rows form a valid grid")
}

/// Build a 3D grid from `z` slices, each given as ASCII rows.
pub fn stack_rows(slices: &[&[&str]]) -> Grid {
    let rows = slices.first().map_or(0, |s| s.len());
    let cols = slices
        .first()
        .and_then(|s| s.first())
        .map_or(0, |r| r.len());
    let mut cells = Vec::with_capacity(slices.len() * rows * cols);
    for slice in slices {
        assert_eq!(slice.len(), rows, "ragged slice");
        cells.extend(parse_rows(slice, cols));
    }
    Grid::new(&[slices.len(), rows, cols], cells).expect("fixture slices form a valid grid")
}

fn parse_rows(rows: &[&str], cols: usize) -> Vec<bool> {
    let mut cells = Vec::with_capacity(rows.len() * cols);
    for row in rows {
        assert_eq!(row.len(), cols, "ragged row {row:?}");
        for ch in row.chars() {
            cells.push(match ch {
                '#' => true,
                '.' => false,
                other => panic!("unexpected fixture character {other:?}"),
            });
        }
    }
    cells
}

/// An all-foreground grid.
pub fn open_grid(dims: &[usize]) -> Grid {
    Grid::filled(dims, true).expect("fixture dims are non-empty")
}

/// A seeded random grid: each cell is foreground with probability
/// `density`. The same `(dims, density, seed)` always yields the same grid.
pub fn random_grid(dims: &[usize], density: f64, seed: u64) -> Grid {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Grid::from_fn(dims, |_| rng.random_bool(density)).expect("fixture dims are non-empty")
}
