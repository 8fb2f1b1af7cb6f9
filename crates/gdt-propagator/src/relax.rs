//! The relaxation loop.
//!
//! Each pass visits every foreground cell and pulls the cheapest
//! `neighbour + cost` over the whole mask. Updates are written in place,
//! so later cells in the same pass already see them. Passes alternate
//! between forward and backward row-major sweeps; this is the classic
//! two-raster chamfer order, but repeated until nothing changes, which
//! stays correct around obstacles and across periodic edges.

use crate::report::PropagationReport;
use gdt_core::{Coord, UNREACHABLE};
use gdt_mask::Mask;
use gdt_space::Lattice;

/// Direction of one raster sweep.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Sweep {
    Forward,
    Backward,
}

impl Sweep {
    fn flip(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }
}

/// Borrowed inputs of one relaxation run.
pub(crate) struct Relaxation<'a> {
    pub lattice: &'a Lattice,
    pub foreground: &'a [bool],
    pub mask: &'a Mask,
    /// Improvements at or below this size do not keep the loop running.
    pub tolerance: f64,
    pub max_passes: usize,
}

impl Relaxation<'_> {
    /// Relax `values` to a fixed point.
    ///
    /// `values` must already hold 0 at the origin and [`UNREACHABLE`]
    /// everywhere else. Background entries are never read or written.
    pub(crate) fn run(&self, values: &mut [f64]) -> PropagationReport {
        debug_assert_eq!(values.len(), self.lattice.cell_count());

        let cells: Vec<(usize, Coord)> = self
            .foreground
            .iter()
            .enumerate()
            .filter(|(_, &fg)| fg)
            .map(|(i, _)| (i, self.lattice.coord_of(i)))
            .collect();

        let mut report = PropagationReport::default();
        let mut sweep = Sweep::Forward;

        while report.passes < self.max_passes {
            let (updates, changed) = match sweep {
                Sweep::Forward => self.pass(values, cells.iter()),
                Sweep::Backward => self.pass(values, cells.iter().rev()),
            };
            report.passes += 1;
            report.updates += updates;
            log::trace!(
                "pass {} ({:?}): {} updates",
                report.passes,
                sweep,
                updates
            );

            if !changed {
                report.converged = true;
                break;
            }
            sweep = sweep.flip();
        }

        report.reached = cells
            .iter()
            .filter(|(i, _)| values[*i] != UNREACHABLE)
            .count();
        report
    }

    /// One sweep over `cells`. Returns the number of cells lowered and
    /// whether any of them moved by more than the tolerance.
    fn pass<'c>(
        &self,
        values: &mut [f64],
        cells: impl Iterator<Item = &'c (usize, Coord)>,
    ) -> (usize, bool) {
        let mut updates = 0;
        let mut changed = false;

        for (i, coord) in cells {
            let current = values[*i];
            let mut best = current;
            for step in self.mask.steps() {
                let Some(n) = self.lattice.offset_index(coord, &step.offset) else {
                    continue;
                };
                if !self.foreground[n] {
                    continue;
                }
                let candidate = values[n] + step.cost;
                if candidate < best {
                    best = candidate;
                }
            }

            if best < current {
                values[*i] = best;
                updates += 1;
                // inf - finite is inf, so a first arrival always counts.
                if current - best > self.tolerance {
                    changed = true;
                }
            }
        }

        (updates, changed)
    }
}
