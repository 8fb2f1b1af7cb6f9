//! Dijkstra reference oracle.
//!
//! Computes the exact shortest-path fixed point of the same step graph the
//! propagator relaxes: cell `v` can take its value from
//! `resolve(v + offset)` plus the step cost. Slow but independent of the
//! sweep machinery, so property tests can compare against it.

use gdt_core::{Grid, UNREACHABLE};
use gdt_mask::Mask;
use gdt_space::{EdgeBehavior, Lattice};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Debug, PartialEq)]
struct Entry {
    dist: f64,
    index: usize,
}

impl Eq for Entry {}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for a min-heap; ties broken by index for determinism.
        other
            .dist
            .total_cmp(&self.dist)
            .then_with(|| other.index.cmp(&self.index))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Shortest foreground-only path costs from `origin`, row-major.
///
/// Background cells and unreachable foreground hold [`UNREACHABLE`].
/// Panics if `origin` is out of bounds; returns all-unreachable if it is
/// background.
pub fn dijkstra(grid: &Grid, origin: &[i32], mask: &Mask, edge: EdgeBehavior) -> Vec<f64> {
    let lattice = Lattice::new(grid.shape().clone(), edge);
    let n = grid.cell_count();
    let fg = grid.cells();
    let mut dist = vec![UNREACHABLE; n];

    let start = grid
        .shape()
        .flat_index(origin)
        .expect("oracle origin must be in bounds");
    if !fg[start] {
        return dist;
    }

    // feeds[u] lists (v, cost) such that v pulls from u.
    let mut feeds: Vec<Vec<(usize, f64)>> = vec![Vec::new(); n];
    for v in (0..n).filter(|&v| fg[v]) {
        let coord = lattice.coord_of(v);
        for step in mask.steps() {
            if let Some(u) = lattice.offset_index(&coord, &step.offset) {
                if fg[u] {
                    feeds[u].push((v, step.cost));
                }
            }
        }
    }

    let mut heap = BinaryHeap::new();
    dist[start] = 0.0;
    heap.push(Entry {
        dist: 0.0,
        index: start,
    });

    while let Some(Entry { dist: d, index: u }) = heap.pop() {
        if d > dist[u] {
            continue;
        }
        for &(v, cost) in &feeds[u] {
            let candidate = d + cost;
            if candidate < dist[v] {
                dist[v] = candidate;
                heap.push(Entry {
                    dist: candidate,
                    index: v,
                });
            }
        }
    }

    dist
}
