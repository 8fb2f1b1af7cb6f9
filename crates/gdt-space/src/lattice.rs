//! Flat-index lattice with configurable boundary behavior.

use crate::edge::EdgeBehavior;
use gdt_core::{Coord, Shape};

/// Resolve a single axis value under the given edge behavior.
/// Returns `Some(resolved)` or `None` for Absorb out-of-bounds.
///
/// `len` must be at least 1 and at most [`Shape::MAX_DIM`].
pub fn resolve_axis(val: i32, len: usize, edge: EdgeBehavior) -> Option<i32> {
    let n = len as i32;
    if val >= 0 && val < n {
        return Some(val);
    }
    match edge {
        EdgeBehavior::Absorb => None,
        EdgeBehavior::Wrap => Some(val.rem_euclid(n)),
    }
}

/// A dense N-dimensional lattice: a [`Shape`] plus the rule for offsets
/// that leave it.
///
/// Cells are addressed by row-major flat index (last axis fastest).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lattice {
    shape: Shape,
    edge: EdgeBehavior,
}

impl Lattice {
    /// Create a lattice over `shape` with the given edge behavior.
    pub fn new(shape: Shape, edge: EdgeBehavior) -> Self {
        Self { shape, edge }
    }

    /// The underlying shape.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Edge behavior.
    pub fn edge_behavior(&self) -> EdgeBehavior {
        self.edge
    }

    /// Number of axes.
    pub fn rank(&self) -> usize {
        self.shape.rank()
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.shape.cell_count()
    }

    /// Flat index of `coord + offset` after resolving every axis.
    ///
    /// Returns `None` when an axis is absorbed, when a component of
    /// `coord + offset` does not fit in an `i32`, or when `coord` or
    /// `offset` does not have the lattice's rank. `coord` itself must be
    /// in bounds.
    pub fn offset_index(&self, coord: &[i32], offset: &[i32]) -> Option<usize> {
        let rank = self.rank();
        if coord.len() != rank || offset.len() != rank {
            return None;
        }
        debug_assert!(self.shape.contains(coord), "{coord:?} outside lattice");

        let mut index = 0usize;
        for axis in 0..rank {
            let len = self.shape.dims()[axis];
            let v = resolve_axis(coord[axis].checked_add(offset[axis])?, len, self.edge)?;
            index += v as usize * self.shape.strides()[axis];
        }
        Some(index)
    }

    /// Coordinate of the cell at flat `index`.
    pub fn coord_of(&self, index: usize) -> Coord {
        self.shape.coord_of(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use proptest::prelude::*;

    fn lattice(dims: &[usize], edge: EdgeBehavior) -> Lattice {
        Lattice::new(Shape::new(dims).unwrap(), edge)
    }

    // ── Axis resolution ─────────────────────────────────────────

    #[test]
    fn resolve_axis_in_bounds() {
        assert_eq!(resolve_axis(2, 5, EdgeBehavior::Absorb), Some(2));
        assert_eq!(resolve_axis(0, 5, EdgeBehavior::Wrap), Some(0));
    }

    #[test]
    fn resolve_axis_absorb_out_of_bounds() {
        assert_eq!(resolve_axis(-1, 5, EdgeBehavior::Absorb), None);
        assert_eq!(resolve_axis(5, 5, EdgeBehavior::Absorb), None);
    }

    #[test]
    fn resolve_axis_wrap() {
        assert_eq!(resolve_axis(-1, 5, EdgeBehavior::Wrap), Some(4));
        assert_eq!(resolve_axis(5, 5, EdgeBehavior::Wrap), Some(0));
        assert_eq!(resolve_axis(7, 5, EdgeBehavior::Wrap), Some(2));
        assert_eq!(resolve_axis(-1, 1, EdgeBehavior::Wrap), Some(0));
    }

    #[test]
    fn resolve_axis_wrap_near_i32_max() {
        let len = i32::MAX as usize;
        assert_eq!(resolve_axis(-1, len, EdgeBehavior::Wrap), Some(i32::MAX - 1));
    }

    // ── Offsets ─────────────────────────────────────────────────

    #[test]
    fn offset_wraps_corner_diagonal() {
        let l = lattice(&[5, 5], EdgeBehavior::Wrap);
        assert_eq!(l.offset_index(&[0, 0], &[-1, -1]), Some(24));
        assert_eq!(l.offset_index(&[4, 4], &[1, 1]), Some(0));
    }

    #[test]
    fn offset_wraps_3d() {
        let l = lattice(&[2, 3, 4], EdgeBehavior::Wrap);
        // [0,0,0] + [-1,-1,-1] -> [1,2,3] = 1*12 + 2*4 + 3
        assert_eq!(l.offset_index(&[0, 0, 0], &[-1, -1, -1]), Some(23));
    }

    #[test]
    fn offset_absorb_drops_partial_escape() {
        let l = lattice(&[3, 3], EdgeBehavior::Absorb);
        assert_eq!(l.offset_index(&[0, 1], &[-1, 1]), None);
        assert_eq!(l.offset_index(&[1, 1], &[-1, 1]), Some(2));
    }

    #[test]
    fn offset_rank_mismatch_is_none() {
        let l = lattice(&[3, 3], EdgeBehavior::Wrap);
        assert_eq!(l.offset_index(&[0, 0], &[1, 0, 0]), None);
        assert_eq!(l.offset_index(&[0, 0, 0], &[1, 0]), None);
    }

    #[test]
    fn offset_overflowing_i32_is_none() {
        for edge in [EdgeBehavior::Wrap, EdgeBehavior::Absorb] {
            let l = lattice(&[3, 3], edge);
            assert_eq!(l.offset_index(&[1, 0], &[i32::MAX, 0]), None);
            assert_eq!(l.offset_index(&[2, 2], &[0, i32::MAX]), None);
            assert_eq!(l.offset_index(&[0, 0], &[-1, i32::MIN]), None);
        }
    }

    #[test]
    fn single_cell_wrap_is_self() {
        let l = lattice(&[1, 1], EdgeBehavior::Wrap);
        for off in [[-1, 0], [1, 0], [0, -1], [0, 1], [1, 1]] {
            assert_eq!(l.offset_index(&[0, 0], &off), Some(0));
        }
    }

    // ── Compliance suites ───────────────────────────────────────

    #[test]
    fn compliance_wrap() {
        compliance::run_full_compliance(&lattice(&[4, 5], EdgeBehavior::Wrap));
        compliance::run_full_compliance(&lattice(&[3, 2, 4], EdgeBehavior::Wrap));
    }

    #[test]
    fn compliance_absorb() {
        compliance::run_full_compliance(&lattice(&[4, 5], EdgeBehavior::Absorb));
        compliance::run_full_compliance(&lattice(&[3, 2, 4], EdgeBehavior::Absorb));
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn wrap_offsets_are_invertible(
            rows in 1usize..8,
            cols in 1usize..8,
            r in 0i32..8, c in 0i32..8,
            dr in -1i32..=1, dc in -1i32..=1,
        ) {
            let l = lattice(&[rows, cols], EdgeBehavior::Wrap);
            let coord = [r % rows as i32, c % cols as i32];
            let there = l.coord_of(l.offset_index(&coord, &[dr, dc]).unwrap());
            let back = l.coord_of(l.offset_index(&there, &[-dr, -dc]).unwrap());
            prop_assert_eq!(back.as_slice(), &coord[..]);
        }
    }
}
