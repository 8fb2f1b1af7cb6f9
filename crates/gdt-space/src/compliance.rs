//! Lattice compliance test helpers.
//!
//! These functions verify the invariants the propagator relies on when it
//! walks a lattice: a complete cell enumeration and offset resolution that
//! stays in bounds, is invertible, and honours the edge rule.

use crate::edge::EdgeBehavior;
use crate::lattice::Lattice;
use indexmap::IndexSet;

/// Every offset in `{-1, 0, 1}^rank` except the zero vector.
fn unit_offsets(rank: usize) -> Vec<Vec<i32>> {
    let mut out = vec![vec![]];
    for _ in 0..rank {
        out = out
            .into_iter()
            .flat_map(|prefix| {
                [-1, 0, 1].into_iter().map(move |d| {
                    let mut next = prefix.clone();
                    next.push(d);
                    next
                })
            })
            .collect();
    }
    out.retain(|o| o.iter().any(|&d| d != 0));
    out
}

/// Assert that `coord_of` enumerates every cell exactly once and
/// round-trips through the shape's flat index.
pub fn assert_coord_of_complete(lattice: &Lattice) {
    let coords: IndexSet<_> = (0..lattice.cell_count())
        .map(|i| lattice.coord_of(i))
        .collect();
    assert_eq!(
        coords.len(),
        lattice.cell_count(),
        "coord_of has duplicates"
    );
    for (i, coord) in coords.iter().enumerate() {
        assert_eq!(
            lattice.shape().flat_index(coord),
            Some(i),
            "flat_index({coord:?}) != {i}"
        );
    }
}

/// Assert that every resolved unit offset lands inside the lattice.
pub fn assert_offsets_in_bounds(lattice: &Lattice) {
    for i in 0..lattice.cell_count() {
        let coord = lattice.coord_of(i);
        for off in unit_offsets(lattice.rank()) {
            if let Some(n) = lattice.offset_index(&coord, &off) {
                assert!(
                    n < lattice.cell_count(),
                    "{coord:?} + {off:?} resolved to {n}, outside {} cells",
                    lattice.cell_count()
                );
            }
        }
    }
}

/// Assert that `b = a + o` implies `a = b - o`.
pub fn assert_offsets_invertible(lattice: &Lattice) {
    for i in 0..lattice.cell_count() {
        let coord = lattice.coord_of(i);
        for off in unit_offsets(lattice.rank()) {
            let Some(there) = lattice.offset_index(&coord, &off) else {
                continue;
            };
            let neg: Vec<i32> = off.iter().map(|d| -d).collect();
            assert_eq!(
                lattice.offset_index(&lattice.coord_of(there), &neg),
                Some(i),
                "offset inverse violated: {coord:?} + {off:?} = {there}, but not back"
            );
        }
    }
}

/// Assert that under Absorb no offset crosses an edge, and under Wrap every
/// offset resolves.
pub fn assert_edge_rule(lattice: &Lattice) {
    for i in 0..lattice.cell_count() {
        let coord = lattice.coord_of(i);
        for off in unit_offsets(lattice.rank()) {
            let inside = lattice.shape().contains(
                &coord
                    .iter()
                    .zip(&off)
                    .map(|(&c, &d)| c + d)
                    .collect::<Vec<_>>(),
            );
            let resolved = lattice.offset_index(&coord, &off).is_some();
            match lattice.edge_behavior() {
                EdgeBehavior::Wrap => assert!(resolved, "{coord:?} + {off:?} dropped under Wrap"),
                EdgeBehavior::Absorb => assert_eq!(
                    resolved, inside,
                    "{coord:?} + {off:?} crossed an absorbing edge"
                ),
            }
        }
    }
}

/// Run all compliance checks on a lattice.
pub fn run_full_compliance(lattice: &Lattice) {
    assert_coord_of_complete(lattice);
    assert_offsets_in_bounds(lattice);
    assert_offsets_invertible(lattice);
    assert_edge_rule(lattice);
}
