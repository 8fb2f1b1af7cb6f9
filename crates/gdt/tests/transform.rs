//! End-to-end checks through the facade: string metrics, cropping and
//! import feeding the propagator.

use gdt::prelude::*;
use gdt_test_utils::{grid_from_rows, open_grid, random_grid};
use proptest::prelude::*;
use smallvec::smallvec;

// ── Documented behaviour ───────────────────────────────────────

#[test_log::test]
fn periodicity_on_an_open_grid() {
    let field = gdt::dist(&open_grid(&[5, 5]), &[0, 0], "city").unwrap();
    assert_eq!(field.get(&[4, 0]), Some(1.0));
}

#[test_log::test]
fn metric_sanity_on_the_diagonal() {
    let grid = open_grid(&[8, 8]);
    assert_eq!(gdt::dist(&grid, &[0, 0], "chess").unwrap().get(&[2, 2]), Some(2.0));
    assert_eq!(gdt::dist(&grid, &[0, 0], "city").unwrap().get(&[2, 2]), Some(4.0));
}

#[test_log::test]
fn unknown_metric_is_reported_by_name() {
    let err = gdt::dist(&open_grid(&[3, 3]), &[0, 0], "euclid").unwrap_err();
    assert_eq!(
        err,
        TransformError::UnknownMetric {
            name: "euclid".into()
        }
    );
    assert_eq!(err.to_string(), "unknown metric 'euclid'");
}

#[test_log::test]
fn background_origin_reaches_nothing() {
    let grid = grid_from_rows(&["#.#", "###"]);
    let field = gdt::dist(&grid, &[0, 1], "chess").unwrap();
    assert_eq!(field.reachable_count(), 0);
    assert_eq!(field.get(&[0, 1]), None);
    assert_eq!(field.get(&[1, 1]), Some(UNREACHABLE));
}

#[test_log::test]
fn origin_out_of_bounds() {
    let err = gdt::dist(&open_grid(&[3, 3]), &[3, 0], "city").unwrap_err();
    assert!(matches!(err, TransformError::InvalidOrigin { .. }));
}

// ── Cropping ───────────────────────────────────────────────────

#[test_log::test]
fn cropping_preserves_interior_distances() {
    // On an open grid the optimal path from one corner of a box to any
    // cell inside it never leaves the box.
    let grid = open_grid(&[20, 20]);
    let points: Vec<Coord> = vec![smallvec![5, 5], smallvec![9, 12]];
    let cropped = crop(&grid, &points).unwrap();
    assert_eq!(cropped.grid.dims(), &[5, 8]);

    for name in ["city", "chess", "borges", "quasi"] {
        let full = gdt::dist_with_boundaries(&grid, &points[0], name, false).unwrap();
        let local =
            gdt::dist_with_boundaries(&cropped.grid, &cropped.points[0], name, false).unwrap();
        for (coord, value) in local.iter() {
            let parent = cropped.to_parent(&coord);
            let want = full.get(&parent).unwrap();
            let got = value.unwrap();
            assert!((got - want).abs() < 1e-9, "{name} at {parent:?}: {got} vs {want}");
        }
    }
}

#[test_log::test]
fn cropping_through_a_maze() {
    let grid = grid_from_rows(&[
        "##########",
        "#........#",
        "#.######.#",
        "#.#....#.#",
        "#.#.##.#.#",
        "###.##.###",
    ]);
    let points: Vec<Coord> = vec![smallvec![2, 2], smallvec![5, 7]];
    let cropped = crop(&grid, &points).unwrap();
    let full = gdt::dist_with_boundaries(&grid, &points[0], "city", false).unwrap();
    let local =
        gdt::dist_with_boundaries(&cropped.grid, &cropped.points[0], "city", false).unwrap();
    // The corridor inside the box links the two points directly.
    assert_eq!(full.get(&points[1]), Some(8.0));
    assert_eq!(local.get(&cropped.points[1]), Some(8.0));
}

proptest! {
    #[test]
    fn cropping_never_shortens_a_path(
        seed in any::<u64>(),
        a in (0i32..12, 0i32..12),
        b in (0i32..12, 0i32..12),
        name in prop_oneof![Just("city"), Just("chess"), Just("borges"), Just("quasi")],
    ) {
        let grid = random_grid(&[12, 12], 0.7, seed);
        let points: Vec<Coord> = vec![smallvec![a.0, a.1], smallvec![b.0, b.1]];
        let cropped = crop(&grid, &points).unwrap();
        let full = gdt::dist_with_boundaries(&grid, &points[0], name, false).unwrap();
        let local = gdt::dist_with_boundaries(&cropped.grid, &cropped.points[0], name, false)
            .unwrap();
        for (coord, value) in local.iter() {
            if let Some(got) = value {
                let want = full.get(&cropped.to_parent(&coord)).unwrap();
                prop_assert!(got >= want - 1e-9);
            }
        }
    }
}

// ── Import ─────────────────────────────────────────────────────

#[test_log::test]
fn imported_volume_feeds_the_transform() {
    // Dark pixels (0) are traversable; the middle slice has one opening.
    let wall = vec![vec![255u8; 3], vec![255, 0, 255], vec![255u8; 3]];
    let open = vec![vec![0u8; 3]; 3];
    let grid = stack_slices(&[open.clone(), wall, open], Polarity::Zero).unwrap();
    assert_eq!(grid.dims(), &[3, 3, 3]);

    let field = gdt::dist_with_boundaries(&grid, &[0, 1, 1], "city", false).unwrap();
    assert_eq!(field.get(&[1, 1, 1]), Some(1.0));
    assert_eq!(field.get(&[2, 0, 0]), Some(4.0));
    assert_eq!(field.get(&[1, 0, 0]), None);

    // With wrapping, z = 0 and z = 2 are adjacent through the seam.
    let field = gdt::dist(&grid, &[0, 1, 1], "city").unwrap();
    assert_eq!(field.get(&[2, 1, 1]), Some(1.0));
}

#[test_log::test]
fn imported_rows_feed_the_transform() {
    // Non-zero pixels are traversable; the middle column is a wall.
    let rows = vec![vec![1u8, 0, 1], vec![1, 0, 1], vec![1, 1, 1]];
    let grid = from_rows(&rows, Polarity::NonZero).unwrap();
    assert_eq!(grid.dims(), &[3, 3]);

    let field = gdt::dist_with_boundaries(&grid, &[0, 0], "city", false).unwrap();
    assert_eq!(field.get(&[0, 2]), Some(6.0));
    assert_eq!(field.get(&[0, 1]), None);
}
