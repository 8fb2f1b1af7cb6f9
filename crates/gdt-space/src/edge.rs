//! Boundary behavior for lattice offsets.

/// Where a neighbour offset that leaves the grid lands.
///
/// # Examples
///
/// ```
/// use gdt_core::Shape;
/// use gdt_space::{EdgeBehavior, Lattice};
///
/// let shape = Shape::new(&[5, 5]).unwrap();
///
/// // Wrap: stepping north from row 0 re-enters on row 4.
/// let wrap = Lattice::new(shape.clone(), EdgeBehavior::Wrap);
/// assert_eq!(wrap.offset_index(&[0, 0], &[-1, 0]), Some(20));
///
/// // Absorb: the same step leaves the grid.
/// let absorb = Lattice::new(shape, EdgeBehavior::Absorb);
/// assert_eq!(absorb.offset_index(&[0, 0], &[-1, 0]), None);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgeBehavior {
    /// Out-of-bounds offset wraps to the opposite side (periodic).
    #[default]
    Wrap,
    /// Out-of-bounds offset is dropped (no neighbour).
    Absorb,
}
