//! Chamfer metrics and their neighbour masks.
//!
//! A [`Metric`] names a discrete distance; a [`Mask`] is that metric
//! expanded for a given grid rank into the `(offset, cost)` steps the
//! propagator relaxes along. Metric names are resolved once, at call
//! entry, by [`resolve_mask`].
//!
//! | metric | 2D steps | 3D steps | costs (axis / face / corner) |
//! |--------|----------|----------|------------------------------|
//! | [`Metric::Cityblock`] | 4 | 6 | 1 |
//! | [`Metric::Chessboard`] | 8 | 26 | 1 / 1 / 1 |
//! | [`Metric::Borgefors`] | 8 | 26 | 3 / 4 / 5 |
//! | [`Metric::QuasiEuclidean`] | 8 | 26 | 1 / √2 / √3 |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod mask;
pub mod metric;

pub use mask::{resolve_mask, Mask, Step, SUPPORTED_RANKS};
pub use metric::Metric;
