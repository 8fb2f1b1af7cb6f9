//! Lattice topology for gdt distance transforms.
//!
//! This crate turns a [`Shape`](gdt_core::Shape) into a [`Lattice`]: flat
//! index arithmetic plus the boundary rule that decides where an offset
//! leaving the grid lands. It also provides the bounding-box restriction
//! used to crop a grid to a set of points before a transform.
//!
//! # Boundaries
//!
//! - [`EdgeBehavior::Wrap`]: periodic, the default for transforms
//! - [`EdgeBehavior::Absorb`]: out-of-range offsets are dropped

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod edge;
pub mod error;
pub mod lattice;
pub mod region;

#[cfg(test)]
pub(crate) mod compliance;

pub use edge::EdgeBehavior;
pub use error::SpaceError;
pub use lattice::{resolve_axis, Lattice};
pub use region::{crop, BoundingBox, Cropped};
