//! Core types for the gdt geodesic distance transform.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the data model shared by the rest of the workspace: coordinates and
//! shapes, the binary input [`Grid`], the output [`DistanceField`], and
//! the error enums.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod field;
pub mod grid;
pub mod shape;

pub use error::{GridError, TransformError};
pub use field::{DistanceField, UNREACHABLE};
pub use grid::Grid;
pub use shape::{Coord, Shape};
