//! gdt: geodesic chamfer distance transforms over periodic 2D and 3D grids.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the gdt sub-crates and adds the string-keyed [`dist`] entry point.
//!
//! # Quick start
//!
//! ```rust
//! use gdt::prelude::*;
//!
//! // A 5×5 open grid with periodic edges: the far column is one step away.
//! let grid = Grid::filled(&[5, 5], true).unwrap();
//! let field = gdt::dist(&grid, &[0, 0], "city").unwrap();
//! assert_eq!(field.get(&[4, 0]), Some(1.0));
//! assert_eq!(field.get(&[2, 2]), Some(4.0));
//!
//! // The same call with a typed metric and non-periodic edges.
//! let field = DistancePropagator::builder()
//!     .metric(Metric::Chessboard)
//!     .periodic(false)
//!     .build()
//!     .unwrap()
//!     .propagate(&grid, &[0, 0])
//!     .unwrap();
//! assert_eq!(field.get(&[4, 4]), Some(4.0));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `gdt-core` | `Grid`, `Shape`, `DistanceField`, error types |
//! | [`space`] | `gdt-space` | Edge behaviour, lattice arithmetic, cropping |
//! | [`mask`] | `gdt-mask` | Metrics and chamfer masks |
//! | [`propagator`] | `gdt-propagator` | The relaxation loop and its builder |
//! | [`import`] | (this crate) | Building grids from raw value slices |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod import;
mod transform;

pub use transform::{dist, dist_with_boundaries};

/// Core types (`gdt-core`).
///
/// Contains [`types::Grid`], [`types::DistanceField`], the
/// [`types::UNREACHABLE`] sentinel and the error enums.
pub use gdt_core as types;

/// Lattice topology and bounding-box cropping (`gdt-space`).
pub use gdt_space as space;

/// Metrics and chamfer masks (`gdt-mask`).
pub use gdt_mask as mask;

/// Distance propagation (`gdt-propagator`).
///
/// Use [`propagator::DistancePropagator::propagate_with_report`] to see
/// pass counts and whether the loop converged.
pub use gdt_propagator as propagator;

/// Common imports for typical gdt usage.
///
/// ```rust
/// use gdt::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use gdt_core::{Coord, DistanceField, Grid, Shape, UNREACHABLE};

    // Errors
    pub use gdt_core::{GridError, TransformError};
    pub use gdt_space::SpaceError;

    // Space
    pub use gdt_space::{crop, BoundingBox, Cropped, EdgeBehavior};

    // Masks
    pub use gdt_mask::{Mask, Metric};

    // Propagator
    pub use gdt_propagator::{DistancePropagator, OriginPolicy, PropagationReport};

    // Import
    pub use crate::import::{from_rows, stack_slices, Polarity};
}
