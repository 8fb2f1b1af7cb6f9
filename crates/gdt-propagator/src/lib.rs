//! Chamfer distance propagation over periodic lattices.
//!
//! Given a binary [`Grid`](gdt_core::Grid), an origin and a
//! [`Mask`](gdt_mask::Mask), the propagator relaxes a distance field to
//! its fixed point: every foreground cell ends up holding the cheapest
//! sum of step costs along a foreground-only path from the origin, and
//! unreachable foreground keeps [`UNREACHABLE`](gdt_core::UNREACHABLE).
//!
//! # Pass order
//!
//! Passes alternate forward and backward row-major sweeps, relaxing each
//! cell against the full mask and writing updates in place. The loop
//! stops after a pass with no change above the tolerance, or at the pass
//! cap (foreground cell count + 1 by default).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod propagator;
mod relax;
pub mod report;

pub use propagator::{
    propagate, DistancePropagator, DistancePropagatorBuilder, OriginPolicy,
    DEFAULT_FRACTIONAL_TOLERANCE,
};
pub use report::PropagationReport;
