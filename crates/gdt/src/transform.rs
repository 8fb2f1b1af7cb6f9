//! String-keyed entry points.

use gdt_core::{DistanceField, Grid, TransformError};
use gdt_mask::Metric;
use gdt_propagator::DistancePropagator;

/// Geodesic distance from `origin` to every foreground cell of `grid`,
/// with periodic edges on every axis.
///
/// `metric` is one of `"city"`, `"chess"`, `"borges"`, `"quasi"` or their
/// long forms (see [`Metric::parse`]).
///
/// # Errors
///
/// - [`TransformError::UnknownMetric`] for an unrecognised `metric`,
///   reported before the grid or origin are looked at.
/// - [`TransformError::DimensionMismatch`] for a grid that is not 2D or
///   3D, or an origin of the wrong rank.
/// - [`TransformError::InvalidOrigin`] for an origin outside the grid.
///
/// A background origin is not an error: a warning is logged and every
/// foreground cell is [`UNREACHABLE`](gdt_core::UNREACHABLE).
pub fn dist(grid: &Grid, origin: &[i32], metric: &str) -> Result<DistanceField, TransformError> {
    dist_with_boundaries(grid, origin, metric, true)
}

/// Like [`dist`], with a switch for periodic edges.
///
/// With `periodic = false`, steps that would leave the grid are dropped.
pub fn dist_with_boundaries(
    grid: &Grid,
    origin: &[i32],
    metric: &str,
    periodic: bool,
) -> Result<DistanceField, TransformError> {
    let metric = Metric::parse(metric)?;
    log::debug!("dist: metric={metric} periodic={periodic} dims={}", grid.shape());
    DistancePropagator::builder()
        .metric(metric)
        .periodic(periodic)
        .build()?
        .propagate(grid, origin)
}
