//! The distance propagator and its builder.
//!
//! [`DistancePropagator`] validates the grid and origin, resolves the
//! metric into a [`Mask`] for the grid's rank, seeds the field and hands
//! it to the relaxation loop. Every error is detected before the first
//! pass runs.
//!
//! Constructed via the builder pattern: [`DistancePropagator::builder`].

use crate::relax::Relaxation;
use crate::report::PropagationReport;
use gdt_core::{Coord, DistanceField, Grid, TransformError, UNREACHABLE};
use gdt_mask::{Mask, Metric};
use gdt_space::{EdgeBehavior, Lattice};

/// Default convergence tolerance for masks with fractional costs.
pub const DEFAULT_FRACTIONAL_TOLERANCE: f64 = 1e-9;

/// What to do when the origin is a background cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OriginPolicy {
    /// Log a warning and return a field where nothing is reachable.
    #[default]
    Warn,
    /// Fail with [`TransformError::OriginNotForeground`].
    Reject,
}

/// A configured chamfer distance transform.
///
/// # Construction
///
/// ```
/// use gdt_core::Grid;
/// use gdt_mask::Metric;
/// use gdt_propagator::DistancePropagator;
/// use gdt_space::EdgeBehavior;
///
/// let prop = DistancePropagator::builder()
///     .metric(Metric::Cityblock)
///     .edge(EdgeBehavior::Wrap)
///     .build()
///     .unwrap();
///
/// let grid = Grid::filled(&[5, 5], true).unwrap();
/// let field = prop.propagate(&grid, &[0, 0]).unwrap();
/// // (4, 0) is one periodic step away from (0, 0).
/// assert_eq!(field.get(&[4, 0]), Some(1.0));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct DistancePropagator {
    metric: Metric,
    edge: EdgeBehavior,
    tolerance: Option<f64>,
    max_passes: Option<usize>,
    origin_policy: OriginPolicy,
}

/// Builder for [`DistancePropagator`].
///
/// Required field: `metric`.
#[derive(Clone, Debug, Default)]
pub struct DistancePropagatorBuilder {
    metric: Option<Metric>,
    edge: EdgeBehavior,
    tolerance: Option<f64>,
    max_passes: Option<usize>,
    origin_policy: OriginPolicy,
}

impl DistancePropagator {
    /// Create a new builder for configuring a `DistancePropagator`.
    pub fn builder() -> DistancePropagatorBuilder {
        DistancePropagatorBuilder::default()
    }

    /// A propagator with periodic boundaries and default settings.
    pub fn new(metric: Metric) -> Self {
        Self {
            metric,
            edge: EdgeBehavior::Wrap,
            tolerance: None,
            max_passes: None,
            origin_policy: OriginPolicy::Warn,
        }
    }

    /// The configured metric.
    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// The configured boundary behavior.
    pub fn edge_behavior(&self) -> EdgeBehavior {
        self.edge
    }

    /// The configured origin policy.
    pub fn origin_policy(&self) -> OriginPolicy {
        self.origin_policy
    }

    /// The convergence tolerance in effect: the configured value, or `0`
    /// for whole-number metrics and [`DEFAULT_FRACTIONAL_TOLERANCE`]
    /// otherwise.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
            .unwrap_or_else(|| default_tolerance(self.metric.is_integral()))
    }

    /// Compute the distance field of `grid` from `origin`.
    ///
    /// # Errors
    ///
    /// - [`TransformError::DimensionMismatch`] if the grid is not 2D or 3D,
    ///   or `origin` has a different rank.
    /// - [`TransformError::InvalidOrigin`] if `origin` is outside the grid.
    /// - [`TransformError::OriginNotForeground`] if `origin` is background
    ///   and the policy is [`OriginPolicy::Reject`].
    pub fn propagate(&self, grid: &Grid, origin: &[i32]) -> Result<DistanceField, TransformError> {
        self.propagate_with_report(grid, origin)
            .map(|(field, _)| field)
    }

    /// Like [`propagate`](Self::propagate), also returning run statistics.
    pub fn propagate_with_report(
        &self,
        grid: &Grid,
        origin: &[i32],
    ) -> Result<(DistanceField, PropagationReport), TransformError> {
        let mask = Mask::new(self.metric, grid.rank())?;
        run(
            grid,
            origin,
            &mask,
            self.edge,
            self.tolerance,
            self.max_passes,
            self.origin_policy,
        )
    }
}

impl DistancePropagatorBuilder {
    /// Set the distance metric.
    pub fn metric(mut self, metric: Metric) -> Self {
        self.metric = Some(metric);
        self
    }

    /// Set the boundary behavior. Default: [`EdgeBehavior::Wrap`].
    pub fn edge(mut self, edge: EdgeBehavior) -> Self {
        self.edge = edge;
        self
    }

    /// Shorthand for `edge(Wrap)` / `edge(Absorb)`.
    pub fn periodic(self, periodic: bool) -> Self {
        self.edge(if periodic {
            EdgeBehavior::Wrap
        } else {
            EdgeBehavior::Absorb
        })
    }

    /// Set the convergence tolerance.
    ///
    /// Default: `0` for masks with whole-number costs,
    /// [`DEFAULT_FRACTIONAL_TOLERANCE`] otherwise.
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = Some(tolerance);
        self
    }

    /// Cap the number of passes. Default: foreground cell count + 1.
    pub fn max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = Some(max_passes);
        self
    }

    /// Set the background-origin policy. Default: [`OriginPolicy::Warn`].
    pub fn origin_policy(mut self, policy: OriginPolicy) -> Self {
        self.origin_policy = policy;
        self
    }

    /// Build the propagator, validating all configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::InvalidConfig`] if:
    /// - `metric` is not set
    /// - `tolerance` is negative or not finite
    /// - `max_passes` is zero
    pub fn build(self) -> Result<DistancePropagator, TransformError> {
        let metric = self.metric.ok_or_else(|| TransformError::InvalidConfig {
            reason: "metric is required".into(),
        })?;
        if let Some(tol) = self.tolerance {
            if !tol.is_finite() || tol < 0.0 {
                return Err(TransformError::InvalidConfig {
                    reason: format!("tolerance must be finite and >= 0, got {tol}"),
                });
            }
        }
        if self.max_passes == Some(0) {
            return Err(TransformError::InvalidConfig {
                reason: "max_passes must be at least 1".into(),
            });
        }

        Ok(DistancePropagator {
            metric,
            edge: self.edge,
            tolerance: self.tolerance,
            max_passes: self.max_passes,
            origin_policy: self.origin_policy,
        })
    }
}

/// Compute the distance field of `grid` from `origin` with an explicit
/// mask, periodic boundaries and default settings.
///
/// # Errors
///
/// - [`TransformError::DimensionMismatch`] if the grid is not 2D or 3D,
///   or `origin` or `mask` has a different rank.
/// - [`TransformError::InvalidOrigin`] if `origin` is outside the grid.
pub fn propagate(grid: &Grid, origin: &[i32], mask: &Mask) -> Result<DistanceField, TransformError> {
    run(
        grid,
        origin,
        mask,
        EdgeBehavior::Wrap,
        None,
        None,
        OriginPolicy::Warn,
    )
    .map(|(field, _)| field)
}

fn run(
    grid: &Grid,
    origin: &[i32],
    mask: &Mask,
    edge: EdgeBehavior,
    tolerance: Option<f64>,
    max_passes: Option<usize>,
    origin_policy: OriginPolicy,
) -> Result<(DistanceField, PropagationReport), TransformError> {
    let origin_index = validate(grid, origin, mask)?;
    let origin: Coord = Coord::from_slice(origin);

    let mut values = vec![UNREACHABLE; grid.cell_count()];

    if !grid.cells()[origin_index] {
        if origin_policy == OriginPolicy::Reject {
            return Err(TransformError::OriginNotForeground { origin });
        }
        log::warn!("origin {origin:?} is background; no cell is reachable");
        let field = DistanceField::from_parts(grid, values, origin)?;
        return Ok((field, PropagationReport {
            converged: true,
            ..PropagationReport::default()
        }));
    }

    values[origin_index] = 0.0;
    let tolerance = tolerance.unwrap_or_else(|| default_tolerance(mask.is_integral()));
    let max_passes = max_passes.unwrap_or_else(|| grid.foreground_count() + 1);

    let lattice = Lattice::new(grid.shape().clone(), edge);
    let report = Relaxation {
        lattice: &lattice,
        foreground: grid.cells(),
        mask,
        tolerance,
        max_passes,
    }
    .run(&mut values);

    if !report.converged {
        log::warn!(
            "{} transform on {} grid hit the pass cap ({max_passes}) before converging",
            mask.metric(),
            grid.shape()
        );
    }
    log::debug!(
        "{} transform on {} grid ({edge:?}): {} passes, {} updates, {}/{} cells reached",
        mask.metric(),
        grid.shape(),
        report.passes,
        report.updates,
        report.reached,
        grid.foreground_count()
    );

    let field = DistanceField::from_parts(grid, values, origin)?;
    Ok((field, report))
}

fn default_tolerance(integral: bool) -> f64 {
    if integral {
        0.0
    } else {
        DEFAULT_FRACTIONAL_TOLERANCE
    }
}

/// Check ranks and bounds; return the origin's flat index.
fn validate(grid: &Grid, origin: &[i32], mask: &Mask) -> Result<usize, TransformError> {
    if !gdt_mask::SUPPORTED_RANKS.contains(&grid.rank()) {
        return Err(TransformError::DimensionMismatch {
            expected: "a 2D or 3D grid".into(),
            got: grid.rank(),
        });
    }
    if origin.len() != grid.rank() {
        return Err(TransformError::DimensionMismatch {
            expected: format!("a {}D origin", grid.rank()),
            got: origin.len(),
        });
    }
    if mask.rank() != grid.rank() {
        return Err(TransformError::DimensionMismatch {
            expected: format!("a {}D mask", grid.rank()),
            got: mask.rank(),
        });
    }
    grid.shape()
        .flat_index(origin)
        .ok_or_else(|| TransformError::InvalidOrigin {
            origin: Coord::from_slice(origin),
            bounds: grid.shape().bounds(),
        })
}
