//! Neighbour masks: the `(offset, cost)` steps of a metric at a given rank.

use crate::metric::Metric;
use gdt_core::{Coord, TransformError};
use smallvec::smallvec;
use std::ops::RangeInclusive;

/// Grid ranks a mask can be built for.
pub const SUPPORTED_RANKS: RangeInclusive<usize> = 2..=3;

/// One propagation step: move by `offset`, pay `cost`.
#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    /// Per-axis displacement, each component in `{-1, 0, 1}`.
    pub offset: Coord,
    /// Non-negative cost of taking the step.
    pub cost: f64,
}

impl Step {
    /// Number of axes the step moves along (1 = axis, 2 = face diagonal,
    /// 3 = corner diagonal).
    pub fn axes(&self) -> usize {
        self.offset.iter().filter(|&&d| d != 0).count()
    }
}

/// The ordered step set of one metric at one rank.
///
/// Steps are sorted by [`Step::axes`], then lexicographically by offset,
/// so the order is fixed for a given `(metric, rank)`. The set is closed
/// under negation: if `(o, c)` is present so is `(-o, c)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Mask {
    metric: Metric,
    rank: usize,
    steps: Vec<Step>,
}

impl Mask {
    /// Build the mask of `metric` for a grid of the given rank.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::DimensionMismatch`] if `rank` is not in
    /// [`SUPPORTED_RANKS`].
    pub fn new(metric: Metric, rank: usize) -> Result<Self, TransformError> {
        if !SUPPORTED_RANKS.contains(&rank) {
            return Err(TransformError::DimensionMismatch {
                expected: "a 2D or 3D grid".into(),
                got: rank,
            });
        }

        // {-1, 0, 1}^rank in lexicographic order.
        let mut offsets: Vec<Coord> = vec![smallvec![]];
        for _ in 0..rank {
            offsets = offsets
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

        let mut steps: Vec<Step> = offsets
            .into_iter()
            .filter_map(|offset| {
                let axes = offset.iter().filter(|&&d| d != 0).count();
                if axes == 0 {
                    return None;
                }
                metric
                    .step_cost(axes)
                    .map(|cost| Step { offset, cost })
            })
            .collect();
        steps.sort_by_key(Step::axes);

        Ok(Self {
            metric,
            rank,
            steps,
        })
    }

    /// The metric this mask expands.
    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// Grid rank the offsets are written for.
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// The steps, in mask order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always `false`: every supported metric has at least the axis steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Largest step cost.
    pub fn max_cost(&self) -> f64 {
        self.steps.iter().map(|s| s.cost).fold(0.0, f64::max)
    }

    /// Smallest step cost.
    pub fn min_cost(&self) -> f64 {
        self.steps
            .iter()
            .map(|s| s.cost)
            .fold(f64::INFINITY, f64::min)
    }

    /// Whether every cost is a whole number.
    pub fn is_integral(&self) -> bool {
        self.steps.iter().all(|s| s.cost.fract() == 0.0)
    }

    /// Whether the step set is closed under negation with equal costs.
    pub fn is_symmetric(&self) -> bool {
        self.steps.iter().all(|s| {
            self.steps.iter().any(|t| {
                t.cost == s.cost && t.offset.iter().zip(&s.offset).all(|(&a, &b)| a == -b)
            })
        })
    }
}

/// Resolve a metric identifier into its mask for a grid of `rank` axes.
///
/// # Errors
///
/// - [`TransformError::UnknownMetric`] if `name` is not a recognised metric.
/// - [`TransformError::DimensionMismatch`] if `rank` is not 2 or 3.
///
/// # Examples
///
/// ```
/// use gdt_mask::resolve_mask;
///
/// let mask = resolve_mask("city", 2).unwrap();
/// assert_eq!(mask.len(), 4);
/// assert_eq!(resolve_mask("chess", 3).unwrap().len(), 26);
/// ```
pub fn resolve_mask(name: &str, rank: usize) -> Result<Mask, TransformError> {
    let metric = Metric::parse(name)?;
    Mask::new(metric, rank)
}
