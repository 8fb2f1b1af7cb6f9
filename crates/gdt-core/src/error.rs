//! Error types for grid construction and distance transforms.
//!
//! Organized by subsystem: [`GridError`] covers building the input array,
//! [`TransformError`] covers everything detected before the first
//! relaxation pass of a transform.

use crate::shape::Coord;
use std::error::Error;
use std::fmt;

/// Errors from constructing a [`Grid`](crate::Grid) or [`Shape`](crate::Shape).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A shape with no axes, or with a zero-length axis.
    EmptyGrid,
    /// The number of supplied cells does not match the shape.
    ShapeMismatch {
        /// Cell count implied by the shape.
        expected: usize,
        /// Cell count actually supplied.
        got: usize,
    },
    /// An axis is longer than a coordinate component can address.
    DimensionTooLarge {
        /// Index of the offending axis.
        axis: usize,
        /// The requested length.
        value: usize,
        /// Largest accepted length.
        max: usize,
    },
    /// The product of the axis lengths overflows `usize`.
    TooManyCells,
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one axis and one cell"),
            Self::ShapeMismatch { expected, got } => {
                write!(f, "shape holds {expected} cells, got {got}")
            }
            Self::DimensionTooLarge { axis, value, max } => {
                write!(f, "axis {axis} length {value} exceeds maximum {max}")
            }
            Self::TooManyCells => write!(f, "cell count overflows usize"),
        }
    }
}

impl Error for GridError {}

/// Errors from resolving a metric or running a distance transform.
///
/// Every variant is detected before any relaxation pass begins, so a
/// failed call never returns a partially computed field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransformError {
    /// The origin lies outside the grid.
    InvalidOrigin {
        /// The offending origin.
        origin: Coord,
        /// Human-readable description of the valid range.
        bounds: String,
    },
    /// The origin is a background cell.
    ///
    /// Only returned under the propagator's `OriginPolicy::Reject`; the
    /// default policy logs a warning and returns a field with nothing
    /// reachable.
    OriginNotForeground {
        /// The background origin.
        origin: Coord,
    },
    /// The metric identifier is not recognised.
    UnknownMetric {
        /// The identifier as supplied.
        name: String,
    },
    /// Unsupported grid rank, or an origin whose rank differs from the grid's.
    DimensionMismatch {
        /// Description of the accepted rank.
        expected: String,
        /// The rank actually supplied.
        got: usize,
    },
    /// A propagator configuration value is out of range.
    InvalidConfig {
        /// What went wrong.
        reason: String,
    },
    /// The input array could not be assembled into a grid.
    Grid(GridError),
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidOrigin { origin, bounds } => {
                write!(f, "origin {origin:?} out of bounds: {bounds}")
            }
            Self::OriginNotForeground { origin } => {
                write!(f, "origin {origin:?} is not a foreground cell")
            }
            Self::UnknownMetric { name } => write!(f, "unknown metric '{name}'"),
            Self::DimensionMismatch { expected, got } => {
                write!(f, "dimension mismatch: expected {expected}, got {got}")
            }
            Self::InvalidConfig { reason } => write!(f, "invalid configuration: {reason}"),
            Self::Grid(e) => write!(f, "invalid grid: {e}"),
        }
    }
}

impl Error for TransformError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for TransformError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
