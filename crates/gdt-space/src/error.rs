//! Error types for lattice and region operations.

use gdt_core::{Coord, GridError};
use std::error::Error;
use std::fmt;

/// Errors arising from region construction or cropping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpaceError {
    /// A coordinate is outside the bounds of the grid.
    CoordOutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// Human-readable description of the valid range.
        bounds: String,
    },
    /// The requested region is invalid.
    InvalidRegion {
        /// What went wrong.
        reason: String,
    },
    /// The cropped grid could not be assembled.
    Grid(GridError),
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoordOutOfBounds { coord, bounds } => {
                write!(f, "coordinate {coord:?} out of bounds: {bounds}")
            }
            Self::InvalidRegion { reason } => {
                write!(f, "invalid region: {reason}")
            }
            Self::Grid(e) => write!(f, "invalid grid: {e}"),
        }
    }
}

impl Error for SpaceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for SpaceError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
