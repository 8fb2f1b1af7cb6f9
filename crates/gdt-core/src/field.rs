//! The output distance field.

use crate::error::GridError;
use crate::grid::Grid;
use crate::shape::{Coord, Shape};

/// Sentinel stored for foreground cells with no foreground-only path from
/// the origin. Background cells hold the same value in the raw buffer.
pub const UNREACHABLE: f64 = f64::INFINITY;

/// Per-cell path length from the origin, same shape as the input grid.
///
/// The raw buffer ([`values`](Self::values)) is row-major and holds
/// [`UNREACHABLE`] for both unreachable foreground and background cells.
/// The per-cell accessors consult the foreground mask, so a background
/// value is never handed out as a distance.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceField {
    shape: Shape,
    values: Vec<f64>,
    foreground: Vec<bool>,
    origin: Coord,
}

impl DistanceField {
    /// Assemble a field from a computed buffer and the grid it was computed on.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::ShapeMismatch`] if `values` does not have one
    /// entry per grid cell.
    pub fn from_parts(grid: &Grid, values: Vec<f64>, origin: Coord) -> Result<Self, GridError> {
        if values.len() != grid.cell_count() {
            return Err(GridError::ShapeMismatch {
                expected: grid.cell_count(),
                got: values.len(),
            });
        }
        Ok(Self {
            shape: grid.shape().clone(),
            values,
            foreground: grid.cells().to_vec(),
            origin,
        })
    }

    /// The field's shape (identical to the input grid's).
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Axis lengths, outermost first.
    pub fn dims(&self) -> &[usize] {
        self.shape.dims()
    }

    /// The origin the field was computed from.
    pub fn origin(&self) -> &[i32] {
        &self.origin
    }

    /// Raw row-major buffer.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Consume the field, returning the raw row-major buffer.
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    /// Distance at `coord`.
    ///
    /// Returns `None` for background or out-of-bounds cells, and
    /// `Some(UNREACHABLE)` for unreachable foreground.
    pub fn get(&self, coord: &[i32]) -> Option<f64> {
        let i = self.shape.flat_index(coord)?;
        self.foreground[i].then(|| self.values[i])
    }

    /// Whether `coord` is a background cell of the input grid.
    pub fn is_background(&self, coord: &[i32]) -> bool {
        self.shape
            .flat_index(coord)
            .is_some_and(|i| !self.foreground[i])
    }

    /// Whether `coord` is foreground with a finite distance.
    pub fn is_reachable(&self, coord: &[i32]) -> bool {
        self.get(coord).is_some_and(f64::is_finite)
    }

    /// Number of cells with a finite distance.
    pub fn reachable_count(&self) -> usize {
        self.finite_values().count()
    }

    /// Largest finite distance, or `None` if nothing is reachable.
    pub fn max_finite(&self) -> Option<f64> {
        self.finite_values().reduce(f64::max)
    }

    /// Iterate over every cell in row-major order.
    ///
    /// Background cells yield `None`.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Option<f64>)> + '_ {
        self.values
            .iter()
            .zip(&self.foreground)
            .enumerate()
            .map(|(i, (&v, &fg))| (self.shape.coord_of(i), fg.then_some(v)))
    }

    fn finite_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.values
            .iter()
            .zip(&self.foreground)
            .filter(|(v, &fg)| fg && v.is_finite())
            .map(|(&v, _)| v)
    }
}
