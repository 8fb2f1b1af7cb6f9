//! The binary foreground/background input array.

use crate::error::GridError;
use crate::shape::{Coord, Shape};

/// A dense, immutable foreground/background array.
///
/// Cells are stored row-major in a flat `Vec<bool>` where `true` means
/// foreground. The grid itself accepts any rank; distance transforms are
/// defined for ranks 2 and 3 and reject the rest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    shape: Shape,
    cells: Vec<bool>,
}

impl Grid {
    /// Create a grid from a flat row-major cell buffer.
    ///
    /// # Errors
    ///
    /// Propagates [`Shape::new`] errors, and returns
    /// [`GridError::ShapeMismatch`] if `cells.len()` differs from the
    /// shape's cell count.
    pub fn new(dims: &[usize], cells: Vec<bool>) -> Result<Self, GridError> {
        let shape = Shape::new(dims)?;
        if cells.len() != shape.cell_count() {
            return Err(GridError::ShapeMismatch {
                expected: shape.cell_count(),
                got: cells.len(),
            });
        }
        Ok(Self { shape, cells })
    }

    /// Create a grid from numeric values: strictly positive values are
    /// foreground, everything else is background.
    ///
    /// # Examples
    ///
    /// ```
    /// use gdt_core::Grid;
    ///
    /// let grid = Grid::from_values(&[2, 3], &[1u8, 0, 1, 1, 1, 0]).unwrap();
    /// assert_eq!(grid.is_foreground(&[0, 1]), Some(false));
    /// assert_eq!(grid.foreground_count(), 4);
    /// ```
    pub fn from_values<T>(dims: &[usize], values: &[T]) -> Result<Self, GridError>
    where
        T: PartialOrd + Default,
    {
        let zero = T::default();
        Self::new(dims, values.iter().map(|v| *v > zero).collect())
    }

    /// A grid whose cells are all foreground or all background.
    pub fn filled(dims: &[usize], foreground: bool) -> Result<Self, GridError> {
        let shape = Shape::new(dims)?;
        let cells = vec![foreground; shape.cell_count()];
        Ok(Self { shape, cells })
    }

    /// Create a grid by evaluating `f` at every coordinate in row-major order.
    pub fn from_fn(dims: &[usize], mut f: impl FnMut(&[i32]) -> bool) -> Result<Self, GridError> {
        let shape = Shape::new(dims)?;
        let cells = (0..shape.cell_count())
            .map(|i| f(&shape.coord_of(i)))
            .collect();
        Ok(Self { shape, cells })
    }

    /// The grid's shape.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Axis lengths, outermost first.
    pub fn dims(&self) -> &[usize] {
        self.shape.dims()
    }

    /// Number of axes.
    pub fn rank(&self) -> usize {
        self.shape.rank()
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.shape.cell_count()
    }

    /// Flat row-major cell buffer (`true` = foreground).
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Whether the cell at `coord` is foreground, or `None` if out of bounds.
    pub fn is_foreground(&self, coord: &[i32]) -> Option<bool> {
        self.shape.flat_index(coord).map(|i| self.cells[i])
    }

    /// Number of foreground cells.
    pub fn foreground_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Coordinates of all foreground cells in row-major order.
    pub fn foreground_coords(&self) -> Vec<Coord> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &fg)| fg)
            .map(|(i, _)| self.shape.coord_of(i))
            .collect()
    }
}
