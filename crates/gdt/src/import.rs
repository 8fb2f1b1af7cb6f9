//! Building grids from raw value slices.
//!
//! Image or volume decoding stays with the caller; these functions take
//! already-decoded values and decide per cell whether it is foreground.

use gdt_core::{Grid, GridError};

/// Which cell values count as foreground.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Polarity {
    /// Any value other than `T::default()` is foreground.
    #[default]
    NonZero,
    /// Cells equal to `T::default()` are foreground. Useful for images
    /// where dark pixels mark the traversable region.
    Zero,
}

impl Polarity {
    /// Whether `value` is a foreground cell under this polarity.
    pub fn is_foreground<T: PartialEq + Default>(self, value: &T) -> bool {
        let zero = *value == T::default();
        match self {
            Self::NonZero => !zero,
            Self::Zero => zero,
        }
    }
}

/// Build a 2D grid from rows of values.
///
/// # Errors
///
/// - [`GridError::EmptyGrid`] if there are no rows or the rows are empty.
/// - [`GridError::ShapeMismatch`] if a row's length differs from the
///   first row's (`expected` and `got` are row lengths).
pub fn from_rows<T: PartialEq + Default>(
    rows: &[Vec<T>],
    polarity: Polarity,
) -> Result<Grid, GridError> {
    let cols = rows.first().map_or(0, Vec::len);
    let mut cells = Vec::with_capacity(rows.len() * cols);
    push_rows(&mut cells, rows, cols, polarity)?;
    Grid::new(&[rows.len(), cols], cells)
}

/// Stack equally-shaped 2D slices into a 3D grid, `z` first.
///
/// Each slice is a list of rows, so the result has dims
/// `[slices.len(), rows, cols]`.
///
/// # Errors
///
/// - [`GridError::EmptyGrid`] if there are no slices, or the first slice
///   has no cells.
/// - [`GridError::ShapeMismatch`] if a slice has a different number of rows
///   than the first (`expected` and `got` are row counts), or a row a
///   different length (`expected` and `got` are row lengths).
///
/// # Examples
///
/// ```
/// use gdt::import::{stack_slices, Polarity};
///
/// let slices = vec![
///     vec![vec![0u8, 255], vec![255, 255]],
///     vec![vec![0u8, 0], vec![0, 255]],
/// ];
/// let grid = stack_slices(&slices, Polarity::Zero).unwrap();
/// assert_eq!(grid.dims(), &[2, 2, 2]);
/// assert_eq!(grid.is_foreground(&[0, 0, 0]), Some(true));
/// assert_eq!(grid.is_foreground(&[1, 1, 1]), Some(false));
/// ```
pub fn stack_slices<T: PartialEq + Default>(
    slices: &[Vec<Vec<T>>],
    polarity: Polarity,
) -> Result<Grid, GridError> {
    let first = slices.first().ok_or(GridError::EmptyGrid)?;
    let rows = first.len();
    let cols = first.first().map_or(0, Vec::len);

    let mut cells = Vec::with_capacity(slices.len() * rows * cols);
    for slice in slices {
        if slice.len() != rows {
            return Err(GridError::ShapeMismatch {
                expected: rows,
                got: slice.len(),
            });
        }
        push_rows(&mut cells, slice, cols, polarity)?;
    }
    log::debug!("stacked {} slices of {rows}x{cols}", slices.len());
    Grid::new(&[slices.len(), rows, cols], cells)
}

fn push_rows<T: PartialEq + Default>(
    cells: &mut Vec<bool>,
    rows: &[Vec<T>],
    cols: usize,
    polarity: Polarity,
) -> Result<(), GridError> {
    for row in rows {
        if row.len() != cols {
            return Err(GridError::ShapeMismatch {
                expected: cols,
                got: row.len(),
            });
        }
        cells.extend(row.iter().map(|v| polarity.is_foreground(v)));
    }
    Ok(())
}
