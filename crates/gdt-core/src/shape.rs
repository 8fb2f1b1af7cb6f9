//! The [`Coord`] type alias and the row-major [`Shape`] of a grid.

use crate::error::GridError;
use smallvec::SmallVec;
use std::fmt;

/// A cell coordinate, one index per axis, outermost axis first.
///
/// For a 2D grid this is `[y, x]`, for a 3D grid `[z, y, x]`. Components
/// are signed so that neighbour offsets can be added before wrapping.
/// `SmallVec<[i32; 4]>` keeps 2D and 3D coordinates off the heap.
pub type Coord = SmallVec<[i32; 4]>;

/// Axis lengths of a dense, row-major grid.
///
/// The last axis varies fastest. Every axis is at least 1 long and at most
/// [`Shape::MAX_DIM`], so each coordinate component fits in an `i32`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Shape {
    dims: SmallVec<[usize; 4]>,
    strides: SmallVec<[usize; 4]>,
    cell_count: usize,
}

impl Shape {
    /// Maximum axis length: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: usize = i32::MAX as usize;

    /// Create a shape from axis lengths, outermost first.
    ///
    /// # Errors
    ///
    /// - [`GridError::EmptyGrid`] if `dims` is empty or any axis is 0.
    /// - [`GridError::DimensionTooLarge`] if an axis exceeds [`Shape::MAX_DIM`].
    /// - [`GridError::TooManyCells`] if the cell count overflows.
    ///
    /// # Examples
    ///
    /// ```
    /// use gdt_core::Shape;
    ///
    /// let shape = Shape::new(&[4, 5]).unwrap();
    /// assert_eq!(shape.cell_count(), 20);
    /// assert_eq!(shape.flat_index(&[1, 2]), Some(7));
    /// ```
    pub fn new(dims: &[usize]) -> Result<Self, GridError> {
        if dims.is_empty() || dims.contains(&0) {
            return Err(GridError::EmptyGrid);
        }
        for (axis, &value) in dims.iter().enumerate() {
            if value > Self::MAX_DIM {
                return Err(GridError::DimensionTooLarge {
                    axis,
                    value,
                    max: Self::MAX_DIM,
                });
            }
        }

        let mut strides: SmallVec<[usize; 4]> = SmallVec::from_elem(1, dims.len());
        let mut cell_count = 1usize;
        for axis in (0..dims.len()).rev() {
            strides[axis] = cell_count;
            cell_count = cell_count
                .checked_mul(dims[axis])
                .ok_or(GridError::TooManyCells)?;
        }

        Ok(Self {
            dims: SmallVec::from_slice(dims),
            strides,
            cell_count,
        })
    }

    /// Axis lengths, outermost first.
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Row-major strides, outermost first.
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Number of axes.
    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cell_count
    }

    /// Whether `coord` has this shape's rank and lies inside it.
    pub fn contains(&self, coord: &[i32]) -> bool {
        coord.len() == self.rank()
            && coord
                .iter()
                .zip(&self.dims)
                .all(|(&c, &d)| c >= 0 && (c as usize) < d)
    }

    /// Row-major flat index of `coord`, or `None` if it is out of bounds.
    pub fn flat_index(&self, coord: &[i32]) -> Option<usize> {
        if !self.contains(coord) {
            return None;
        }
        Some(
            coord
                .iter()
                .zip(&self.strides)
                .map(|(&c, &s)| c as usize * s)
                .sum(),
        )
    }

    /// Coordinate of the cell at flat `index`.
    ///
    /// `index` must be below [`cell_count`](Self::cell_count); larger values
    /// wrap on the outermost axis.
    pub fn coord_of(&self, index: usize) -> Coord {
        let mut rest = index;
        self.strides
            .iter()
            .map(|&s| {
                let c = rest / s;
                rest %= s;
                c as i32
            })
            .collect()
    }

    /// Human-readable valid range, e.g. `[0, 4) x [0, 5)`.
    pub fn bounds(&self) -> String {
        self.dims
            .iter()
            .map(|d| format!("[0, {d})"))
            .collect::<Vec<_>>()
            .join(" x ")
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.dims.iter().map(|d| d.to_string()).collect();
        write!(f, "{}", parts.join("x"))
    }
}
