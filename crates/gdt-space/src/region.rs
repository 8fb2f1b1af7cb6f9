//! Bounding-box restriction: crop a grid to the box enclosing a set of
//! points of interest.
//!
//! The propagator needs no special support for cropped grids. Callers run
//! it on [`Cropped::grid`] and map coordinates back with
//! [`Cropped::to_parent`]. Note that periodic boundaries wrap at the
//! *cropped* edges, so only cells whose paths never touch the crop border
//! keep their full-grid distances.

use crate::error::SpaceError;
use gdt_core::{Coord, Grid};
use smallvec::SmallVec;

/// Axis-aligned inclusive box in grid coordinates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundingBox {
    min: Coord,
    max: Coord,
}

impl BoundingBox {
    /// The smallest box containing every point.
    ///
    /// # Errors
    ///
    /// Returns [`SpaceError::InvalidRegion`] if `points` is empty, mixes
    /// ranks, or contains a negative component.
    pub fn enclosing(points: &[Coord]) -> Result<Self, SpaceError> {
        let first = points.first().ok_or_else(|| SpaceError::InvalidRegion {
            reason: "bounding box needs at least one point".into(),
        })?;
        let mut min = first.clone();
        let mut max = first.clone();

        for p in points {
            if p.len() != first.len() {
                return Err(SpaceError::InvalidRegion {
                    reason: format!(
                        "mixed ranks: {:?} is {}D, {:?} is {}D",
                        first,
                        first.len(),
                        p,
                        p.len()
                    ),
                });
            }
            if p.iter().any(|&c| c < 0) {
                return Err(SpaceError::InvalidRegion {
                    reason: format!("negative component in {p:?}"),
                });
            }
            for axis in 0..p.len() {
                min[axis] = min[axis].min(p[axis]);
                max[axis] = max[axis].max(p[axis]);
            }
        }

        Ok(Self { min, max })
    }

    /// Minimum corner (inclusive); also the crop offset.
    pub fn min(&self) -> &[i32] {
        &self.min
    }

    /// Maximum corner (inclusive).
    pub fn max(&self) -> &[i32] {
        &self.max
    }

    /// Extent along each axis.
    pub fn dims(&self) -> SmallVec<[usize; 4]> {
        self.min
            .iter()
            .zip(&self.max)
            .map(|(&lo, &hi)| (hi - lo) as usize + 1)
            .collect()
    }

    /// Whether `coord` lies inside the box.
    pub fn contains(&self, coord: &[i32]) -> bool {
        coord.len() == self.min.len()
            && coord
                .iter()
                .zip(self.min.iter().zip(&self.max))
                .all(|(&c, (&lo, &hi))| c >= lo && c <= hi)
    }
}

/// A grid cropped to a bounding box, with the points of interest remapped.
#[derive(Clone, Debug, PartialEq)]
pub struct Cropped {
    /// The cropped sub-grid.
    pub grid: Grid,
    /// Position of the sub-grid's `[0, .., 0]` cell in the parent grid.
    pub offset: Coord,
    /// The input points in sub-grid coordinates, in input order.
    pub points: Vec<Coord>,
}

impl Cropped {
    /// Map a sub-grid coordinate back to the parent grid.
    pub fn to_parent(&self, coord: &[i32]) -> Coord {
        coord.iter().zip(&self.offset).map(|(&c, &o)| c + o).collect()
    }

    /// Map a parent coordinate into the sub-grid, or `None` if it falls outside.
    pub fn to_local(&self, coord: &[i32]) -> Option<Coord> {
        if coord.len() != self.offset.len() {
            return None;
        }
        let local: Coord = coord
            .iter()
            .zip(&self.offset)
            .map(|(&c, &o)| c - o)
            .collect();
        self.grid.shape().contains(&local).then_some(local)
    }
}

/// Crop `grid` to the smallest box containing all `points`.
///
/// # Errors
///
/// - [`SpaceError::CoordOutOfBounds`] if a point lies outside `grid`.
/// - [`SpaceError::InvalidRegion`] if `points` is empty.
///
/// # Examples
///
/// ```
/// use gdt_core::Grid;
/// use gdt_space::crop;
/// use smallvec::smallvec;
///
/// let grid = Grid::filled(&[10, 10], true).unwrap();
/// let cropped = crop(&grid, &[smallvec![2, 3], smallvec![5, 4]]).unwrap();
/// assert_eq!(cropped.grid.dims(), &[4, 2]);
/// assert_eq!(cropped.offset.as_slice(), &[2, 3]);
/// assert_eq!(cropped.points[1].as_slice(), &[3, 1]);
/// ```
pub fn crop(grid: &Grid, points: &[Coord]) -> Result<Cropped, SpaceError> {
    for p in points {
        if !grid.shape().contains(p) {
            return Err(SpaceError::CoordOutOfBounds {
                coord: p.clone(),
                bounds: grid.shape().bounds(),
            });
        }
    }
    let bbox = BoundingBox::enclosing(points)?;
    let offset: Coord = SmallVec::from_slice(bbox.min());

    let sub = Grid::from_fn(&bbox.dims(), |local| {
        let parent: Coord = local.iter().zip(&offset).map(|(&c, &o)| c + o).collect();
        grid.is_foreground(&parent).unwrap_or(false)
    })?;

    let local_points: Vec<Coord> = points
        .iter()
        .map(|p| p.iter().zip(&offset).map(|(&c, &o)| c - o).collect())
        .collect();

    Ok(Cropped {
        grid: sub,
        offset,
        points: local_points,
    })
}
