//! Interpolated values on a regular grid

use ndarray::{Array2, ArrayView2};
use num_traits::Float;

use super::MeshGrid;
use crate::error::{Error, Result};

/// A 2D grid of interpolated values.
///
/// Values are stored row-major as `(row, col)`, where rows follow the y axis
/// and columns the x axis of the [`MeshGrid`] the grid was built from.
///
/// # Example
///
/// ```
/// use idwgrid_core::Grid;
///
/// let grid = Grid::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3)?;
/// assert_eq!(grid.get(1, 0)?, 4.0);
/// # Ok::<(), idwgrid_core::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Grid<T = f64> {
    data: Array2<T>,
    mesh: Option<MeshGrid<T>>,
}

impl<T: Float> Grid<T> {
    /// Create a grid from row-major data
    pub fn from_vec(data: Vec<T>, rows: usize, cols: usize) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(Error::InvalidDimensions {
                rows,
                cols,
                len: data.len(),
            });
        }

        let len = data.len();
        let array = Array2::from_shape_vec((rows, cols), data)
            .map_err(|_| Error::InvalidDimensions { rows, cols, len })?;

        Ok(Self {
            data: array,
            mesh: None,
        })
    }

    /// Create a grid shaped after `mesh`, remembering its node coordinates
    pub fn from_mesh(data: Vec<T>, mesh: MeshGrid<T>) -> Result<Self> {
        let (rows, cols) = mesh.shape();
        let mut grid = Self::from_vec(data, rows, cols)?;
        grid.mesh = Some(mesh);
        Ok(grid)
    }

    /// Create a grid from an ndarray
    pub fn from_array(data: Array2<T>) -> Self {
        Self { data, mesh: None }
    }

    // Dimensions

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    /// Dimensions as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    // Data access

    /// Get value at (row, col)
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        self.data
            .get((row, col))
            .copied()
            .ok_or(Error::IndexOutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            })
    }

    /// Get a view of the underlying data
    pub fn view(&self) -> ArrayView2<'_, T> {
        self.data.view()
    }

    /// Get a reference to the underlying array
    pub fn data(&self) -> &Array2<T> {
        &self.data
    }

    /// Consume the grid and return the underlying array
    pub fn into_array(self) -> Array2<T> {
        self.data
    }

    /// The mesh this grid was built from, if any
    pub fn mesh(&self) -> Option<&MeshGrid<T>> {
        self.mesh.as_ref()
    }

    /// Coordinates (x, y) of the node at (row, col).
    ///
    /// Returns `None` for grids without a mesh or for out-of-range indices.
    pub fn node_coords(&self, row: usize, col: usize) -> Option<(T, T)> {
        let mesh = self.mesh.as_ref()?;
        if row >= self.rows() || col >= self.cols() {
            return None;
        }
        let x = mesh.x.min + T::from(col)? * mesh.x.step();
        let y = mesh.y.min + T::from(row)? * mesh.y.step();
        Some((x, y))
    }

    // Statistics

    /// Calculate basic statistics (min, max, mean, count of non-NaN cells)
    pub fn statistics(&self) -> GridStatistics<T> {
        let mut min: Option<T> = None;
        let mut max: Option<T> = None;
        let mut sum = T::zero();
        let mut count: usize = 0;

        for &value in self.data.iter() {
            if value.is_nan() {
                continue;
            }

            min = Some(min.map_or(value, |m| m.min(value)));
            max = Some(max.map_or(value, |m| m.max(value)));
            sum = sum + value;
            count += 1;
        }

        let mean = if count > 0 {
            T::from(count).map(|n| sum / n)
        } else {
            None
        };

        GridStatistics {
            min,
            max,
            mean,
            valid_count: count,
            nan_count: self.len() - count,
        }
    }
}

/// Basic statistics for a grid
#[derive(Debug, Clone, PartialEq)]
pub struct GridStatistics<T> {
    pub min: Option<T>,
    pub max: Option<T>,
    pub mean: Option<T>,
    pub valid_count: usize,
    pub nan_count: usize,
}
