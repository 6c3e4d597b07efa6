//! Regular grids
//!
//! A [`MeshGrid`] is defined by one [`GridAxis`] per dimension, each an
//! evenly spaced `(min, max, count)` range. Expanding the mesh produces the
//! flattened query points an interpolator consumes; [`Grid`] holds the
//! values that come back, in the same row-major order.

mod raster;

pub use raster::{Grid, GridStatistics};

use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::sample::QueryPoints;

/// One axis of a regular grid: `count` evenly spaced values from `min` to
/// `max`, both inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridAxis<T = f64> {
    pub min: T,
    pub max: T,
    pub count: usize,
}

impl<T: Float> GridAxis<T> {
    /// Create a new axis.
    ///
    /// `count` must be at least 1 and both bounds finite. `min > max` is
    /// allowed and yields a descending axis.
    pub fn new(min: T, max: T, count: usize) -> Result<Self> {
        let axis = Self { min, max, count };
        axis.validate()?;
        Ok(axis)
    }

    /// Check the axis invariants. Useful after deserializing.
    pub fn validate(&self) -> Result<()> {
        if self.count == 0 {
            return Err(Error::InvalidParameter {
                name: "count",
                value: "0".into(),
                reason: "axis must have at least one value".into(),
            });
        }
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(Error::InvalidParameter {
                name: "bounds",
                value: format!(
                    "({}, {})",
                    self.min.to_f64().unwrap_or(f64::NAN),
                    self.max.to_f64().unwrap_or(f64::NAN)
                ),
                reason: "axis bounds must be finite".into(),
            });
        }
        Ok(())
    }

    /// Spacing between consecutive values (zero for a single-value axis)
    pub fn step(&self) -> T {
        if self.count < 2 {
            return T::zero();
        }
        let div = T::from(self.count - 1).unwrap_or_else(T::one);
        (self.max - self.min) / div
    }

    /// Evenly spaced axis values. The last value is exactly `max`.
    pub fn values(&self) -> Vec<T> {
        if self.count == 0 {
            return Vec::new();
        }
        let step = self.step();
        let mut out: Vec<T> = (0..self.count)
            .map(|i| self.min + T::from(i).unwrap_or_else(T::zero) * step)
            .collect();
        if self.count > 1 {
            out[self.count - 1] = self.max;
        }
        out
    }
}

/// A rectangular mesh built from an x axis (columns) and a y axis (rows).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeshGrid<T = f64> {
    pub x: GridAxis<T>,
    pub y: GridAxis<T>,
}

impl<T: Float> MeshGrid<T> {
    pub fn new(x: GridAxis<T>, y: GridAxis<T>) -> Result<Self> {
        let mesh = Self { x, y };
        mesh.validate()?;
        Ok(mesh)
    }

    pub fn validate(&self) -> Result<()> {
        self.x.validate()?;
        self.y.validate()
    }

    /// Grid dimensions as (rows, cols) = (y count, x count)
    pub fn shape(&self) -> (usize, usize) {
        (self.y.count, self.x.count)
    }

    /// Total number of grid nodes
    pub fn len(&self) -> usize {
        self.x.count * self.y.count
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Expand the mesh into flattened query points.
    ///
    /// Row-major: y varies slowest, x fastest, so index `row * cols + col`
    /// holds `(x[col], y[row])`.
    pub fn query_points(&self) -> QueryPoints<T> {
        let xv = self.x.values();
        let yv = self.y.values();
        let n = xv.len() * yv.len();

        let mut xs = Vec::with_capacity(n);
        let mut ys = Vec::with_capacity(n);
        for &y in &yv {
            for &x in &xv {
                xs.push(x);
                ys.push(y);
            }
        }

        QueryPoints::from_parts(xs, ys)
    }
}
