//! Scattered samples and query locations
//!
//! Both collections are stored as parallel coordinate arrays, which is the
//! layout interpolation kernels iterate over. Length invariants are checked
//! once at construction so downstream code can index freely.

use num_traits::Float;

use crate::error::{Error, Result};

/// A sample point with x, y coordinates and a value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplePoint<T = f64> {
    pub x: T,
    pub y: T,
    pub value: T,
}

impl<T: Float> SamplePoint<T> {
    pub fn new(x: T, y: T, value: T) -> Self {
        Self { x, y, value }
    }

    /// Squared Euclidean distance to another point
    #[inline]
    pub fn dist_sq(&self, other_x: T, other_y: T) -> T {
        let dx = other_x - self.x;
        let dy = other_y - self.y;
        dx * dx + dy * dy
    }

    /// Euclidean distance to another point
    #[inline]
    pub fn dist(&self, other_x: T, other_y: T) -> T {
        self.dist_sq(other_x, other_y).sqrt()
    }
}

/// A non-empty set of scattered samples.
///
/// Invariant: `xs`, `ys` and `values` have the same length, which is at least 1.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet<T = f64> {
    xs: Vec<T>,
    ys: Vec<T>,
    values: Vec<T>,
}

impl<T: Float> SampleSet<T> {
    /// Build a sample set from parallel arrays.
    ///
    /// Fails with [`Error::InvalidInput`] if the arrays differ in length or are empty.
    pub fn new(xs: Vec<T>, ys: Vec<T>, values: Vec<T>) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(Error::length_mismatch("xs", xs.len(), "ys", ys.len()));
        }
        if xs.len() != values.len() {
            return Err(Error::length_mismatch("xs", xs.len(), "values", values.len()));
        }
        if xs.is_empty() {
            return Err(Error::InvalidInput("No sample points provided".into()));
        }
        Ok(Self { xs, ys, values })
    }

    /// Build a sample set from a slice of points.
    pub fn from_points(points: &[SamplePoint<T>]) -> Result<Self> {
        let xs = points.iter().map(|p| p.x).collect();
        let ys = points.iter().map(|p| p.y).collect();
        let values = points.iter().map(|p| p.value).collect();
        Self::new(xs, ys, values)
    }

    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    pub fn ys(&self) -> &[T] {
        &self.ys
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Number of samples (always >= 1)
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Whether the set has no samples (never true after construction)
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Get the sample at `index`
    pub fn get(&self, index: usize) -> Option<SamplePoint<T>> {
        Some(SamplePoint::new(
            *self.xs.get(index)?,
            *self.ys.get(index)?,
            *self.values.get(index)?,
        ))
    }

    /// Iterate over samples as points
    pub fn iter(&self) -> impl ExactSizeIterator<Item = SamplePoint<T>> + '_ {
        self.xs
            .iter()
            .zip(&self.ys)
            .zip(&self.values)
            .map(|((&x, &y), &value)| SamplePoint::new(x, y, value))
    }

    /// (min, max) of the sample values, ignoring NaN
    pub fn value_range(&self) -> (T, T) {
        self.values
            .iter()
            .filter(|v| !v.is_nan())
            .fold((T::infinity(), T::neg_infinity()), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
    }
}

/// An ordered set of query locations. May be empty.
///
/// Invariant: `xs` and `ys` have the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryPoints<T = f64> {
    xs: Vec<T>,
    ys: Vec<T>,
}

impl<T: Float> QueryPoints<T> {
    /// Build query points from parallel arrays.
    ///
    /// Fails with [`Error::InvalidInput`] if the arrays differ in length.
    pub fn new(xs: Vec<T>, ys: Vec<T>) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(Error::length_mismatch("xq", xs.len(), "yq", ys.len()));
        }
        Ok(Self { xs, ys })
    }

    /// Caller guarantees `xs.len() == ys.len()`
    pub(crate) fn from_parts(xs: Vec<T>, ys: Vec<T>) -> Self {
        debug_assert_eq!(xs.len(), ys.len());
        Self { xs, ys }
    }

    pub fn empty() -> Self {
        Self {
            xs: Vec::new(),
            ys: Vec::new(),
        }
    }

    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    pub fn ys(&self) -> &[T] {
        &self.ys
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Query point at `index` as (x, y)
    pub fn get(&self, index: usize) -> Option<(T, T)> {
        Some((*self.xs.get(index)?, *self.ys.get(index)?))
    }
}
