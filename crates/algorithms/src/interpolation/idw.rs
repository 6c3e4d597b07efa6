//! Inverse Distance Weighting (IDW) interpolation
//!
//! Estimates values at query locations as a weighted average of all sample
//! points, where weights are inversely proportional to distance raised to a
//! power parameter (global IDW: no search radius, no neighbor limit).
//!
//! Reference:
//! Shepard, D. (1968). A two-dimensional interpolation function for
//! irregularly-spaced data. ACM National Conference.

use idwgrid_core::{
    Algorithm, Error, Grid, MeshGrid, QueryPoints, Result, SampleSet,
};
use num_traits::Float;
use tracing::{debug, trace};

use crate::maybe_rayon::*;

/// Parameters for IDW interpolation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IdwParams<T = f64> {
    /// Power parameter (default: 2.0).
    /// Higher values give more weight to nearby points.
    pub power: T,
}

impl<T: Float> Default for IdwParams<T> {
    fn default() -> Self {
        Self {
            power: T::one() + T::one(),
        }
    }
}

impl<T: Float> IdwParams<T> {
    pub fn with_power(power: T) -> Self {
        Self { power }
    }

    /// Power must be finite and strictly positive.
    pub fn validate(&self) -> Result<()> {
        check_power(self.power)
    }
}

/// IDW as an [`Algorithm`] over `f64` samples and query points
#[derive(Debug, Clone, Copy, Default)]
pub struct Idw;

impl Algorithm for Idw {
    type Input = (SampleSet<f64>, QueryPoints<f64>);
    type Output = Vec<f64>;
    type Params = IdwParams<f64>;
    type Error = Error;

    fn name(&self) -> &'static str {
        "IDW"
    }

    fn description(&self) -> &'static str {
        "Inverse distance weighting of scattered samples over all points"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        let (samples, queries) = input;
        idw(&samples, &queries, &params)
    }
}

/// Interpolate scattered samples at arbitrary query points.
///
/// # Algorithm
///
/// For each query point q and every sample i:
///
/// ```text
/// d_i = |q - p_i|            (d_i == 0 is replaced by T::epsilon())
/// w_i = 1 / d_i^p
/// z(q) = Σ (w_i / Σ w_k) * z_i
/// ```
///
/// A query point that coincides with a sample is *not* special-cased: its
/// zero distance becomes machine epsilon, producing a huge but finite
/// weight. The result is dominated by that sample's value but need not
/// equal it exactly.
///
/// # Errors
/// * [`Error::InvalidInput`] if `xs`, `ys`, `values` differ in length or are
///   empty, or if `xq` and `yq` differ in length.
/// * [`Error::InvalidParameter`] if `power` is not finite and positive.
///
/// All checks run before any computation, so an error never carries a
/// partial result. An empty query set returns an empty vector.
pub fn idw_interpolate<T>(
    xs: &[T],
    ys: &[T],
    values: &[T],
    xq: &[T],
    yq: &[T],
    power: T,
) -> Result<Vec<T>>
where
    T: Float + Send + Sync,
{
    check_samples(xs, ys, values)?;
    if xq.len() != yq.len() {
        return Err(Error::InvalidInput(format!(
            "length mismatch: xq has {} elements, yq has {}",
            xq.len(),
            yq.len()
        )));
    }
    check_power(power)?;

    Ok(interpolate_unchecked(xs, ys, values, xq, yq, power))
}

/// Interpolate a [`SampleSet`] at a set of [`QueryPoints`].
///
/// Length invariants are already guaranteed by the input types; only the
/// power is checked here.
pub fn idw<T>(samples: &SampleSet<T>, queries: &QueryPoints<T>, params: &IdwParams<T>) -> Result<Vec<T>>
where
    T: Float + Send + Sync,
{
    params.validate()?;

    Ok(interpolate_unchecked(
        samples.xs(),
        samples.ys(),
        samples.values(),
        queries.xs(),
        queries.ys(),
        params.power,
    ))
}

/// Interpolate onto every node of a regular mesh.
///
/// The returned grid has shape `mesh.shape()` = (y count, x count), with
/// `grid[(row, col)]` the estimate at `(x[col], y[row])`.
pub fn idw_grid<T>(samples: &SampleSet<T>, mesh: &MeshGrid<T>, params: &IdwParams<T>) -> Result<Grid<T>>
where
    T: Float + Send + Sync,
{
    mesh.validate()?;
    let queries = mesh.query_points();
    let data = idw(samples, &queries, params)?;
    Grid::from_mesh(data, *mesh)
}

fn check_samples<T>(xs: &[T], ys: &[T], values: &[T]) -> Result<()> {
    if xs.len() != ys.len() || xs.len() != values.len() {
        return Err(Error::InvalidInput(format!(
            "length mismatch: xs has {}, ys has {}, values has {} elements",
            xs.len(),
            ys.len(),
            values.len()
        )));
    }
    if xs.is_empty() {
        return Err(Error::InvalidInput("No sample points provided".into()));
    }
    Ok(())
}

fn check_power<T: Float>(power: T) -> Result<()> {
    if !power.is_finite() || power <= T::zero() {
        return Err(Error::InvalidParameter {
            name: "power",
            value: power.to_f64().unwrap_or(f64::NAN).to_string(),
            reason: "must be finite and > 0".into(),
        });
    }
    Ok(())
}

/// Inputs must already be validated.
fn interpolate_unchecked<T>(xs: &[T], ys: &[T], values: &[T], xq: &[T], yq: &[T], power: T) -> Vec<T>
where
    T: Float + Send + Sync,
{
    debug!(
        samples = xs.len(),
        queries = xq.len(),
        power = power.to_f64().unwrap_or(f64::NAN),
        "idw interpolation"
    );

    (0..xq.len())
        .into_par_iter()
        .map(|j| estimate_at(xs, ys, values, xq[j], yq[j], power, j))
        .collect()
}

/// Weighted estimate for a single query point. O(N) scratch memory.
fn estimate_at<T: Float>(xs: &[T], ys: &[T], values: &[T], qx: T, qy: T, power: T, query: usize) -> T {
    let mut weights = Vec::with_capacity(xs.len());
    let mut sum_w = T::zero();

    for (i, (&x, &y)) in xs.iter().zip(ys).enumerate() {
        let dx = qx - x;
        let dy = qy - y;
        let mut d = (dx * dx + dy * dy).sqrt();
        if d == T::zero() {
            trace!(query, sample = i, "zero distance replaced with epsilon");
            d = T::epsilon();
        }
        let w = T::one() / d.powf(power);
        sum_w = sum_w + w;
        weights.push(w);
    }

    weights
        .iter()
        .zip(values)
        .fold(T::zero(), |acc, (&w, &z)| acc + (w / sum_w) * z)
}
