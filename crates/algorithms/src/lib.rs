//! # idwgrid Algorithms
//!
//! Interpolation algorithms for idwgrid.
//!
//! ## Available Algorithm Categories
//!
//! - **interpolation**: inverse distance weighting (IDW)
//!
//! With the default `parallel` feature, query points are processed on the
//! rayon thread pool. Results do not depend on the feature.

mod maybe_rayon;
pub mod interpolation;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::interpolation::{idw, idw_grid, idw_interpolate, Idw, IdwParams};
    pub use idwgrid_core::prelude::*;
}
