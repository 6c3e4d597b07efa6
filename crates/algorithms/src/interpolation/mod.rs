//! Spatial interpolation of scattered samples
//!
//! - IDW: global inverse distance weighting, at arbitrary query points or
//!   onto every node of a regular mesh

mod idw;

pub use idw::{idw, idw_grid, idw_interpolate, Idw, IdwParams};
