//! # idwgrid Core
//!
//! Core types, traits and I/O for the idwgrid interpolation library.
//!
//! This crate provides:
//! - `SampleSet<T>` / `QueryPoints<T>`: scattered samples and query locations
//!   stored as parallel coordinate arrays
//! - `GridAxis` / `MeshGrid`: regular grids expanded into query points
//! - `Grid<T>`: interpolated values reshaped onto a 2-D grid
//! - Algorithm trait for a consistent API
//! - Reading sample tables from delimited text

pub mod error;
pub mod grid;
pub mod io;
pub mod sample;

pub use error::{Error, Result};
pub use grid::{Grid, GridAxis, GridStatistics, MeshGrid};
pub use sample::{QueryPoints, SamplePoint, SampleSet};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::grid::{Grid, GridAxis, MeshGrid};
    pub use crate::sample::{QueryPoints, SamplePoint, SampleSet};
    pub use crate::Algorithm;
}

/// Core trait for all algorithms in idwgrid.
///
/// Algorithms are pure functions that transform input data according to parameters.
pub trait Algorithm {
    /// Input type for the algorithm
    type Input;
    /// Output type for the algorithm
    type Output;
    /// Parameters controlling algorithm behavior
    type Params: Default;
    /// Error type for algorithm execution
    type Error: std::error::Error;

    /// Returns the algorithm name
    fn name(&self) -> &'static str;

    /// Returns a description of what the algorithm does
    fn description(&self) -> &'static str;

    /// Execute the algorithm
    fn execute(&self, input: Self::Input, params: Self::Params) -> std::result::Result<Self::Output, Self::Error>;

    /// Execute with default parameters
    fn execute_default(&self, input: Self::Input) -> std::result::Result<Self::Output, Self::Error> {
        self.execute(input, Self::Params::default())
    }
}
