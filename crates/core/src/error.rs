//! Error types for idwgrid

use thiserror::Error;

/// Main error type for idwgrid operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("Invalid grid dimensions: {rows}x{cols} cannot hold {len} values")]
    InvalidDimensions { rows: usize, cols: usize, len: usize },

    #[error("Index out of bounds: ({row}, {col}) in grid of size ({rows}, {cols})")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Parse error on line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

impl Error {
    /// Shorthand for a length mismatch between two named arrays
    pub(crate) fn length_mismatch(a: &str, a_len: usize, b: &str, b_len: usize) -> Self {
        Error::InvalidInput(format!(
            "length mismatch: {} has {} elements, {} has {}",
            a, a_len, b, b_len
        ))
    }
}

/// Result type alias for idwgrid operations
pub type Result<T> = std::result::Result<T, Error>;
