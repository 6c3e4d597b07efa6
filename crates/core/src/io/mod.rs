//! I/O operations for reading scattered sample data

mod table;

pub use table::{read_samples, read_samples_from_path, read_samples_from_str, TableOptions};
