//! Delimited text tables of `x y value` rows
//!
//! ```text
//! lon	lat	value
//! 121.39	13.51	1.494
//! 126.19	12.02	1.934
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::sample::SampleSet;

/// Options for reading sample tables
#[derive(Debug, Clone)]
pub struct TableOptions {
    /// Field separator (default: tab)
    pub delimiter: char,
    /// Number of leading lines to skip, e.g. a header row (default: 1)
    pub skip_rows: usize,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            delimiter: '\t',
            skip_rows: 1,
        }
    }
}

/// Read a sample table from a file
pub fn read_samples_from_path<P: AsRef<Path>>(
    path: P,
    options: &TableOptions,
) -> Result<SampleSet<f64>> {
    let file = File::open(path.as_ref())?;
    read_samples(BufReader::new(file), options)
}

/// Read a sample table from an in-memory string
pub fn read_samples_from_str(text: &str, options: &TableOptions) -> Result<SampleSet<f64>> {
    read_samples(Cursor::new(text.as_bytes()), options)
}

/// Read a sample table from any buffered reader.
///
/// Each data row must hold exactly three numeric fields: x, y, value.
/// Surrounding whitespace is trimmed, blank lines and `#` comments are
/// skipped. Errors report 1-based line numbers.
pub fn read_samples<R: BufRead>(reader: R, options: &TableOptions) -> Result<SampleSet<f64>> {
    let mut xs = Vec::new();
    let mut ys = Vec::new();
    let mut values = Vec::new();

    for (idx, line) in reader.lines().enumerate().skip(options.skip_rows) {
        let line = line?;
        let line_no = idx + 1;
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = trimmed
            .split(options.delimiter)
            .map(str::trim)
            .collect();

        if fields.len() != 3 {
            return Err(Error::Parse {
                line: line_no,
                reason: format!("expected 3 fields, found {}", fields.len()),
            });
        }

        let mut parsed = [0.0f64; 3];
        for (slot, field) in parsed.iter_mut().zip(&fields) {
            *slot = field.parse().map_err(|e| Error::Parse {
                line: line_no,
                reason: format!("invalid number {:?}: {}", field, e),
            })?;
        }

        xs.push(parsed[0]);
        ys.push(parsed[1]);
        values.push(parsed[2]);
    }

    debug!(rows = xs.len(), "read sample table");

    SampleSet::new(xs, ys, values)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = "lon\tlat\tvalue
121.39\t13.51\t1.494
126.19\t12.02\t1.934

130.27\t13.11\t2.148
";

    #[test]
    fn test_read_tab_table() {
        let samples = read_samples_from_str(TABLE, &TableOptions::default()).unwrap();
        assert_eq!(samples.len(), 3);
        assert_eq!(samples.xs(), &[121.39, 126.19, 130.27]);
        assert_eq!(samples.ys(), &[13.51, 12.02, 13.11]);
        assert_eq!(samples.values(), &[1.494, 1.934, 2.148]);
    }

    #[test]
    fn test_read_indented_table() {
        let text = "    lon\tlat\tvalue\n    1\t2\t3\n    # comment\n    4\t5\t6\n";
        let samples = read_samples_from_str(text, &TableOptions::default()).unwrap();
        assert_eq!(samples.values(), &[3.0, 6.0]);
    }

    #[test]
    fn test_read_csv_without_header() {
        let options = TableOptions {
            delimiter: ',',
            skip_rows: 0,
        };
        let samples = read_samples_from_str("0, 0, 1\n10, 0, 2\n", &options).unwrap();
        assert_eq!(samples.xs(), &[0.0, 10.0]);
    }

    #[test]
    fn test_wrong_field_count() {
        let text = "h\n1\t2\t3\n4\t5\n";
        let err = read_samples_from_str(text, &TableOptions::default()).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 3, .. }), "got {:?}", err);
    }

    #[test]
    fn test_bad_number() {
        let text = "h\n1\tabc\t3\n";
        let err = read_samples_from_str(text, &TableOptions::default()).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 2, .. }));
    }

    #[test]
    fn test_header_only_is_empty_input() {
        let err = read_samples_from_str("lon\tlat\tvalue\n", &TableOptions::default()).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = read_samples_from_path("/nonexistent/samples.tsv", &TableOptions::default())
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
