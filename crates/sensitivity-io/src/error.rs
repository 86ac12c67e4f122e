//! Errors raised while reading input files

use std::path::PathBuf;
use thiserror::Error;

/// Failure to read a parameter, sample or output file
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A field that is not a real number
    #[error("Invalid value at line {line}, column {column}: '{value}'")]
    InvalidValue {
        line: usize,
        column: usize,
        value: String,
    },

    /// A parameter file line that does not read `name lower upper`
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// A row whose width differs from the first row
    #[error("Ragged row at line {line}: expected {expected} fields, got {actual}")]
    Ragged {
        line: usize,
        expected: usize,
        actual: usize,
    },

    /// A selected column index beyond the row width
    #[error("Column {column} out of range: rows have {available} fields")]
    ColumnOutOfRange { column: usize, available: usize },

    /// Parsed contents that do not form a valid problem
    #[error(transparent)]
    Problem(#[from] sensitivity_delta::Error),

    /// A file with no data rows
    #[error("No data in {}", .0.display())]
    Empty(PathBuf),
}

/// Result type alias for file loading
pub type Result<T> = std::result::Result<T, LoadError>;
