//! Delimited numeric text files
//!
//! Sample matrices and output vectors are plain text, one sample per line.
//! Everything from a `#` to the end of its line is a comment, and blank
//! lines are skipped, whatever the delimiter. Column indices are zero-based.

use crate::error::{LoadError, Result};
use nalgebra::DMatrix;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// Field separator of a data file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delimiter {
    /// Any run of spaces or tabs
    #[default]
    Whitespace,
    /// A single byte such as `,` or `\t`, parsed as CSV
    Char(u8),
}

impl FromStr for Delimiter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "" | "whitespace" | "ws" => Ok(Self::Whitespace),
            "tab" | "\\t" => Ok(Self::Char(b'\t')),
            "comma" => Ok(Self::Char(b',')),
            _ if s.len() == 1 && s.is_ascii() => Ok(Self::Char(s.as_bytes()[0])),
            _ => Err(format!("Unsupported delimiter '{s}': use a single ASCII character")),
        }
    }
}

/// Parse all data rows from `reader`
///
/// Every row must have the width of the first one.
pub fn read_rows<R: Read>(reader: R, delimiter: Delimiter) -> Result<Vec<Vec<f64>>> {
    let rows = match delimiter {
        Delimiter::Whitespace => read_whitespace_rows(reader)?,
        Delimiter::Char(byte) => read_csv_rows(reader, byte)?,
    };

    if let Some((_, first)) = rows.first() {
        let width = first.len();
        if let Some((line, row)) = rows.iter().find(|(_, row)| row.len() != width) {
            return Err(LoadError::Ragged {
                line: *line,
                expected: width,
                actual: row.len(),
            });
        }
    }
    Ok(rows.into_iter().map(|(_, row)| row).collect())
}

fn read_whitespace_rows<R: Read>(reader: R) -> Result<Vec<(usize, Vec<f64>)>> {
    let mut rows = Vec::new();
    for (idx, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        let content = line.split('#').next().unwrap_or_default().trim();
        if content.is_empty() {
            continue;
        }
        let row = content
            .split_whitespace()
            .enumerate()
            .map(|(column, field)| parse_field(field, idx + 1, column))
            .collect::<Result<Vec<f64>>>()?;
        rows.push((idx + 1, row));
    }
    Ok(rows)
}

fn read_csv_rows<R: Read>(reader: R, delimiter: u8) -> Result<Vec<(usize, Vec<f64>)>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(delimiter)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let line = record.position().map_or(0, |p| p.line() as usize);
        let fields = strip_trailing_comment(&record);
        if fields.iter().all(|f| f.is_empty()) {
            continue;
        }
        let row = fields
            .into_iter()
            .enumerate()
            .map(|(column, field)| parse_field(field, line, column))
            .collect::<Result<Vec<f64>>>()?;
        rows.push((line, row));
    }
    Ok(rows)
}

/// Fields of `record` up to the first `#`, which may sit inside a field
fn strip_trailing_comment(record: &csv::StringRecord) -> Vec<&str> {
    let mut fields = Vec::with_capacity(record.len());
    for field in record.iter() {
        match field.split_once('#') {
            Some((head, _)) => {
                let head = head.trim();
                if !head.is_empty() {
                    fields.push(head);
                }
                break;
            }
            None => fields.push(field),
        }
    }
    fields
}

fn parse_field(field: &str, line: usize, column: usize) -> Result<f64> {
    field.parse().map_err(|_| LoadError::InvalidValue {
        line,
        column,
        value: field.to_string(),
    })
}

/// Load an `N × D` sample matrix, optionally keeping only `columns`
pub fn load_matrix<P: AsRef<Path>>(
    path: P,
    delimiter: Delimiter,
    columns: Option<&[usize]>,
) -> Result<DMatrix<f64>> {
    let path = path.as_ref();
    let rows = read_rows(File::open(path)?, delimiter)?;
    let width = rows.first().map_or(0, Vec::len);
    if rows.is_empty() || width == 0 {
        return Err(LoadError::Empty(path.to_path_buf()));
    }

    let selected: Vec<usize> = match columns {
        Some(columns) => {
            if let Some(&column) = columns.iter().find(|&&c| c >= width) {
                return Err(LoadError::ColumnOutOfRange {
                    column,
                    available: width,
                });
            }
            columns.to_vec()
        }
        None => (0..width).collect(),
    };

    let values: Vec<f64> = rows
        .iter()
        .flat_map(|row| selected.iter().map(move |&c| row[c]))
        .collect();
    debug!(path = %path.display(), rows = rows.len(), columns = selected.len(), "loaded sample matrix");
    Ok(DMatrix::from_row_slice(rows.len(), selected.len(), &values))
}

/// Load one column of a data file as a vector
pub fn load_vector<P: AsRef<Path>>(path: P, delimiter: Delimiter, column: usize) -> Result<Vec<f64>> {
    let path = path.as_ref();
    let rows = read_rows(File::open(path)?, delimiter)?;
    let width = rows.first().map_or(0, Vec::len);
    if rows.is_empty() {
        return Err(LoadError::Empty(path.to_path_buf()));
    }
    if column >= width {
        return Err(LoadError::ColumnOutOfRange {
            column,
            available: width,
        });
    }
    debug!(path = %path.display(), rows = rows.len(), column, "loaded output vector");
    Ok(rows.into_iter().map(|row| row[column]).collect())
}
