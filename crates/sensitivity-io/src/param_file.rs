//! Parameter description files
//!
//! One parameter per line: `name lower upper`, separated by whitespace or
//! by a single delimiter character. Anything after the bounds (such as a
//! group label) is ignored, as are blank lines and lines starting with `#`.
//!
//! ```text
//! # name  lower  upper
//! x1      -3.14  3.14
//! x2      -3.14  3.14
//! ```

use crate::error::{LoadError, Result};
use crate::loader::Delimiter;
use sensitivity_delta::ProblemDescriptor;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Read a [`ProblemDescriptor`] from a whitespace-separated parameter file
pub fn read_param_file<P: AsRef<Path>>(path: P) -> Result<ProblemDescriptor> {
    read_param_file_with(path, Delimiter::Whitespace)
}

/// Read a [`ProblemDescriptor`] with an explicit field delimiter
pub fn read_param_file_with<P: AsRef<Path>>(path: P, delimiter: Delimiter) -> Result<ProblemDescriptor> {
    let path = path.as_ref();
    let problem = parse_params(File::open(path)?, delimiter)?;
    if problem.num_vars() == 0 {
        return Err(LoadError::Empty(path.to_path_buf()));
    }
    problem.validate()?;
    debug!(path = %path.display(), num_vars = problem.num_vars(), "loaded parameter file");
    Ok(problem)
}

/// Parse parameter lines from any reader
pub fn parse_params<R: Read>(reader: R, delimiter: Delimiter) -> Result<ProblemDescriptor> {
    let mut names = Vec::new();
    let mut bounds = Vec::new();

    for (idx, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        let content = line.trim();
        if content.is_empty() || content.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = match delimiter {
            Delimiter::Whitespace => content.split_whitespace().collect(),
            Delimiter::Char(byte) => content.split(char::from(byte)).map(str::trim).collect(),
        };
        let [name, lower, upper, ..] = fields[..] else {
            return Err(LoadError::Parse {
                line: idx + 1,
                message: format!("expected 'name lower upper', got {} fields", fields.len()),
            });
        };

        let parse_bound = |field: &str| -> Result<f64> {
            field.parse().map_err(|_| LoadError::Parse {
                line: idx + 1,
                message: format!("invalid bound '{field}' for parameter '{name}'"),
            })
        };
        names.push(name.to_string());
        bounds.push((parse_bound(lower)?, parse_bound(upper)?));
    }

    Ok(ProblemDescriptor::new(names).with_bounds(bounds))
}
