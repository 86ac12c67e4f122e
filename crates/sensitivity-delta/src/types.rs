//! Problem description and analysis results

use sensitivity_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Names and optional bounds of the model parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemDescriptor {
    pub names: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<Vec<(f64, f64)>>,
}

impl ProblemDescriptor {
    /// Parameters with the given names and no bounds
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            bounds: None,
        }
    }

    /// Attach sampling bounds, one `(lower, upper)` pair per parameter
    pub fn with_bounds(mut self, bounds: Vec<(f64, f64)>) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Number of parameters `D`
    pub fn num_vars(&self) -> usize {
        self.names.len()
    }

    /// At least one parameter; bounds, if any, one `lower < upper` pair each
    pub fn validate(&self) -> Result<()> {
        if self.names.is_empty() {
            return Err(Error::InvalidParameter(
                "Problem must declare at least one parameter".to_string(),
            ));
        }
        let Some(bounds) = &self.bounds else {
            return Ok(());
        };
        if bounds.len() != self.names.len() {
            return Err(Error::size_mismatch(self.names.len(), bounds.len(), "parameter bounds"));
        }
        for (name, &(lower, upper)) in self.names.iter().zip(bounds) {
            if !(lower < upper) {
                return Err(Error::InvalidParameter(format!(
                    "Bounds of '{name}' must satisfy lower < upper, got [{lower}, {upper}]"
                )));
            }
        }
        Ok(())
    }
}

/// Delta and first-order Sobol indices for every parameter
///
/// The four vectors are parallel to `names`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityIndices {
    pub names: Vec<String>,
    pub delta: Vec<f64>,
    pub delta_conf: Vec<f64>,
    #[serde(rename = "S1")]
    pub s1: Vec<f64>,
    #[serde(rename = "S1_conf")]
    pub s1_conf: Vec<f64>,
}

/// One parameter's row of a [`SensitivityIndices`] table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterIndices<'a> {
    pub name: &'a str,
    pub delta: f64,
    pub delta_conf: f64,
    pub s1: f64,
    pub s1_conf: f64,
}

impl SensitivityIndices {
    /// Result keys, in column order
    pub const KEYS: [&'static str; 4] = ["delta", "delta_conf", "S1", "S1_conf"];

    /// Zero-filled table for the given parameter names
    pub fn zeros(names: Vec<String>) -> Self {
        let d = names.len();
        Self {
            names,
            delta: vec![0.0; d],
            delta_conf: vec![0.0; d],
            s1: vec![0.0; d],
            s1_conf: vec![0.0; d],
        }
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn delta(&self) -> &[f64] {
        &self.delta
    }

    pub fn delta_conf(&self) -> &[f64] {
        &self.delta_conf
    }

    pub fn s1(&self) -> &[f64] {
        &self.s1
    }

    pub fn s1_conf(&self) -> &[f64] {
        &self.s1_conf
    }

    /// Look up a column by its result key
    pub fn get(&self, key: &str) -> Option<&[f64]> {
        match key {
            "delta" => Some(self.delta.as_slice()),
            "delta_conf" => Some(self.delta_conf.as_slice()),
            "S1" => Some(self.s1.as_slice()),
            "S1_conf" => Some(self.s1_conf.as_slice()),
            _ => None,
        }
    }

    /// Row for the `i`-th parameter
    ///
    /// `None` when `i` is past the end of the names or of any index column.
    pub fn parameter(&self, i: usize) -> Option<ParameterIndices<'_>> {
        Some(ParameterIndices {
            name: self.names.get(i)?.as_str(),
            delta: *self.delta.get(i)?,
            delta_conf: *self.delta_conf.get(i)?,
            s1: *self.s1.get(i)?,
            s1_conf: *self.s1_conf.get(i)?,
        })
    }

    /// Row for the parameter called `name`
    pub fn by_name(&self, name: &str) -> Option<ParameterIndices<'_>> {
        let i = self.names.iter().position(|n| n == name)?;
        self.parameter(i)
    }

    /// Rows in parameter order
    pub fn iter(&self) -> impl Iterator<Item = ParameterIndices<'_>> {
        (0..self.len()).filter_map(move |i| self.parameter(i))
    }
}

impl fmt::Display for ParameterIndices<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:.6} {:.6} {:.6} {:.6}",
            self.name, self.delta, self.delta_conf, self.s1, self.s1_conf
        )
    }
}

impl fmt::Display for SensitivityIndices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parameter {}", Self::KEYS.join(" "))?;
        for row in self.iter() {
            write!(f, "\n{row}")?;
        }
        Ok(())
    }
}
