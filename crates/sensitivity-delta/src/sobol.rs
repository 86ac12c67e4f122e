//! First-order Sobol index from the rank partition
//!
//! `S1 = Σ_j (n_j / N) · (mean(Y_j) - mean(Y))² / Var(Y)`: the between-bin
//! share of the output variance, with the population variance in the
//! denominator.

use crate::partition::Partition;
use sensitivity_core::{utils, Error, Result};

/// First-order Sobol index of one parameter column
///
/// # Errors
///
/// [`Error::DegenerateOutput`] when `y` has zero variance.
pub fn sobol_first(y: &[f64], x_col: &[f64], partition: &Partition) -> Result<f64> {
    if y.len() != x_col.len() {
        return Err(Error::size_mismatch(y.len(), x_col.len(), "Sobol parameter column"));
    }
    let total = utils::population_variance(y);
    if !(total > 0.0) {
        return Err(Error::DegenerateOutput);
    }

    let bins = partition.assign(x_col)?;
    let n = y.len() as f64;
    let grand_mean = utils::mean(y);

    let between: f64 = (0..bins.len())
        .filter(|&j| !bins.bin(j).is_empty())
        .map(|j| {
            let bin_mean = utils::mean(&bins.select(y, j));
            bins.bin(j).len() as f64 / n * (bin_mean - grand_mean).powi(2)
        })
        .sum();

    Ok(between / total)
}
