//! Plischke delta point estimator
//!
//! `d_hat = Σ_j (n_j / 2N) · ∫ |f_Y(y) - f_Y|j(y)| dy`, where `f_Y` is the
//! density of the full output sample and `f_Y|j` the density of the outputs
//! whose parameter rank falls in bin `j`. Both densities are evaluated on
//! the shared output grid and integrated with the trapezoidal rule.

use crate::partition::Partition;
use sensitivity_core::{Error, Result};
use sensitivity_density::{trapezoid, DensityEstimator, GaussianKernel};
use tracing::trace;

/// Delta point estimate using the Silverman Gaussian kernel
///
/// # Errors
///
/// - [`Error::DegenerateOutput`] if the full output sample has no spread
/// - [`Error::DegenerateBin`] if the outputs of some bin have fewer than
///   two distinct values
/// - [`Error::ShapeMismatch`] if `y`, `x_col` and `partition` disagree on
///   the sample size
pub fn calc_delta(y: &[f64], grid: &[f64], x_col: &[f64], partition: &Partition) -> Result<f64> {
    calc_delta_with(&GaussianKernel::silverman(), y, grid, x_col, partition)
}

/// Delta point estimate with an arbitrary density estimator
pub fn calc_delta_with<E: DensityEstimator + ?Sized>(
    estimator: &E,
    y: &[f64],
    grid: &[f64],
    x_col: &[f64],
    partition: &Partition,
) -> Result<f64> {
    if y.len() != x_col.len() {
        return Err(Error::size_mismatch(y.len(), x_col.len(), "delta parameter column"));
    }

    let full = estimator.evaluate(y, grid).map_err(|e| match e {
        Error::DegenerateSample { .. } => Error::DegenerateOutput,
        other => other,
    })?;

    let bins = partition.assign(x_col)?;
    let n = y.len() as f64;
    let mut d_hat = 0.0;
    let mut gap = vec![0.0; grid.len()];

    for (j, members) in bins.iter().enumerate() {
        if members.is_empty() {
            continue;
        }
        let y_bin = bins.select(y, j);
        let conditional = estimator.evaluate(&y_bin, grid).map_err(|e| e.in_bin(j))?;

        for ((g, f), fc) in gap.iter_mut().zip(&full).zip(&conditional) {
            *g = (f - fc).abs();
        }
        let distance = trapezoid(&gap, grid)?;
        trace!(bin = j, members = members.len(), distance, "conditional density gap");

        d_hat += members.len() as f64 / (2.0 * n) * distance;
    }

    Ok(d_hat)
}
