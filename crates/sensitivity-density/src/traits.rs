//! Core trait for density estimation

use sensitivity_core::Result;

/// Estimates a probability density from a one-dimensional sample
///
/// Implementations are stateless with respect to the sample, so one
/// estimator can be shared across bins, parameters and bootstrap threads.
pub trait DensityEstimator: Send + Sync {
    /// Density of `sample` evaluated at each of `points`
    ///
    /// Fails with [`sensitivity_core::Error::DegenerateSample`] when the
    /// sample cannot support an estimate.
    fn evaluate(&self, sample: &[f64], points: &[f64]) -> Result<Vec<f64>>;

    /// Estimator name for logs
    fn name(&self) -> &'static str;
}
