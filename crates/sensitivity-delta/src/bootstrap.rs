//! Bootstrap bias reduction and confidence half-widths
//!
//! Each resample draws `N` row indices with replacement and applies them
//! jointly to the output vector and the parameter column, so input/output
//! pairs stay intact. The partition and the output grid are held fixed
//! across resamples.
//!
//! Index sets come from a [`BootstrapIndices`] stream: resample `i` is a
//! pure function of the stream's base seed and `i`, which keeps results
//! identical whether resamples run sequentially or on the rayon pool.

use crate::delta::calc_delta_with;
use crate::partition::Partition;
use crate::sobol::sobol_first;
use rand::Rng;
use sensitivity_core::resample::{resample_pairs, BootstrapIndices};
use sensitivity_core::{utils, Error, ExecutionStrategy, Result};
use sensitivity_density::{DensityEstimator, GaussianKernel};
use statrs::distribution::{ContinuousCDF, Normal};
use tracing::{debug, instrument};

/// Two-sided standard normal critical value `Φ⁻¹(0.5 + c / 2)`
///
/// `c = 0` gives exactly `0`, `c = 1` gives `+∞`.
///
/// # Errors
///
/// [`Error::InvalidConfidenceLevel`] when `c` is outside `[0, 1]`.
pub fn critical_value(conf_level: f64) -> Result<f64> {
    if !(0.0..=1.0).contains(&conf_level) {
        return Err(Error::InvalidConfidenceLevel(conf_level));
    }
    if conf_level == 0.0 {
        return Ok(0.0);
    }
    if conf_level == 1.0 {
        return Ok(f64::INFINITY);
    }
    let normal = Normal::new(0.0, 1.0).map_err(|e| {
        Error::Execution(format!("Failed to create normal distribution: {e}"))
    })?;
    Ok(normal.inverse_cdf(0.5 + conf_level / 2.0))
}

/// Bias-corrected delta estimate with its confidence half-width
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BiasReducedDelta {
    /// `2·d_hat - mean(d_boot)`
    pub estimate: f64,
    /// `z(c) · sd(d_boot)`
    pub half_width: f64,
    /// Plain point estimate `d_hat` on the original sample
    pub point_estimate: f64,
}

/// Bootstrap settings shared by the delta and Sobol confidence estimators
#[derive(Debug, Clone)]
pub struct DeltaBootstrap<E = GaussianKernel> {
    estimator: E,
    n_resamples: usize,
    confidence_level: f64,
    strategy: ExecutionStrategy,
}

impl DeltaBootstrap<GaussianKernel> {
    /// Silverman Gaussian kernel, sequential execution
    pub fn new(n_resamples: usize, confidence_level: f64) -> Self {
        Self {
            estimator: GaussianKernel::silverman(),
            n_resamples,
            confidence_level,
            strategy: ExecutionStrategy::Sequential,
        }
    }
}

impl<E: DensityEstimator> DeltaBootstrap<E> {
    /// Swap the density estimator used for every delta evaluation
    pub fn with_estimator<F: DensityEstimator>(self, estimator: F) -> DeltaBootstrap<F> {
        DeltaBootstrap {
            estimator,
            n_resamples: self.n_resamples,
            confidence_level: self.confidence_level,
            strategy: self.strategy,
        }
    }

    /// Set the execution strategy for resamples
    pub fn with_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn n_resamples(&self) -> usize {
        self.n_resamples
    }

    pub fn confidence_level(&self) -> f64 {
        self.confidence_level
    }

    pub fn strategy(&self) -> ExecutionStrategy {
        self.strategy
    }

    /// Critical value for the configured level, after validating the settings
    fn z(&self) -> Result<f64> {
        if self.n_resamples < 2 {
            return Err(Error::InvalidParameter(format!(
                "num_resamples must be at least 2, got {}",
                self.n_resamples
            )));
        }
        critical_value(self.confidence_level)
    }

    /// Evaluate `statistic` on every resample, in resample order
    fn resample<F>(
        &self,
        y: &[f64],
        x_col: &[f64],
        indices: &BootstrapIndices,
        statistic: F,
    ) -> Result<Vec<f64>>
    where
        F: Fn(&[f64], &[f64]) -> Result<f64> + Sync + Send,
    {
        if indices.n_samples() != y.len() {
            return Err(Error::size_mismatch(
                y.len(),
                indices.n_samples(),
                "bootstrap index stream",
            ));
        }
        self.strategy.try_execute_batch(self.n_resamples, |i| {
            let (y_boot, x_boot) = resample_pairs(y, x_col, &indices.generate(i));
            statistic(&y_boot, &x_boot)
        })
    }

    /// Bias-reduced delta (Plischke et al. 2013, eq. 30)
    ///
    /// A resample whose bins cannot support a density estimate fails the
    /// whole computation with [`Error::DegenerateBin`].
    #[instrument(skip_all, fields(n = y.len(), n_resamples = self.n_resamples))]
    pub fn bias_reduced_delta(
        &self,
        y: &[f64],
        grid: &[f64],
        x_col: &[f64],
        partition: &Partition,
        indices: &BootstrapIndices,
    ) -> Result<BiasReducedDelta> {
        let z = self.z()?;
        let d_hat = calc_delta_with(&self.estimator, y, grid, x_col, partition)?;

        let corrected: Vec<f64> = self
            .resample(y, x_col, indices, |y_boot, x_boot| {
                calc_delta_with(&self.estimator, y_boot, grid, x_boot, partition)
            })?
            .into_iter()
            .map(|d| 2.0 * d_hat - d)
            .collect();

        let estimate = utils::mean(&corrected);
        let half_width = z * utils::std_dev(&corrected);
        debug!(
            estimator = self.estimator.name(),
            d_hat, estimate, half_width, "bias-reduced delta"
        );

        Ok(BiasReducedDelta {
            estimate,
            half_width,
            point_estimate: d_hat,
        })
    }

    /// Confidence half-width of the first-order Sobol index
    #[instrument(skip_all, fields(n = y.len(), n_resamples = self.n_resamples))]
    pub fn sobol_first_conf(
        &self,
        y: &[f64],
        x_col: &[f64],
        partition: &Partition,
        indices: &BootstrapIndices,
    ) -> Result<f64> {
        let z = self.z()?;
        let estimates = self.resample(y, x_col, indices, |y_boot, x_boot| {
            sobol_first(y_boot, x_boot, partition)
        })?;
        Ok(z * utils::std_dev(&estimates))
    }
}

/// Bias-reduced delta with the default kernel, drawing resamples from `rng`
///
/// Returns `(corrected_mean, half_width)`.
pub fn bias_reduced_delta<R: Rng + ?Sized>(
    y: &[f64],
    grid: &[f64],
    x_col: &[f64],
    partition: &Partition,
    num_resamples: usize,
    conf_level: f64,
    rng: &mut R,
) -> Result<(f64, f64)> {
    let indices = BootstrapIndices::from_rng(rng, y.len());
    let result = DeltaBootstrap::new(num_resamples, conf_level)
        .bias_reduced_delta(y, grid, x_col, partition, &indices)?;
    Ok((result.estimate, result.half_width))
}

/// Sobol confidence half-width, drawing resamples from `rng`
pub fn sobol_first_conf<R: Rng + ?Sized>(
    y: &[f64],
    x_col: &[f64],
    partition: &Partition,
    num_resamples: usize,
    conf_level: f64,
    rng: &mut R,
) -> Result<f64> {
    let indices = BootstrapIndices::from_rng(rng, y.len());
    DeltaBootstrap::new(num_resamples, conf_level).sobol_first_conf(y, x_col, partition, &indices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delta::calc_delta;
    use crate::partition::{evaluation_grid, GRID_POINTS};
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn linear_model(n: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let x: Vec<f64> = (0..n).map(|_| rng.gen()).collect();
        let y: Vec<f64> = x.iter().map(|&v| v + 0.5 * rng.gen::<f64>()).collect();
        (x, y)
    }

    #[test]
    fn test_critical_values() {
        assert_eq!(critical_value(0.0).unwrap(), 0.0);
        assert_relative_eq!(critical_value(0.95).unwrap(), 1.959964, epsilon = 1e-5);
        assert_relative_eq!(critical_value(0.68268949).unwrap(), 1.0, epsilon = 1e-5);
        assert!(critical_value(1.0).unwrap().is_infinite());
        assert!(matches!(
            critical_value(1.5),
            Err(Error::InvalidConfidenceLevel(c)) if c == 1.5
        ));
        assert!(critical_value(-0.1).is_err());
    }

    #[test]
    fn test_bias_reduced_delta_is_reproducible() {
        let (x, y) = linear_model(300, 1);
        let grid = evaluation_grid(&y, GRID_POINTS).unwrap();
        let partition = Partition::new(y.len()).unwrap();
        let indices = BootstrapIndices::with_seed(17, y.len());
        let bootstrap = DeltaBootstrap::new(8, 0.95);

        let first = bootstrap
            .bias_reduced_delta(&y, &grid, &x, &partition, &indices)
            .unwrap();
        let second = bootstrap
            .bias_reduced_delta(&y, &grid, &x, &partition, &indices)
            .unwrap();
        assert_eq!(first, second);
        assert!(first.half_width > 0.0);
        assert!(first.point_estimate > 0.0);
    }

    #[test]
    fn test_bias_correction_matches_resampled_deltas() {
        let (x, y) = linear_model(240, 8);
        let grid = evaluation_grid(&y, GRID_POINTS).unwrap();
        let partition = Partition::new(y.len()).unwrap();
        let indices = BootstrapIndices::with_seed(41, y.len());
        let result = DeltaBootstrap::new(6, 0.9)
            .bias_reduced_delta(&y, &grid, &x, &partition, &indices)
            .unwrap();

        assert_relative_eq!(
            result.point_estimate,
            calc_delta(&y, &grid, &x, &partition).unwrap(),
            epsilon = 1e-12
        );
        let boot: Vec<f64> = (0..6)
            .map(|i| {
                let (y_boot, x_boot) = resample_pairs(&y, &x, &indices.generate(i));
                calc_delta(&y_boot, &grid, &x_boot, &partition).unwrap()
            })
            .collect();
        assert_relative_eq!(
            result.estimate,
            2.0 * result.point_estimate - utils::mean(&boot),
            epsilon = 1e-12
        );
        // reflecting about d_hat leaves the spread unchanged
        assert_relative_eq!(
            result.half_width,
            critical_value(0.9).unwrap() * utils::std_dev(&boot),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_sobol_half_width_matches_resampled_indices() {
        let (x, y) = linear_model(120, 9);
        let partition = Partition::new(y.len()).unwrap();
        let indices = BootstrapIndices::with_seed(5, y.len());
        let half_width = DeltaBootstrap::new(7, 0.95)
            .sobol_first_conf(&y, &x, &partition, &indices)
            .unwrap();

        let boot: Vec<f64> = (0..7)
            .map(|i| {
                let (y_boot, x_boot) = resample_pairs(&y, &x, &indices.generate(i));
                sobol_first(&y_boot, &x_boot, &partition).unwrap()
            })
            .collect();
        assert_relative_eq!(
            half_width,
            critical_value(0.95).unwrap() * utils::std_dev(&boot),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_zero_confidence_gives_zero_width() {
        let (x, y) = linear_model(200, 2);
        let grid = evaluation_grid(&y, GRID_POINTS).unwrap();
        let partition = Partition::new(y.len()).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        let (_, delta_conf) =
            bias_reduced_delta(&y, &grid, &x, &partition, 5, 0.0, &mut rng).unwrap();
        let s1_conf = sobol_first_conf(&y, &x, &partition, 5, 0.0, &mut rng).unwrap();
        assert_eq!(delta_conf, 0.0);
        assert_eq!(s1_conf, 0.0);
    }

    #[test]
    fn test_wider_level_gives_wider_interval() {
        let (x, y) = linear_model(200, 4);
        let partition = Partition::new(y.len()).unwrap();
        let indices = BootstrapIndices::with_seed(99, y.len());

        let narrow = DeltaBootstrap::new(10, 0.5)
            .sobol_first_conf(&y, &x, &partition, &indices)
            .unwrap();
        let wide = DeltaBootstrap::new(10, 0.99)
            .sobol_first_conf(&y, &x, &partition, &indices)
            .unwrap();
        assert!(wide > narrow);
        assert_relative_eq!(
            wide / narrow,
            critical_value(0.99).unwrap() / critical_value(0.5).unwrap(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_rejects_single_resample() {
        let (x, y) = linear_model(50, 5);
        let partition = Partition::new(y.len()).unwrap();
        let indices = BootstrapIndices::with_seed(0, y.len());
        assert!(matches!(
            DeltaBootstrap::new(1, 0.95).sobol_first_conf(&y, &x, &partition, &indices),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_index_stream_must_match_sample() {
        let (x, y) = linear_model(50, 6);
        let partition = Partition::new(y.len()).unwrap();
        let indices = BootstrapIndices::with_seed(0, 49);
        assert!(matches!(
            DeltaBootstrap::new(4, 0.95).sobol_first_conf(&y, &x, &partition, &indices),
            Err(Error::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_strategies_agree() {
        let (x, y) = linear_model(150, 7);
        let grid = evaluation_grid(&y, GRID_POINTS).unwrap();
        let partition = Partition::new(y.len()).unwrap();
        let indices = BootstrapIndices::with_seed(123, y.len());

        let sequential = DeltaBootstrap::new(6, 0.9)
            .bias_reduced_delta(&y, &grid, &x, &partition, &indices)
            .unwrap();
        let parallel = DeltaBootstrap::new(6, 0.9)
            .with_strategy(ExecutionStrategy::Parallel)
            .bias_reduced_delta(&y, &grid, &x, &partition, &indices)
            .unwrap();
        assert_eq!(sequential, parallel);
    }
}
