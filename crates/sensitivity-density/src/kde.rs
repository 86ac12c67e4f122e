//! Gaussian kernel density estimation

use crate::{bandwidth::Bandwidth, traits::DensityEstimator};
use sensitivity_core::{Error, Result};
use std::f64::consts::PI;

/// Evaluate a Gaussian KDE of `sample` with bandwidth `h` at every point
///
/// Stateless primitive: no bandwidth selection, no validation beyond
/// `h > 0` and a non-empty sample.
pub fn gaussian_kde(sample: &[f64], bandwidth: f64, points: &[f64]) -> Result<Vec<f64>> {
    if sample.is_empty() {
        return Err(Error::InsufficientData {
            expected: 1,
            actual: 0,
        });
    }
    if !(bandwidth.is_finite() && bandwidth > 0.0) {
        return Err(Error::InvalidParameter(format!(
            "Bandwidth {bandwidth} must be positive and finite"
        )));
    }
    let norm = 1.0 / (sample.len() as f64 * bandwidth * (2.0 * PI).sqrt());
    Ok(points
        .iter()
        .map(|&x| norm * kernel_sum(sample, bandwidth, x))
        .collect())
}

#[inline]
fn kernel_sum(sample: &[f64], h: f64, x: f64) -> f64 {
    sample
        .iter()
        .map(|&xi| {
            let u = (x - xi) / h;
            (-0.5 * u * u).exp()
        })
        .sum()
}

/// A fitted Gaussian kernel density estimate
#[derive(Debug, Clone)]
pub struct GaussianKde {
    sample: Vec<f64>,
    bandwidth: f64,
}

impl GaussianKde {
    /// Fit with an automatically or explicitly chosen bandwidth
    pub fn new(sample: &[f64], bandwidth: Bandwidth) -> Result<Self> {
        let h = bandwidth.resolve(sample)?;
        Self::with_bandwidth(sample, h)
    }

    /// Fit with a concrete bandwidth value
    pub fn with_bandwidth(sample: &[f64], bandwidth: f64) -> Result<Self> {
        if sample.is_empty() {
            return Err(Error::DegenerateSample { len: 0 });
        }
        if !(bandwidth.is_finite() && bandwidth > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "Bandwidth {bandwidth} must be positive and finite"
            )));
        }
        Ok(Self {
            sample: sample.to_vec(),
            bandwidth,
        })
    }

    /// Bandwidth in data units
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Number of observations behind the estimate
    pub fn len(&self) -> usize {
        self.sample.len()
    }

    /// Always false, an estimate is never fitted to an empty sample
    pub fn is_empty(&self) -> bool {
        self.sample.is_empty()
    }

    /// Estimated density at `x`
    pub fn density(&self, x: f64) -> f64 {
        let norm = 1.0 / (self.sample.len() as f64 * self.bandwidth * (2.0 * PI).sqrt());
        norm * kernel_sum(&self.sample, self.bandwidth, x)
    }

    /// Estimated density at every point
    pub fn evaluate(&self, points: &[f64]) -> Vec<f64> {
        points.iter().map(|&x| self.density(x)).collect()
    }
}

/// Gaussian kernel with a bandwidth rule, usable as a [`DensityEstimator`]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GaussianKernel {
    bandwidth: Bandwidth,
}

impl GaussianKernel {
    pub fn new(bandwidth: Bandwidth) -> Self {
        Self { bandwidth }
    }

    /// Silverman bandwidth, the default for delta estimation
    pub fn silverman() -> Self {
        Self::new(Bandwidth::Silverman)
    }

    pub fn bandwidth(&self) -> Bandwidth {
        self.bandwidth
    }
}

impl DensityEstimator for GaussianKernel {
    fn evaluate(&self, sample: &[f64], points: &[f64]) -> Result<Vec<f64>> {
        let h = self.bandwidth.resolve(sample)?;
        gaussian_kde(sample, h, points)
    }

    fn name(&self) -> &'static str {
        "gaussian"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrate::trapezoid;
    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rand_distr::{Distribution, Normal};
    use sensitivity_core::utils::linspace;

    #[test]
    fn test_single_point_is_a_normal_pdf() {
        let h = 0.5;
        let density = gaussian_kde(&[1.0], h, &[1.0, 2.0]).unwrap();
        let peak = 1.0 / (h * (2.0 * PI).sqrt());
        assert_relative_eq!(density[0], peak, epsilon = 1e-12);
        assert_relative_eq!(density[1], peak * (-2.0f64).exp(), epsilon = 1e-12);
    }

    #[test]
    fn test_symmetric_sample_gives_symmetric_density() {
        let kde = GaussianKde::new(&[-1.0, 0.0, 1.0], Bandwidth::Silverman).unwrap();
        assert_relative_eq!(kde.density(-0.7), kde.density(0.7), epsilon = 1e-12);
        assert!(kde.density(0.0) > kde.density(3.0));
    }

    #[test]
    fn test_integrates_to_one() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let normal = Normal::new(2.0, 0.5).unwrap();
        let sample: Vec<f64> = (0..300).map(|_| normal.sample(&mut rng)).collect();

        let kde = GaussianKde::new(&sample, Bandwidth::Silverman).unwrap();
        let grid = linspace(-2.0, 6.0, 2001);
        let area = trapezoid(&kde.evaluate(&grid), &grid).unwrap();
        assert_relative_eq!(area, 1.0, epsilon = 1e-3);
    }

    #[test]
    fn test_recovers_standard_normal() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let sample: Vec<f64> = (0..5000)
            .map(|_| Normal::new(0.0, 1.0).unwrap().sample(&mut rng))
            .collect();

        let kde = GaussianKde::new(&sample, Bandwidth::Silverman).unwrap();
        let expected = 1.0 / (2.0 * PI).sqrt();
        assert!((kde.density(0.0) - expected).abs() < 0.05);
    }

    #[test]
    fn test_estimator_matches_fitted_kde() {
        let sample = [0.2, 0.9, 1.4, 2.2, 2.3, 3.7];
        let points = [0.0, 1.0, 2.0, 3.0];
        let via_trait = GaussianKernel::silverman().evaluate(&sample, &points).unwrap();
        let fitted = GaussianKde::new(&sample, Bandwidth::Silverman)
            .unwrap()
            .evaluate(&points);
        for (a, b) in via_trait.iter().zip(&fitted) {
            assert_relative_eq!(*a, *b, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_degenerate_sample_is_rejected() {
        let err = GaussianKernel::silverman()
            .evaluate(&[4.0, 4.0, 4.0], &[4.0])
            .unwrap_err();
        assert!(matches!(err, Error::DegenerateSample { len: 3 }));
        assert!(GaussianKde::with_bandwidth(&[], 1.0).is_err());
        assert!(gaussian_kde(&[1.0], -1.0, &[0.0]).is_err());
    }

    proptest! {
        #[test]
        fn prop_density_is_non_negative(
            sample in proptest::collection::vec(-100.0f64..100.0, 2..40),
            x in -200.0f64..200.0,
        ) {
            prop_assume!(sensitivity_core::utils::has_spread(&sample));
            let density = GaussianKernel::silverman().evaluate(&sample, &[x]).unwrap();
            prop_assert!(density[0] >= 0.0);
            prop_assert!(density[0].is_finite());
        }
    }
}
