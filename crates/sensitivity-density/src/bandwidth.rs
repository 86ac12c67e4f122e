//! Bandwidth selection rules for one-dimensional Gaussian kernels

use sensitivity_core::{utils, Error, Result};

/// How the kernel bandwidth is chosen for a sample
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Bandwidth {
    /// Silverman's rule: `sd * (3n/4)^(-1/5)`
    #[default]
    Silverman,
    /// Scott's rule: `sd * n^(-1/5)`
    Scott,
    /// Explicit bandwidth, independent of the sample
    Fixed(f64),
}

impl Bandwidth {
    /// Resolve the bandwidth for a concrete sample
    ///
    /// Rule-based bandwidths scale the sample standard deviation, so a
    /// sample with fewer than two distinct values is rejected as
    /// [`Error::DegenerateSample`].
    pub fn resolve(&self, sample: &[f64]) -> Result<f64> {
        if let Bandwidth::Fixed(h) = *self {
            if !(h.is_finite() && h > 0.0) {
                return Err(Error::InvalidParameter(format!(
                    "Bandwidth {h} must be positive and finite"
                )));
            }
            return Ok(h);
        }

        if sample.len() < 2 || !utils::has_spread(sample) {
            return Err(Error::DegenerateSample { len: sample.len() });
        }

        let sd = utils::std_dev(sample);
        let h = sd * self.factor(sample.len());
        if !(h.is_finite() && h > 0.0) {
            return Err(Error::DegenerateSample { len: sample.len() });
        }
        Ok(h)
    }

    /// Multiplier applied to the sample standard deviation
    fn factor(&self, n: usize) -> f64 {
        let n = n as f64;
        match self {
            Bandwidth::Silverman => (n * 0.75).powf(-0.2),
            Bandwidth::Scott => n.powf(-0.2),
            Bandwidth::Fixed(_) => 1.0,
        }
    }

    /// Name used in logs and reports
    pub fn name(&self) -> &'static str {
        match self {
            Bandwidth::Silverman => "silverman",
            Bandwidth::Scott => "scott",
            Bandwidth::Fixed(_) => "fixed",
        }
    }
}
