//! Analysis configuration

use crate::bootstrap::critical_value;
use sensitivity_core::{Error, ExecutionStrategy, Result};
use serde::{Deserialize, Serialize};

/// Default number of bootstrap resamples
pub const DEFAULT_RESAMPLES: usize = 10;

/// Default two-sided confidence level
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.95;

/// Options for a delta analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Accepted for compatibility with other Sobol-family analyses
    ///
    /// The delta method has no second-order indices; this flag has no effect.
    pub calc_second_order: bool,

    /// Bootstrap resamples per parameter, at least 2
    pub num_resamples: usize,

    /// Two-sided confidence level in `[0, 1]`
    pub conf_level: f64,

    /// Print a table of the indices to stdout when the analysis finishes
    pub print_to_console: bool,

    /// Seed for the bootstrap streams; `None` draws one from the OS
    pub seed: Option<u64>,

    /// Whether parameters run sequentially or on the rayon pool
    pub strategy: ExecutionStrategy,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            calc_second_order: true,
            num_resamples: DEFAULT_RESAMPLES,
            conf_level: DEFAULT_CONFIDENCE_LEVEL,
            print_to_console: false,
            seed: None,
            strategy: ExecutionStrategy::Sequential,
        }
    }
}

impl AnalysisConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of bootstrap resamples
    pub fn with_resamples(mut self, num_resamples: usize) -> Self {
        self.num_resamples = num_resamples;
        self
    }

    /// Set the confidence level
    pub fn with_confidence_level(mut self, conf_level: f64) -> Self {
        self.conf_level = conf_level;
        self
    }

    /// Fix the bootstrap seed for reproducible runs
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn print_to_console(mut self, enabled: bool) -> Self {
        self.print_to_console = enabled;
        self
    }

    pub fn calc_second_order(mut self, enabled: bool) -> Self {
        self.calc_second_order = enabled;
        self
    }

    /// Check the options before any data is touched
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.conf_level) {
            return Err(Error::InvalidConfidenceLevel(self.conf_level));
        }
        if self.num_resamples < 2 {
            return Err(Error::InvalidParameter(format!(
                "num_resamples must be at least 2, got {}",
                self.num_resamples
            )));
        }
        Ok(())
    }

    /// Critical value `z(c)` for the configured level
    pub fn critical_value(&self) -> Result<f64> {
        critical_value(self.conf_level)
    }
}
