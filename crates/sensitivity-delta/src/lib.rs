//! Delta moment-independent sensitivity analysis
//!
//! Estimates, for every input parameter of a model, how far the output
//! distribution moves when the parameter is known:
//!
//! - **delta** (Plischke et al. 2013): half the expected L1 distance between
//!   the unconditional output density and the density conditional on the
//!   parameter's rank bin, bias-reduced by bootstrap
//! - **S1**: the first-order Sobol index from the same equal-frequency bins
//!
//! Both come with bootstrap confidence half-widths.
//!
//! # Example
//!
//! ```rust
//! use nalgebra::DMatrix;
//! use rand::{Rng, SeedableRng};
//! use rand_chacha::ChaCha8Rng;
//! use sensitivity_delta::{analyze, AnalysisConfig, ProblemDescriptor};
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let n = 500;
//! let x = DMatrix::from_fn(n, 2, |_, _| rng.gen::<f64>());
//! let y: Vec<f64> = x.row_iter().map(|row| 4.0 * row[0] + 0.1 * row[1]).collect();
//!
//! let problem = ProblemDescriptor::new(["strong", "weak"]);
//! let indices = analyze(&problem, &x, &y, &AnalysisConfig::default().with_seed(7)).unwrap();
//!
//! assert!(indices.s1()[0] > indices.s1()[1]);
//! assert!(indices.delta()[0] > indices.delta()[1]);
//! ```

mod analyze;
pub mod bootstrap;
mod config;
pub mod delta;
pub mod partition;
pub mod sobol;
mod types;

pub use analyze::{analyze, analyze_with_rng};
pub use bootstrap::{
    bias_reduced_delta, critical_value, sobol_first_conf, BiasReducedDelta, DeltaBootstrap,
};
pub use config::{AnalysisConfig, DEFAULT_CONFIDENCE_LEVEL, DEFAULT_RESAMPLES};
pub use delta::{calc_delta, calc_delta_with};
pub use partition::{bin_count, evaluation_grid, Partition, RankBins, GRID_POINTS, MAX_BINS};
pub use sobol::sobol_first;
pub use types::{ParameterIndices, ProblemDescriptor, SensitivityIndices};

pub use nalgebra;
pub use sensitivity_core::{BootstrapIndices, Error, ExecutionStrategy, Result};
