//! Distribution-based sensitivity analysis
//!
//! This crate re-exports the workspace members:
//!
//! - [`sensitivity_core`]: error type, descriptive statistics, bootstrap plumbing
//! - [`sensitivity_density`]: Gaussian kernel density estimation and integration
//! - [`sensitivity_delta`]: the delta moment-independent and first-order Sobol analysis
//! - [`sensitivity_io`]: parameter and data file readers
//!
//! The most common entry points are available at the crate root.
//!
//! # Example
//!
//! ```rust
//! use sensitivity_stats::{analyze, AnalysisConfig, DMatrix, ProblemDescriptor};
//!
//! let n = 300;
//! let x = DMatrix::from_fn(n, 2, |i, j| ((i * (13 + 4 * j)) % n) as f64 / n as f64);
//! let y: Vec<f64> = (0..n).map(|i| x[(i, 0)].exp() + 0.2 * x[(i, 1)]).collect();
//!
//! let problem = ProblemDescriptor::new(["a", "b"]);
//! let indices = analyze(&problem, &x, &y, &AnalysisConfig::default().with_seed(0)).unwrap();
//! println!("{indices}");
//! ```

pub use sensitivity_core;
pub use sensitivity_delta;
pub use sensitivity_density;
pub use sensitivity_io;

pub use sensitivity_core::{Error, ExecutionStrategy, Result};
pub use sensitivity_delta::{
    analyze, analyze_with_rng, AnalysisConfig, ProblemDescriptor, SensitivityIndices,
};
pub use sensitivity_delta::nalgebra::DMatrix;
