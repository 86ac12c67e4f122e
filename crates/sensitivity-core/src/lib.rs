//! Core types and plumbing for distribution-based sensitivity analysis
//!
//! This crate provides the pieces shared by the estimator crates:
//!
//! - [`Error`] / [`Result`]: the unified error type
//! - [`utils`]: means, variances, ordinal ranks and evaluation grids
//! - [`resample`]: reproducible bootstrap index streams and paired resampling
//! - [`execution`]: sequential or rayon-backed execution of independent work
//!
//! # Example
//!
//! ```rust
//! use sensitivity_core::{resample::BootstrapIndices, utils, ExecutionStrategy};
//!
//! let y = vec![1.0, 4.0, 2.0, 8.0, 5.0];
//! let indices = BootstrapIndices::with_seed(42, y.len());
//!
//! // Means of ten bootstrap resamples
//! let means = ExecutionStrategy::Sequential.execute_batch(10, |i| {
//!     let resampled = sensitivity_core::resample::resample_slice(&y, &indices.generate(i));
//!     utils::mean(&resampled)
//! });
//! assert_eq!(means.len(), 10);
//! ```

pub mod error;
pub mod execution;
pub mod resample;
pub mod utils;

// Re-export core types
pub use error::{Error, Result};
pub use execution::ExecutionStrategy;
pub use resample::BootstrapIndices;
