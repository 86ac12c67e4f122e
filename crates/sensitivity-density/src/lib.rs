//! Kernel density estimation for sensitivity analysis
//!
//! This crate provides the non-parametric density primitives used by the
//! delta estimator:
//!
//! - **Gaussian KDE** with Silverman, Scott or fixed bandwidths
//! - **[`DensityEstimator`]**: the seam through which estimators consume densities
//! - **Trapezoidal integration** of densities sampled on a grid
//!
//! # Examples
//!
//! ```rust
//! use sensitivity_density::{Bandwidth, GaussianKde, trapezoid};
//! use sensitivity_core::utils::linspace;
//!
//! let sample = vec![1.2, 1.9, 2.4, 2.5, 3.1, 3.3, 4.0];
//! let kde = GaussianKde::new(&sample, Bandwidth::Silverman).unwrap();
//!
//! let grid = linspace(-2.0, 7.0, 500);
//! let density = kde.evaluate(&grid);
//! let area = trapezoid(&density, &grid).unwrap();
//! assert!((area - 1.0).abs() < 1e-2);
//! ```

mod bandwidth;
mod integrate;
mod kde;
mod traits;

pub use bandwidth::Bandwidth;
pub use integrate::trapezoid;
pub use kde::{gaussian_kde, GaussianKde, GaussianKernel};
pub use traits::DensityEstimator;
