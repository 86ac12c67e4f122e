//! Numerical integration over sampled functions

use sensitivity_core::{Error, Result};

/// Trapezoidal rule for `f` sampled at the abscissae `x`
///
/// The error is `O(h^2 · max|f''|)` for grid spacing `h`, so coarse grids
/// underestimate sharply peaked integrands. Fewer than two points
/// integrate to zero.
///
/// # Examples
///
/// ```rust
/// use sensitivity_density::trapezoid;
///
/// let x = [0.0, 1.0, 2.0];
/// let f = [0.0, 1.0, 2.0];
/// assert_eq!(trapezoid(&f, &x).unwrap(), 2.0);
/// ```
pub fn trapezoid(f: &[f64], x: &[f64]) -> Result<f64> {
    if f.len() != x.len() {
        return Err(Error::size_mismatch(x.len(), f.len(), "trapezoid integrand"));
    }
    Ok(x.windows(2)
        .zip(f.windows(2))
        .map(|(xs, fs)| (xs[1] - xs[0]) * (fs[0] + fs[1]) * 0.5)
        .sum())
}
