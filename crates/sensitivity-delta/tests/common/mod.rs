//! Shared models and fixtures for integration tests

#![allow(dead_code)]

use nalgebra::DMatrix;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sensitivity_delta::ProblemDescriptor;

/// Uniform `[0, 1)` sample matrix with `n` rows and `d` columns
pub fn uniform_samples(n: usize, d: usize, seed: u64) -> DMatrix<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let values: Vec<f64> = (0..n * d).map(|_| rng.gen()).collect();
    DMatrix::from_row_slice(n, d, &values)
}

/// `Y = X1 + X2` with a third, inert input `X3`
pub fn additive_model(n: usize, seed: u64) -> (ProblemDescriptor, DMatrix<f64>, Vec<f64>) {
    let x = uniform_samples(n, 3, seed);
    let y = x.row_iter().map(|row| row[0] + row[1]).collect();
    (ProblemDescriptor::new(["x1", "x2", "x3"]), x, y)
}

/// Ishigami function on `[-π, π]³` with the usual `a = 7`, `b = 0.1`
pub fn ishigami(n: usize, seed: u64) -> (ProblemDescriptor, DMatrix<f64>, Vec<f64>) {
    use std::f64::consts::PI;
    let x = uniform_samples(n, 3, seed).map(|u| -PI + 2.0 * PI * u);
    let y = x
        .row_iter()
        .map(|row| row[0].sin() + 7.0 * row[1].sin().powi(2) + 0.1 * row[2].powi(4) * row[0].sin())
        .collect();
    let problem = ProblemDescriptor::new(["x1", "x2", "x3"]).with_bounds(vec![(-PI, PI); 3]);
    (problem, x, y)
}

/// Sample variance with `ddof = 1`
pub fn sample_variance(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0)
}
