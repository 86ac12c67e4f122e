//! Bootstrap index generation and paired resampling
//!
//! Every resample draws its own index set from a generator seeded with
//! `base_seed + iteration`. Resamples can therefore be computed in any
//! order, on any thread, and still reproduce the same draws.

use rand::{distributions::Uniform, Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic source of bootstrap index sets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootstrapIndices {
    base_seed: u64,
    n_samples: usize,
}

impl BootstrapIndices {
    /// Use a fixed base seed
    pub fn with_seed(base_seed: u64, n_samples: usize) -> Self {
        Self {
            base_seed,
            n_samples,
        }
    }

    /// Draw the base seed from a caller-supplied generator
    pub fn from_rng<R: Rng + ?Sized>(rng: &mut R, n_samples: usize) -> Self {
        Self::with_seed(rng.gen(), n_samples)
    }

    /// Base seed of the index stream
    pub fn base_seed(&self) -> u64 {
        self.base_seed
    }

    /// Length of every generated index set
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    /// Indices in `[0, n_samples)`, drawn with replacement, for one resample
    pub fn generate(&self, iteration: usize) -> Vec<usize> {
        if self.n_samples == 0 {
            return Vec::new();
        }
        let mut rng = ChaCha8Rng::seed_from_u64(self.base_seed.wrapping_add(iteration as u64));
        let dist = Uniform::new(0, self.n_samples);
        (0..self.n_samples).map(|_| rng.sample(dist)).collect()
    }
}

/// Copy `source[idx]` for every index, in order
pub fn resample_slice(source: &[f64], indices: &[usize]) -> Vec<f64> {
    indices
        .iter()
        .map(|&idx| {
            debug_assert!(idx < source.len(), "Index {idx} out of bounds");
            source[idx]
        })
        .collect()
}

/// Apply one row selection jointly to two aligned columns
///
/// Keeps every `(first[i], second[i])` pair together.
pub fn resample_pairs(first: &[f64], second: &[f64], indices: &[usize]) -> (Vec<f64>, Vec<f64>) {
    debug_assert_eq!(first.len(), second.len());
    (resample_slice(first, indices), resample_slice(second, indices))
}
