//! Equal-frequency partitioning in rank space
//!
//! A [`Partition`] depends only on the sample size: `M + 1` equally spaced
//! boundaries from `0` to `N`. Applying it to a parameter column ranks the
//! column ordinally and places rank `r` in bin `j` iff
//! `bounds[j] < r <= bounds[j + 1]`.

use sensitivity_core::{utils, Error, Result};

/// Upper limit on the number of bins
pub const MAX_BINS: usize = 48;

/// Number of points in the output evaluation grid
///
/// The delta estimator integrates `|f_Y - f_Y|bin|` with the trapezoidal
/// rule on this grid. Its error scales with the square of the grid
/// spacing `(max(Y) - min(Y)) / (GRID_POINTS - 1)` times the curvature of the
/// densities, so very narrow KDE bandwidths relative to the output range
/// are resolved poorly.
pub const GRID_POINTS: usize = 100;

/// Bin count for `n` samples: `min(ceil(n^(2 / (7 + tanh((1500 - n) / 500)))), 48)`
///
/// Grows sub-linearly and saturates at [`MAX_BINS`]. Returns 0 for `n == 0`.
pub fn bin_count(n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    let n_f = n as f64;
    let exponent = 2.0 / (7.0 + ((1500.0 - n_f) / 500.0).tanh());
    let bins = n_f.powf(exponent).ceil() as usize;
    bins.clamp(1, MAX_BINS)
}

/// `points` equally spaced values spanning `[min(y), max(y)]`
pub fn evaluation_grid(y: &[f64], points: usize) -> Result<Vec<f64>> {
    let (lo, hi) = utils::min_max(y).ok_or(Error::InsufficientData {
        expected: 1,
        actual: 0,
    })?;
    Ok(utils::linspace(lo, hi, points))
}

/// Rank-space bin boundaries for a fixed sample size
#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    n_samples: usize,
    bounds: Vec<f64>,
}

impl Partition {
    /// Equal-frequency partition with [`bin_count`] bins
    pub fn new(n_samples: usize) -> Result<Self> {
        Self::with_bins(n_samples, bin_count(n_samples))
    }

    /// Equal-frequency partition with an explicit number of bins
    pub fn with_bins(n_samples: usize, bins: usize) -> Result<Self> {
        if n_samples == 0 {
            return Err(Error::InsufficientData {
                expected: 1,
                actual: 0,
            });
        }
        if bins == 0 || bins > n_samples {
            return Err(Error::InvalidParameter(format!(
                "Bin count {bins} must be in [1, {n_samples}]"
            )));
        }
        Ok(Self {
            n_samples,
            bounds: utils::linspace(0.0, n_samples as f64, bins + 1),
        })
    }

    /// Number of samples the partition was built for
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    /// Number of bins `M`
    pub fn bin_count(&self) -> usize {
        self.bounds.len() - 1
    }

    /// The `M + 1` boundaries, from `0` to `N`
    pub fn bounds(&self) -> &[f64] {
        &self.bounds
    }

    /// Bin holding `rank`, or `None` outside `(0, N]`
    pub fn bin_of(&self, rank: usize) -> Option<usize> {
        let r = rank as f64;
        // first boundary >= r closes the bin on the right
        let upper = self.bounds.partition_point(|&b| b < r);
        if upper == 0 || upper >= self.bounds.len() {
            return None;
        }
        Some(upper - 1)
    }

    /// Group the sample indices of one parameter column by bin
    pub fn assign(&self, column: &[f64]) -> Result<RankBins> {
        if column.len() != self.n_samples {
            return Err(Error::size_mismatch(
                self.n_samples,
                column.len(),
                "partitioned parameter column",
            ));
        }

        let mut bins = vec![Vec::new(); self.bin_count()];
        for (index, rank) in utils::ordinal_ranks(column).into_iter().enumerate() {
            if let Some(bin) = self.bin_of(rank) {
                bins[bin].push(index);
            }
        }
        Ok(RankBins {
            n_samples: self.n_samples,
            bins,
        })
    }
}

/// Sample indices of one parameter column, grouped by partition bin
#[derive(Debug, Clone, PartialEq)]
pub struct RankBins {
    n_samples: usize,
    bins: Vec<Vec<usize>>,
}

impl RankBins {
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Indices in bin `j`
    pub fn bin(&self, j: usize) -> &[usize] {
        &self.bins[j]
    }

    /// Iterate over the bins in order
    pub fn iter(&self) -> impl Iterator<Item = &[usize]> {
        self.bins.iter().map(Vec::as_slice)
    }

    /// Values of `data` selected by bin `j`
    pub fn select(&self, data: &[f64], j: usize) -> Vec<f64> {
        self.bins[j].iter().map(|&i| data[i]).collect()
    }
}
