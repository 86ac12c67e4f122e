//! Execution strategies for independent units of work
//!
//! Per-parameter analyses and individual bootstrap resamples never depend
//! on each other. An [`ExecutionStrategy`] decides whether such a batch runs
//! on the current thread or on the rayon pool.
//!
//! Parallel execution requires the `parallel` feature. Without it,
//! [`ExecutionStrategy::Parallel`] silently degrades to sequential execution.
//! Batches are always returned in index order, so results never depend on
//! the strategy.

use crate::Result;
use serde::{Deserialize, Serialize};

/// Execution strategy for batch operations
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionStrategy {
    /// Process items sequentially
    #[default]
    Sequential,
    /// Process items in parallel
    Parallel,
}

impl ExecutionStrategy {
    /// Whether batches will actually run on the thread pool
    pub fn is_parallel(&self) -> bool {
        cfg!(feature = "parallel") && *self == ExecutionStrategy::Parallel
    }

    /// Execute `f` for every index in `0..count`, collecting results in order
    pub fn execute_batch<F, R>(&self, count: usize, f: F) -> Vec<R>
    where
        F: Fn(usize) -> R + Sync + Send,
        R: Send,
    {
        #[cfg(feature = "parallel")]
        {
            if self.is_parallel() {
                use rayon::prelude::*;
                return (0..count).into_par_iter().map(f).collect();
            }
        }
        (0..count).map(f).collect()
    }

    /// Fallible variant of [`execute_batch`](Self::execute_batch)
    ///
    /// Returns the error of the lowest failing index.
    pub fn try_execute_batch<F, R>(&self, count: usize, f: F) -> Result<Vec<R>>
    where
        F: Fn(usize) -> Result<R> + Sync + Send,
        R: Send,
    {
        self.execute_batch(count, f).into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_default_is_sequential() {
        assert_eq!(ExecutionStrategy::default(), ExecutionStrategy::Sequential);
        assert!(!ExecutionStrategy::Sequential.is_parallel());
    }

    #[test]
    fn test_batch_preserves_order() {
        for strategy in [ExecutionStrategy::Sequential, ExecutionStrategy::Parallel] {
            let squares = strategy.execute_batch(100, |i| i * i);
            assert_eq!(squares, (0..100).map(|i| i * i).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_try_batch_reports_first_error() {
        let result = ExecutionStrategy::Parallel.try_execute_batch(10, |i| {
            if i >= 3 {
                Err(Error::DegenerateBin { bin: i })
            } else {
                Ok(i)
            }
        });
        match result {
            Err(Error::DegenerateBin { bin }) => assert_eq!(bin, 3),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_empty_batch() {
        let out: Vec<usize> = ExecutionStrategy::Parallel.execute_batch(0, |i| i);
        assert!(out.is_empty());
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_flag() {
        assert!(ExecutionStrategy::Parallel.is_parallel());
    }
}
