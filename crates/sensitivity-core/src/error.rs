//! Error types for sensitivity analysis
//!
//! Provides a unified error type for all sensitivity-stats crates.

use thiserror::Error;

/// Core error type for sensitivity analysis operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Confidence level outside the closed unit interval
    #[error("Invalid confidence level: {0} must be in [0, 1]")]
    InvalidConfidenceLevel(f64),

    /// Dimensions of the inputs disagree
    #[error("Shape mismatch in {context}: expected {expected}, got {actual}")]
    ShapeMismatch {
        context: String,
        expected: usize,
        actual: usize,
    },

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Input contains NaN or infinite values
    #[error("Non-finite input: {0} contains NaN or infinite values")]
    NonFinite(String),

    /// The output sample has zero variance
    #[error("Degenerate output distribution: output variance is zero")]
    DegenerateOutput,

    /// A density sample with fewer than two distinct values
    #[error("Degenerate sample: {len} values with fewer than 2 distinct")]
    DegenerateSample { len: usize },

    /// A partition bin whose outputs cannot support a density estimate
    #[error("Degenerate bin {bin}: fewer than 2 distinct output values")]
    DegenerateBin { bin: usize },

    /// A degenerate bin attributed to a named parameter
    #[error("Degenerate partition for parameter '{parameter}': bin {bin} has fewer than 2 distinct output values")]
    DegeneratePartition { parameter: String, bin: usize },

    /// Threading or parallelization error
    #[error("Execution error: {0}")]
    Execution(String),

    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::ShapeMismatch {
            context: context.to_string(),
            expected,
            actual,
        }
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::NonFinite(context.to_string())
    }

    /// Attach a bin index to a degenerate density sample
    pub fn in_bin(self, bin: usize) -> Self {
        match self {
            Self::DegenerateSample { .. } => Self::DegenerateBin { bin },
            other => other,
        }
    }

    /// Attach a parameter name to a degenerate bin
    pub fn for_parameter(self, parameter: &str) -> Self {
        match self {
            Self::DegenerateBin { bin } => Self::DegeneratePartition {
                parameter: parameter.to_string(),
                bin,
            },
            other => other,
        }
    }

    /// Whether the error stems from ill-posed data rather than bad arguments
    pub fn is_degenerate(&self) -> bool {
        matches!(
            self,
            Self::DegenerateOutput
                | Self::DegenerateSample { .. }
                | Self::DegenerateBin { .. }
                | Self::DegeneratePartition { .. }
        )
    }
}
