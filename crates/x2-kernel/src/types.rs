//! Core types for kernel operations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{KernelError, Result};
use crate::matrix::{Matrix, MatrixRef};

/// Trait for kernel functions over pairs of feature vectors.
pub trait Kernel: Send + Sync {
    /// Compute kernel value between two inputs.
    ///
    /// # Arguments
    /// * `x` - First input (feature representation)
    /// * `y` - Second input (feature representation)
    fn compute(&self, x: &[f64], y: &[f64]) -> Result<f64>;

    /// Compute the cross kernel matrix between the columns of `a` and `b`.
    ///
    /// # Returns
    /// Matrix K of shape `(b.cols(), a.cols())` where
    /// `K[(j, i)] = kernel(a.column(i), b.column(j))`
    fn compute_cross(&self, a: MatrixRef<'_>, b: MatrixRef<'_>) -> Result<Matrix> {
        if a.rows() != b.rows() {
            return Err(KernelError::feature_mismatch(
                a.rows(),
                b.rows(),
                "cross kernel matrix",
            ));
        }

        let mut matrix = Matrix::zeros(b.cols(), a.cols());
        for (i, a_i) in a.columns().enumerate() {
            let out = matrix.column_mut(i);
            for (j, b_j) in b.columns().enumerate() {
                out[j] = self.compute(a_i, b_j)?;
            }
        }

        Ok(matrix)
    }

    /// Get kernel name for identification.
    fn name(&self) -> &str;

    /// Check if kernel is positive semi-definite.
    fn is_psd(&self) -> bool {
        true
    }
}

/// Kernel variant requested by the caller.
///
/// Only the chi-squared formula is computed. `Intersection` is accepted so
/// callers written against the two-variant interface keep working, but it
/// does not change the result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KernelSelector {
    /// Chi-squared ("X2")
    #[default]
    ChiSquared,
    /// Histogram intersection ("inter")
    Intersection,
}

impl KernelSelector {
    /// Short tag used by kernel-building callers.
    pub fn as_str(&self) -> &'static str {
        match self {
            KernelSelector::ChiSquared => "X2",
            KernelSelector::Intersection => "inter",
        }
    }
}

impl fmt::Display for KernelSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KernelSelector {
    type Err = KernelError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x2" | "chi2" | "chi_squared" => Ok(KernelSelector::ChiSquared),
            "inter" | "intersection" => Ok(KernelSelector::Intersection),
            _ => Err(KernelError::InvalidParameter {
                parameter: "selector".to_string(),
                value: s.to_string(),
                reason: "expected 'X2' or 'inter'".to_string(),
            }),
        }
    }
}

/// Configuration for the pairwise chi-squared kernel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PairwiseKernelConfig {
    /// Requested kernel variant (informational)
    pub selector: KernelSelector,
    /// Allow splitting the computation across worker threads
    pub parallel: bool,
    /// Minimum `n * m * d` before the parallel path is taken
    pub parallel_threshold: usize,
}

impl PairwiseKernelConfig {
    /// Default parallel cut-over, in multiply-adds.
    pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1 << 16;

    /// Create default configuration
    pub fn new() -> Self {
        Self {
            selector: KernelSelector::ChiSquared,
            parallel: true,
            parallel_threshold: Self::DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Set the kernel selector
    pub fn with_selector(mut self, selector: KernelSelector) -> Self {
        self.selector = selector;
        self
    }

    /// Enable or disable the parallel path
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set the parallel cut-over
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Check parameter ranges.
    pub fn validate(&self) -> Result<()> {
        if self.parallel_threshold == 0 {
            return Err(KernelError::InvalidParameter {
                parameter: "parallel_threshold".to_string(),
                value: "0".to_string(),
                reason: "threshold must be positive".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for PairwiseKernelConfig {
    fn default() -> Self {
        Self::new()
    }
}
