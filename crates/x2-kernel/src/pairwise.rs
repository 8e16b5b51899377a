//! Pairwise chi-squared kernel matrices.
//!
//! Given training samples A (`d x n`) and test samples B (`d x m`), both
//! stored one sample per column, the kernel matrix K has shape `m x n` with
//!
//! ```text
//! K[(j, i)] = Σ_u (A[u,i] - B[u,j])² / (A[u,i] + B[u,j] + ε)
//! ```
//!
//! B's sample index is the row index and A's sample index is the column
//! index. Column `i` of K is therefore a contiguous run of `m` values, which
//! is the unit of work for both the sequential and the parallel path.
//!
//! Inputs are expected to be non-negative (histograms, counts). Negative
//! values are not rejected; the result then follows IEEE-754 arithmetic and
//! may be negative or unbounded. NaN and infinities propagate the same way.

use scirs2_core::ndarray::{Array2, ArrayView2};
use tracing::{debug, warn};

use crate::error::{KernelError, Result};
use crate::matrix::{Matrix, MatrixRef};
use crate::tensor_kernels::ChiSquaredKernel;
use crate::types::{Kernel, KernelSelector, PairwiseKernelConfig};

/// Compute the `m x n` chi-squared kernel matrix between the columns of `a`
/// (`d x n`) and `b` (`d x m`) on the calling thread.
///
/// # Errors
/// [`KernelError::DimensionMismatch`] when `a` and `b` have different row
/// counts. Nothing is allocated in that case.
///
/// # Examples
/// ```
/// use x2_kernel::{pairwise_chi_squared, MatrixRef};
///
/// let a = [1.0, 2.0]; // d = 1, n = 2
/// let b = [1.0, 3.0]; // d = 1, m = 2
/// let k = pairwise_chi_squared(
///     MatrixRef::new(&a, 1, 2).unwrap(),
///     MatrixRef::new(&b, 1, 2).unwrap(),
/// )
/// .unwrap();
///
/// assert_eq!(k.shape(), (2, 2));
/// assert_eq!(k[(0, 0)], 0.0);
/// assert!((k[(1, 1)] - 0.2).abs() < 1e-15);
/// ```
pub fn pairwise_chi_squared(a: MatrixRef<'_>, b: MatrixRef<'_>) -> Result<Matrix> {
    check_feature_dims(a.rows(), b.rows())?;
    let mut matrix = Matrix::zeros(b.cols(), a.cols());
    fill_sequential(a, b, matrix.as_mut_slice());
    Ok(matrix)
}

fn check_feature_dims(a_rows: usize, b_rows: usize) -> Result<()> {
    if a_rows != b_rows {
        return Err(KernelError::feature_mismatch(
            a_rows,
            b_rows,
            "pairwise chi-squared kernel",
        ));
    }
    Ok(())
}

/// Write column `i` of K: the distances from one A sample to every B sample.
#[inline]
fn fill_column(a_i: &[f64], b: MatrixRef<'_>, out: &mut [f64]) {
    for (k, b_j) in out.iter_mut().zip(b.columns()) {
        *k = ChiSquaredKernel::distance(a_i, b_j);
    }
}

fn fill_sequential(a: MatrixRef<'_>, b: MatrixRef<'_>, out: &mut [f64]) {
    let m = b.cols();
    if m == 0 {
        return;
    }
    for (a_i, column) in a.columns().zip(out.chunks_mut(m)) {
        fill_column(a_i, b, column);
    }
}

#[cfg(feature = "parallel")]
fn fill_parallel(a: MatrixRef<'_>, b: MatrixRef<'_>, out: &mut [f64]) {
    use scirs2_core::parallel_ops::*;

    let m = b.cols();
    if m == 0 {
        return;
    }
    out.par_chunks_mut(m)
        .enumerate()
        .for_each(|(i, column)| fill_column(a.column(i), b, column));
}

/// Configurable front end for the pairwise chi-squared kernel.
///
/// Large problems are split across worker threads by output column when the
/// `parallel` feature is enabled. Both paths write every cell exactly once
/// with the same arithmetic, so results are bit-identical.
#[derive(Debug, Clone, Default)]
pub struct PairwiseChiSquaredKernel {
    config: PairwiseKernelConfig,
}

impl PairwiseChiSquaredKernel {
    /// Create a kernel with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a kernel with a validated configuration
    ///
    /// # Examples
    /// ```
    /// use x2_kernel::{PairwiseChiSquaredKernel, PairwiseKernelConfig};
    ///
    /// let config = PairwiseKernelConfig::new().with_parallel(false);
    /// let kernel = PairwiseChiSquaredKernel::with_config(config).unwrap();
    /// assert!(!kernel.config().parallel);
    /// ```
    pub fn with_config(config: PairwiseKernelConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the configuration
    pub fn config(&self) -> &PairwiseKernelConfig {
        &self.config
    }

    /// Compute the `m x n` kernel matrix between `a` (`d x n`) and `b` (`d x m`).
    ///
    /// # Errors
    /// [`KernelError::DimensionMismatch`] when the feature dimensions differ.
    pub fn compute(&self, a: MatrixRef<'_>, b: MatrixRef<'_>) -> Result<Matrix> {
        check_feature_dims(a.rows(), b.rows())?;

        let (d, n, m) = (a.rows(), a.cols(), b.cols());
        let parallel = self.use_parallel(n.saturating_mul(m).saturating_mul(d));

        if self.config.selector == KernelSelector::Intersection {
            warn!(
                selector = %self.config.selector,
                "intersection kernel requested; computing chi-squared distances"
            );
        }
        debug!(d, n, m, parallel, "computing pairwise chi-squared kernel");

        let mut matrix = Matrix::zeros(m, n);
        if parallel {
            #[cfg(feature = "parallel")]
            fill_parallel(a, b, matrix.as_mut_slice());
        } else {
            fill_sequential(a, b, matrix.as_mut_slice());
        }

        Ok(matrix)
    }

    /// Same as [`compute`](Self::compute) for ndarray inputs of shape
    /// `(d, n)` and `(d, m)`. Returns an array of shape `(m, n)`.
    pub fn compute_arrays(
        &self,
        a: ArrayView2<'_, f64>,
        b: ArrayView2<'_, f64>,
    ) -> Result<Array2<f64>> {
        check_feature_dims(a.nrows(), b.nrows())?;
        let a = Matrix::from_array(a);
        let b = Matrix::from_array(b);
        Ok(self.compute(a.view(), b.view())?.to_array2())
    }

    #[cfg(feature = "parallel")]
    fn use_parallel(&self, work: usize) -> bool {
        self.config.parallel && work >= self.config.parallel_threshold
    }

    #[cfg(not(feature = "parallel"))]
    fn use_parallel(&self, _work: usize) -> bool {
        false
    }
}

impl Kernel for PairwiseChiSquaredKernel {
    fn compute(&self, x: &[f64], y: &[f64]) -> Result<f64> {
        ChiSquaredKernel.compute(x, y)
    }

    fn compute_cross(&self, a: MatrixRef<'_>, b: MatrixRef<'_>) -> Result<Matrix> {
        PairwiseChiSquaredKernel::compute(self, a, b)
    }

    fn name(&self) -> &str {
        "PairwiseChiSquared"
    }

    fn is_psd(&self) -> bool {
        false
    }
}
