//! # x2-kernel
//!
//! **Version**: 0.1.0 | **Status**: Stable
//!
//! Pairwise chi-squared kernel matrices for kernel classifiers (SVM training
//! and testing on histogram features).
//!
//! ## Features
//!
//! - ✅ **Pairwise Kernel Matrix** - `m x n` chi-squared distances between two sample sets
//! - ✅ **Column-Major Views** - Borrowed, optionally strided input matrices
//! - ✅ **Parallel Execution** - Output columns split across rayon workers (`parallel` feature)
//! - ✅ **ndarray Interop** - Conversion to and from `scirs2_core::ndarray`
//! - ✅ **Structured Logging** - `tracing` events, optional subscriber setup
//!
//! ## Kernel Matrix Computation
//!
//! Samples are stored one per column. For training data A (`d x n`) and test
//! data B (`d x m`) the result K is `m x n`:
//!
//! ```text
//! K[(j, i)] = Σ_u (A[u,i] - B[u,j])² / (A[u,i] + B[u,j] + ε)
//! ```
//!
//! where ε is `f64::EPSILON`. Note the orientation: rows of K index B's
//! samples, columns index A's samples.
//!
//! ```rust
//! use x2_kernel::{Matrix, PairwiseChiSquaredKernel};
//!
//! let train = Matrix::from_columns(&[
//!     vec![0.2, 0.3, 0.5],
//!     vec![0.6, 0.2, 0.2],
//! ])
//! .unwrap();
//! let test = Matrix::from_columns(&[
//!     vec![0.2, 0.3, 0.5],
//!     vec![0.1, 0.1, 0.8],
//!     vec![0.3, 0.3, 0.4],
//! ])
//! .unwrap();
//!
//! let kernel = PairwiseChiSquaredKernel::new();
//! let k = kernel.compute(train.view(), test.view()).unwrap();
//!
//! assert_eq!(k.shape(), (3, 2));
//! assert_eq!(k[(0, 0)], 0.0); // identical histograms
//! ```
//!
//! ## Per-Pair Kernel
//!
//! ```rust
//! use x2_kernel::{ChiSquaredKernel, Kernel};
//!
//! let kernel = ChiSquaredKernel::new();
//! let d = kernel.compute(&[1.0, 2.0, 0.0], &[3.0, 2.0, 1.0]).unwrap();
//! assert!((d - 2.0).abs() < 1e-12);
//! ```
//!
//! ## Preconditions
//!
//! Features are expected to be non-negative. Negative inputs are not
//! rejected; the denominator can then vanish or change sign and the result
//! follows IEEE-754 arithmetic. Feature dimensions must match, otherwise
//! [`KernelError::DimensionMismatch`] is returned before anything is computed.

pub mod error;
pub mod logging;
pub mod matrix;
pub mod pairwise;
pub mod tensor_kernels;
pub mod types;

pub use error::{KernelError, Result};
pub use matrix::{Matrix, MatrixRef};
pub use pairwise::{pairwise_chi_squared, PairwiseChiSquaredKernel};
pub use tensor_kernels::{ChiSquaredKernel, CHI_SQUARED_EPSILON};
pub use types::{Kernel, KernelSelector, PairwiseKernelConfig};
