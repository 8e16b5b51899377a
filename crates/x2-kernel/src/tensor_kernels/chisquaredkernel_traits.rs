//! # ChiSquaredKernel - Trait Implementations
//!
//! This module contains trait implementations for `ChiSquaredKernel`.
//!
//! ## Implemented Traits
//!
//! - `Kernel`

use crate::error::{KernelError, Result};
use crate::types::Kernel;

use super::types::ChiSquaredKernel;

impl Kernel for ChiSquaredKernel {
    fn compute(&self, x: &[f64], y: &[f64]) -> Result<f64> {
        if x.len() != y.len() {
            return Err(KernelError::feature_mismatch(
                x.len(),
                y.len(),
                "chi-squared kernel",
            ));
        }
        Ok(Self::distance(x, y))
    }
    fn name(&self) -> &str {
        "ChiSquared"
    }
    fn is_psd(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::Matrix;
    use approx::assert_relative_eq;

    #[test]
    fn test_identical_histograms() {
        let kernel = ChiSquaredKernel::new();
        let x = vec![0.1, 0.0, 0.4, 0.5];
        assert_eq!(kernel.compute(&x, &x).unwrap(), 0.0);
    }

    #[test]
    fn test_known_value() {
        let kernel = ChiSquaredKernel::new();
        // (1-3)^2/4 + (2-2)^2/4 + (0-1)^2/1
        let value = kernel.compute(&[1.0, 2.0, 0.0], &[3.0, 2.0, 1.0]).unwrap();
        assert_relative_eq!(value, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_bins_contribute_zero() {
        let kernel = ChiSquaredKernel::new();
        let value = kernel.compute(&[0.0, 0.0], &[0.0, 0.0]).unwrap();
        assert_eq!(value, 0.0);
        assert!(value.is_finite());
    }

    #[test]
    fn test_dimension_mismatch() {
        let kernel = ChiSquaredKernel::new();
        let err = kernel.compute(&[1.0, 2.0], &[1.0]).unwrap_err();
        assert!(matches!(err, KernelError::DimensionMismatch { .. }));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "differ in length")]
    fn test_distance_asserts_equal_lengths() {
        let _ = ChiSquaredKernel::distance(&[1.0, 2.0, 3.0], &[1.0, 2.0]);
    }

    #[test]
    fn test_symmetry() {
        let kernel = ChiSquaredKernel::new();
        let x = [0.3, 1.5, 2.0];
        let y = [1.1, 0.2, 0.7];
        assert_eq!(
            kernel.compute(&x, &y).unwrap(),
            kernel.compute(&y, &x).unwrap()
        );
    }

    #[test]
    fn test_compute_cross_layout() {
        let kernel = ChiSquaredKernel::new();
        let a = Matrix::from_columns(&[vec![1.0], vec![2.0]]).unwrap();
        let b = Matrix::from_columns(&[vec![1.0], vec![3.0], vec![5.0]]).unwrap();
        let k = kernel.compute_cross(a.view(), b.view()).unwrap();

        assert_eq!(k.shape(), (3, 2));
        assert_eq!(k[(0, 0)], 0.0);
        assert_relative_eq!(k[(2, 1)], 9.0 / 7.0, epsilon = 1e-12);
    }

    #[test]
    fn test_metadata() {
        let kernel = ChiSquaredKernel::new();
        assert_eq!(kernel.name(), "ChiSquared");
        assert!(!kernel.is_psd());
    }
}
