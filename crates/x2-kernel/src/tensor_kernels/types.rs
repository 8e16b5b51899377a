//! Kernel type definitions.

/// Machine epsilon added to every chi-squared denominator.
///
/// Keeps `0 / 0` terms at zero when both histogram bins are empty.
pub const CHI_SQUARED_EPSILON: f64 = f64::EPSILON;

/// Unnormalised chi-squared distance: K(x, y) = Σ((x_i - y_i)² / (x_i + y_i + ε))
///
/// Intended for non-negative histogram features. No exponential transform is
/// applied, so the value is a distance: zero for identical inputs and growing
/// with dissimilarity.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChiSquaredKernel;

impl ChiSquaredKernel {
    /// Create a new chi-squared kernel
    ///
    /// # Examples
    /// ```
    /// use x2_kernel::{ChiSquaredKernel, Kernel};
    ///
    /// let kernel = ChiSquaredKernel::new();
    /// let hist1 = vec![0.2, 0.3, 0.5];
    /// let hist2 = vec![0.2, 0.3, 0.5];
    /// assert_eq!(kernel.compute(&hist1, &hist2).unwrap(), 0.0);
    /// ```
    pub fn new() -> Self {
        Self
    }

    /// Chi-squared distance between two equal-length slices.
    ///
    /// Callers check lengths first; mismatched slices trip a debug assertion.
    #[inline]
    pub fn distance(x: &[f64], y: &[f64]) -> f64 {
        debug_assert_eq!(x.len(), y.len(), "chi-squared operands differ in length");
        let mut acc = 0.0;
        for (&a, &b) in x.iter().zip(y) {
            let diff = a - b;
            acc += diff * diff / (a + b + CHI_SQUARED_EPSILON);
        }
        acc
    }
}
