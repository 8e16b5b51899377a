//! Error types for x2-kernel.

use thiserror::Error;

/// Errors that can occur in kernel operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KernelError {
    /// Mismatched dimensions between inputs
    #[error("Dimension mismatch in {context}: expected {expected:?}, got {got:?}")]
    DimensionMismatch {
        expected: Vec<usize>,
        got: Vec<usize>,
        context: String,
    },
    /// Buffer does not fit the declared matrix shape
    #[error("Invalid {rows}x{cols} matrix over {len} elements: {reason}")]
    InvalidShape {
        rows: usize,
        cols: usize,
        len: usize,
        reason: String,
    },
    /// Invalid kernel parameter
    #[error("Invalid parameter '{parameter}' = '{value}': {reason}")]
    InvalidParameter {
        parameter: String,
        value: String,
        reason: String,
    },
    /// Global subscriber could not be installed
    #[error("Logging setup failed: {0}")]
    LoggingSetup(String),
}

impl KernelError {
    /// Feature dimensionality of the two kernel operands differs.
    pub(crate) fn feature_mismatch(expected: usize, got: usize, context: &str) -> Self {
        Self::DimensionMismatch {
            expected: vec![expected],
            got: vec![got],
            context: context.to_string(),
        }
    }
}

/// Result type for kernel operations
pub type Result<T> = std::result::Result<T, KernelError>;
