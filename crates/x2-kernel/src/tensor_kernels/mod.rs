//! Per-pair tensor kernels.

pub mod chisquaredkernel_traits;
pub mod types;

pub use types::*;
