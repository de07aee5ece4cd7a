//! # strassen-core
//!
//! Dense square-matrix multiplication over `i32`: a schoolbook multiplier,
//! Strassen's seven-product recursion, and the dispatcher that picks
//! between them by size and shape.

pub mod blocks;
pub mod constants;
pub mod dispatch;
pub mod error;
pub mod matrix;
pub(crate) mod matrix_ops;
pub mod naive;
pub mod options;
pub mod registry;
pub mod strassen;
pub mod strategy;

// Re-exports
pub use blocks::Quadrants;
pub use constants::{
    exit_codes, DEFAULT_PARALLEL_THRESHOLD, DEFAULT_RANDOM_UPPER, DEFAULT_STRASSEN_THRESHOLD,
};
pub use dispatch::{multiply, select_route, NaiveReason, Route};
pub use error::MatrixError;
pub use matrix::Matrix;
pub use naive::multiply_naive;
pub use options::Options;
pub use registry::{DefaultFactory, MultiplierFactory};
pub use strassen::{multiply_strassen, StrassenMultiplier};
pub use strategy::Multiplier;

/// Multiply two matrices with the default thresholds.
///
/// This is a convenience function for simple use cases. For custom
/// thresholds use [`dispatch::multiply`] with an [`Options`] value.
///
/// # Example
/// ```
/// use strassen_core::Matrix;
///
/// let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
/// let b = Matrix::from_rows(vec![vec![5, 6], vec![7, 8]]).unwrap();
/// let c = strassen_core::product(&a, &b).unwrap();
/// assert_eq!(c.values(), &[vec![19, 22], vec![43, 50]]);
/// ```
pub fn product(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    multiply(a, b, &Options::default())
}
