//! Elementwise matrix arithmetic.
//!
//! All element operations wrap on overflow so that every multiplication
//! path produces bit-identical results.

use crate::error::MatrixError;
use crate::matrix::Matrix;

impl Matrix {
    /// Elementwise sum. Operands must share the same shape.
    pub fn add(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.zip_with(other, "add", i32::wrapping_add)
    }

    /// Elementwise difference. Operands must share the same shape.
    pub fn sub(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.zip_with(other, "sub", i32::wrapping_sub)
    }

    fn zip_with(
        &self,
        other: &Matrix,
        op: &'static str,
        f: impl Fn(i32, i32) -> i32,
    ) -> Result<Matrix, MatrixError> {
        if self.shape() != other.shape() {
            return Err(MatrixError::mismatch(op, self.shape(), other.shape()));
        }
        let mut result = Matrix::new(self.rows(), self.cols());
        for i in 0..self.rows() {
            let (lhs, rhs) = (self.row(i), other.row(i));
            for (out, (&x, &y)) in result.row_mut(i).iter_mut().zip(lhs.iter().zip(rhs)) {
                *out = f(x, y);
            }
        }
        Ok(result)
    }
}
