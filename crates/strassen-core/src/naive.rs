//! Schoolbook O(m·n·p) multiplication.

use crate::error::MatrixError;
use crate::matrix::Matrix;

/// Multiply `a` (m x n) by `b` (n x p) with the triple loop.
///
/// The loop runs in i-k-j order so the innermost loop walks rows of both
/// `b` and the result sequentially.
pub fn multiply_naive(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    if a.cols() != b.rows() {
        return Err(MatrixError::mismatch("multiply", a.shape(), b.shape()));
    }

    let mut c = Matrix::new(a.rows(), b.cols());
    for i in 0..a.rows() {
        let a_row = a.row(i);
        let c_row = c.row_mut(i);
        for (p, &a_ip) in a_row.iter().enumerate() {
            if a_ip == 0 {
                continue;
            }
            for (out, &b_pj) in c_row.iter_mut().zip(b.row(p)) {
                *out = out.wrapping_add(a_ip.wrapping_mul(b_pj));
            }
        }
    }
    Ok(c)
}

impl Matrix {
    /// Schoolbook product `self * other`.
    pub fn multiply_naive(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        multiply_naive(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(rows: Vec<Vec<i32>>) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn two_by_two() {
        let a = m(vec![vec![1, 2], vec![3, 4]]);
        let b = m(vec![vec![5, 6], vec![7, 8]]);
        assert_eq!(
            multiply_naive(&a, &b).unwrap(),
            m(vec![vec![19, 22], vec![43, 50]])
        );
    }

    #[test]
    fn rectangular_product() {
        // 2x3 * 3x2
        let a = m(vec![vec![1, 2, 3], vec![4, 5, 6]]);
        let b = m(vec![vec![7, 8], vec![9, 10], vec![11, 12]]);
        let c = a.multiply_naive(&b).unwrap();
        assert_eq!(c, m(vec![vec![58, 64], vec![139, 154]]));
    }

    #[test]
    fn column_times_row() {
        // 3x1 * 1x2 -> 3x2, rejected by a rows==cols cross check
        let a = m(vec![vec![1], vec![2], vec![3]]);
        let b = m(vec![vec![4, 5]]);
        let c = multiply_naive(&a, &b).unwrap();
        assert_eq!(c.shape(), (3, 2));
        assert_eq!(c, m(vec![vec![4, 5], vec![8, 10], vec![12, 15]]));
    }

    #[test]
    fn incompatible_shapes() {
        let a = Matrix::new(2, 3);
        let b = Matrix::new(2, 3);
        assert_eq!(
            multiply_naive(&a, &b).unwrap_err(),
            MatrixError::DimensionMismatch {
                op: "multiply",
                left: (2, 3),
                right: (2, 3)
            }
        );
    }

    #[test]
    fn empty_inner_dimension() {
        let c = multiply_naive(&Matrix::new(2, 0), &Matrix::new(0, 3)).unwrap();
        assert_eq!(c, Matrix::new(2, 3));
    }

    #[test]
    fn negative_entries() {
        let a = m(vec![vec![-1, 2], vec![3, -4]]);
        let id = Matrix::identity(2);
        assert_eq!(multiply_naive(&a, &id).unwrap(), a);
    }
}
