//! Dense row-major integer matrix.

use std::fmt;

use rand::Rng;

use crate::error::MatrixError;

/// Dense `rows x cols` matrix of `i32` values.
///
/// Each row owns its own buffer, so no two rows ever share storage.
/// Arithmetic and multiplication never mutate their operands; they return
/// freshly allocated matrices.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    values: Vec<Vec<i32>>,
}

impl Matrix {
    /// Create a zero-filled `rows x cols` matrix.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            values: vec![vec![0; cols]; rows],
        }
    }

    /// Create the `n x n` identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut m = Self::new(n, n);
        for i in 0..n {
            m.values[i][i] = 1;
        }
        m
    }

    /// Build a matrix from literal rows.
    ///
    /// An empty row list yields a `0 x 0` matrix.
    pub fn from_rows(rows: Vec<Vec<i32>>) -> Result<Self, MatrixError> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != cols)
        {
            return Err(MatrixError::RaggedRows {
                row,
                expected: cols,
                found,
            });
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            values: rows,
        })
    }

    /// Create a `rows x cols` matrix filled from `rng` with values in `[0, upper)`.
    pub fn random<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        rng: &mut R,
        upper: i32,
    ) -> Result<Self, MatrixError> {
        let mut m = Self::new(rows, cols);
        m.fill_random(rng, upper)?;
        Ok(m)
    }

    /// Set every element to zero.
    pub fn fill_zero(&mut self) {
        for row in &mut self.values {
            row.fill(0);
        }
    }

    /// Set every element to a value drawn from `rng` in `[0, upper)`.
    pub fn fill_random<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        upper: i32,
    ) -> Result<(), MatrixError> {
        if upper <= 0 {
            return Err(MatrixError::InvalidConfig(format!(
                "random upper bound must be positive, got {upper}"
            )));
        }
        for value in self.values.iter_mut().flatten() {
            *value = rng.random_range(0..upper);
        }
        Ok(())
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)` pair.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[must_use]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Raw row-major storage.
    #[must_use]
    pub fn values(&self) -> &[Vec<i32>] {
        &self.values
    }

    /// Consume the matrix and return its rows.
    #[must_use]
    pub fn into_rows(self) -> Vec<Vec<i32>> {
        self.values
    }

    /// Element at `(row, col)`, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<i32> {
        self.values.get(row)?.get(col).copied()
    }

    /// Overwrite the element at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: i32) -> Result<(), MatrixError> {
        let (rows, cols) = self.shape();
        let slot = self
            .values
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or(MatrixError::IndexOutOfBounds {
                row,
                col,
                rows,
                cols,
            })?;
        *slot = value;
        Ok(())
    }

    /// Deep copy: every row gets its own freshly allocated buffer.
    #[must_use]
    pub fn copy(&self) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            values: self.values.iter().map(|row| row.to_vec()).collect(),
        }
    }

    pub(crate) fn row(&self, i: usize) -> &[i32] {
        &self.values[i]
    }

    pub(crate) fn row_mut(&mut self, i: usize) -> &mut [i32] {
        &mut self.values[i]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.values {
            f.write_str("|")?;
            for value in row {
                write!(f, " {value}")?;
            }
            f.write_str(" |\n")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn new_is_zero_filled() {
        let m = Matrix::new(3, 2);
        assert_eq!(m.shape(), (3, 2));
        assert_eq!(m.values().len(), 3);
        assert!(m.values().iter().all(|r| r.len() == 2));
        assert!(m.values().iter().flatten().all(|&v| v == 0));
    }

    #[test]
    fn zero_sized_matrix() {
        let m = Matrix::new(0, 0);
        assert_eq!(m.shape(), (0, 0));
        assert!(m.is_square());
        assert_eq!(m.to_string(), "");
    }

    #[test]
    fn identity_has_unit_diagonal() {
        let id = Matrix::identity(3);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(id.get(i, j), Some(i32::from(i == j)));
            }
        }
    }

    #[test]
    fn from_rows_rejects_ragged() {
        let err = Matrix::from_rows(vec![vec![1, 2], vec![3]]).unwrap_err();
        assert_eq!(
            err,
            MatrixError::RaggedRows {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn from_rows_empty() {
        let m = Matrix::from_rows(Vec::new()).unwrap();
        assert_eq!(m.shape(), (0, 0));
    }

    #[test]
    fn random_fill_within_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let m = Matrix::random(8, 5, &mut rng, 10).unwrap();
        assert!(m.values().iter().flatten().all(|&v| (0..10).contains(&v)));
    }

    #[test]
    fn random_fill_rejects_non_positive_upper() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut m = Matrix::new(2, 2);
        assert!(matches!(
            m.fill_random(&mut rng, 0),
            Err(MatrixError::InvalidConfig(_))
        ));
    }

    #[test]
    fn fill_zero_clears() {
        let mut m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        m.fill_zero();
        assert_eq!(m, Matrix::new(2, 2));
    }

    #[test]
    fn set_and_get() {
        let mut m = Matrix::new(2, 2);
        m.set(1, 0, 9).unwrap();
        assert_eq!(m.get(1, 0), Some(9));
        assert_eq!(m.get(2, 0), None);
        assert!(matches!(
            m.set(0, 2, 1),
            Err(MatrixError::IndexOutOfBounds { row: 0, col: 2, .. })
        ));
    }

    #[test]
    fn copy_does_not_alias_rows() {
        let original = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let mut copy = original.copy();
        copy.set(0, 0, 42).unwrap();
        assert_eq!(original.get(0, 0), Some(1));
        assert_eq!(copy.get(0, 0), Some(42));
    }

    #[test]
    fn display_renders_rows() {
        let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(m.to_string(), "| 1 2 |\n| 3 4 |\n");
    }
}
