//! Block decomposition of square matrices into 2x2 quadrant grids.

use crate::error::MatrixError;
use crate::matrix::Matrix;

/// Four equally sized quadrants of a square matrix.
///
/// `q11` is the top-left block, `q12` top-right, `q21` bottom-left and
/// `q22` bottom-right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quadrants {
    pub q11: Matrix,
    pub q12: Matrix,
    pub q21: Matrix,
    pub q22: Matrix,
}

impl Quadrants {
    /// Build quadrants from a row-major 2x2 grid.
    ///
    /// Fails with `InvalidBlockLayout` unless the grid has exactly two rows
    /// of exactly two matrices each.
    pub fn from_grid(grid: Vec<Vec<Matrix>>) -> Result<Self, MatrixError> {
        if grid.len() != 2 {
            return Err(MatrixError::InvalidBlockLayout(format!(
                "expected 2 block rows, got {}",
                grid.len()
            )));
        }
        if let Some(row) = grid.iter().find(|row| row.len() != 2) {
            return Err(MatrixError::InvalidBlockLayout(format!(
                "expected 2 blocks per row, got {}",
                row.len()
            )));
        }
        let mut blocks = grid.into_iter().flatten();
        match (blocks.next(), blocks.next(), blocks.next(), blocks.next()) {
            (Some(q11), Some(q12), Some(q21), Some(q22)) => Ok(Self { q11, q12, q21, q22 }),
            _ => Err(MatrixError::InvalidBlockLayout("missing block".into())),
        }
    }

    /// Side length shared by all four quadrants.
    ///
    /// Fails with `InvalidBlockLayout` if any quadrant is non-square or the
    /// quadrants differ in size.
    pub fn block_size(&self) -> Result<usize, MatrixError> {
        let s = self.q11.rows();
        for (name, block) in self.iter_named() {
            if block.shape() != (s, s) {
                return Err(MatrixError::InvalidBlockLayout(format!(
                    "block {name} is {}x{}, expected {s}x{s}",
                    block.rows(),
                    block.cols()
                )));
            }
        }
        Ok(s)
    }

    /// Assemble the quadrants into one `2s x 2s` matrix.
    pub fn assemble(&self) -> Result<Matrix, MatrixError> {
        let s = self.block_size()?;
        let mut out = Matrix::new(2 * s, 2 * s);
        for i in 0..s {
            let top = out.row_mut(i);
            top[..s].copy_from_slice(self.q11.row(i));
            top[s..].copy_from_slice(self.q12.row(i));
            let bottom = out.row_mut(s + i);
            bottom[..s].copy_from_slice(self.q21.row(i));
            bottom[s..].copy_from_slice(self.q22.row(i));
        }
        Ok(out)
    }

    fn iter_named(&self) -> [(&'static str, &Matrix); 4] {
        [
            ("[0][0]", &self.q11),
            ("[0][1]", &self.q12),
            ("[1][0]", &self.q21),
            ("[1][1]", &self.q22),
        ]
    }
}

impl Matrix {
    /// Split a square matrix of even dimension into four quadrants.
    pub fn split(&self) -> Result<Quadrants, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::NonSquare {
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        if self.rows() % 2 != 0 {
            return Err(MatrixError::OddDimension(self.rows()));
        }

        let s = self.rows() / 2;
        let block = |row_off: usize, col_off: usize| {
            let mut m = Matrix::new(s, s);
            for i in 0..s {
                m.row_mut(i)
                    .copy_from_slice(&self.row(row_off + i)[col_off..col_off + s]);
            }
            m
        };

        Ok(Quadrants {
            q11: block(0, 0),
            q12: block(0, s),
            q21: block(s, 0),
            q22: block(s, s),
        })
    }

    /// Assemble a matrix from a row-major 2x2 grid of equally sized square blocks.
    pub fn from_quadrants(grid: Vec<Vec<Matrix>>) -> Result<Matrix, MatrixError> {
        Quadrants::from_grid(grid)?.assemble()
    }
}
