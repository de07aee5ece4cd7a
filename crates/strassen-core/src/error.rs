//! Error taxonomy for matrix operations.

/// Error type for matrix construction, arithmetic and multiplication.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    /// Operand shapes are incompatible for the requested operation.
    #[error("dimension mismatch in {op}: {}x{} vs {}x{}", left.0, left.1, right.0, right.1)]
    DimensionMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    /// Quadrants cannot be assembled into a single matrix.
    #[error("invalid block layout: {0}")]
    InvalidBlockLayout(String),

    /// The matrix must be square.
    #[error("matrix is not square: {rows}x{cols}")]
    NonSquare { rows: usize, cols: usize },

    /// The matrix dimension must be even.
    #[error("matrix dimension {0} is odd")]
    OddDimension(usize),

    /// Literal rows do not share a common length.
    #[error("row {row} has length {found}, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Element index lies outside the matrix.
    #[error("index ({row}, {col}) out of bounds for {rows}x{cols} matrix")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    InvalidConfig(String),

    /// Results from different strategies don't match.
    #[error("result mismatch between strategies")]
    Mismatch,
}

impl MatrixError {
    pub(crate) fn mismatch(op: &'static str, left: (usize, usize), right: (usize, usize)) -> Self {
        Self::DimensionMismatch { op, left, right }
    }
}
