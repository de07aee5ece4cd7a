//! Routing between the Strassen and naive multipliers.

use serde::{Deserialize, Serialize};

use crate::error::MatrixError;
use crate::matrix::Matrix;
use crate::naive::multiply_naive;
use crate::options::Options;
use crate::strassen::StrassenMultiplier;

/// Why a product was routed to the naive multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NaiveReason {
    /// Operands have different shapes.
    ShapeMismatch,
    /// Operands are not square.
    NonSquare,
    /// Dimension is odd and cannot be split.
    OddDimension,
    /// Dimension is below the crossover threshold.
    BelowThreshold,
}

/// Which multiplier handles a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    Strassen,
    Naive(NaiveReason),
}

/// Decide which multiplier handles `a * b`.
///
/// The Strassen path requires `a` and `b` to be square, of equal shape, of
/// even dimension and at least `threshold` in size. A dimension below 2 never
/// qualifies, so the recursion always bottoms out.
#[must_use]
pub fn select_route(a: &Matrix, b: &Matrix, threshold: usize) -> Route {
    if a.shape() != b.shape() {
        return Route::Naive(NaiveReason::ShapeMismatch);
    }
    if !a.is_square() {
        return Route::Naive(NaiveReason::NonSquare);
    }
    let n = a.rows();
    if n % 2 != 0 {
        return Route::Naive(NaiveReason::OddDimension);
    }
    if n < threshold.max(2) {
        return Route::Naive(NaiveReason::BelowThreshold);
    }
    Route::Strassen
}

/// Multiply `a * b`, choosing the Strassen or naive path.
pub fn multiply(a: &Matrix, b: &Matrix, opts: &Options) -> Result<Matrix, MatrixError> {
    let route = select_route(a, b, opts.strassen_threshold);
    tracing::debug!(
        left = ?a.shape(),
        right = ?b.shape(),
        ?route,
        "dispatching matrix product"
    );
    match route {
        Route::Strassen => StrassenMultiplier::from_options(opts).multiply(a, b),
        Route::Naive(_) => multiply_naive(a, b),
    }
}

impl Matrix {
    /// Product `self * other` with default options.
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        multiply(self, other, &Options::default())
    }

    /// Product `self * other` with explicit options.
    pub fn multiply_with(&self, other: &Matrix, opts: &Options) -> Result<Matrix, MatrixError> {
        multiply(self, other, opts)
    }
}
