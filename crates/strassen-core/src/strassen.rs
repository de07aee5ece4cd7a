//! Strassen's seven-product recursive multiplication.
//!
//! Each level splits both operands into quadrants, forms seven products of
//! quadrant sums and differences, and combines them into the four output
//! quadrants:
//!
//! ```text
//! H0 = (A11 + A22)(B11 + B22)     C11 = H0 + H3 - H4 + H6
//! H1 = (A21 + A22) B11            C12 = H2 + H4
//! H2 = A11 (B12 - B22)            C21 = H1 + H3
//! H3 = A22 (B21 - B11)            C22 = H0 - H1 + H2 + H5
//! H4 = (A11 + A12) B22
//! H5 = (A21 - A11)(B11 + B12)
//! H6 = (A12 - A22)(B21 + B22)
//! ```

use std::borrow::Cow;

use rayon::prelude::*;

use crate::blocks::Quadrants;
use crate::constants::DEFAULT_STRASSEN_THRESHOLD;
use crate::dispatch::{select_route, Route};
use crate::error::MatrixError;
use crate::matrix::Matrix;
use crate::naive::multiply_naive;
use crate::options::Options;

type Operands<'a> = (Cow<'a, Matrix>, Cow<'a, Matrix>);

/// Recursive Strassen multiplier with a naive fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrassenMultiplier {
    threshold: usize,
    parallel_threshold: Option<usize>,
}

impl StrassenMultiplier {
    /// Sequential multiplier falling back to naive below `threshold`.
    #[must_use]
    pub fn new(threshold: usize) -> Self {
        Self {
            threshold,
            parallel_threshold: None,
        }
    }

    /// Multiplier computing the seven products in parallel at dimensions of
    /// at least `parallel_threshold`.
    #[must_use]
    pub fn parallel(threshold: usize, parallel_threshold: usize) -> Self {
        Self {
            threshold,
            parallel_threshold: Some(parallel_threshold),
        }
    }

    /// Build from options; parallelism is enabled at `opts.parallel_threshold`.
    #[must_use]
    pub fn from_options(opts: &Options) -> Self {
        Self::parallel(opts.strassen_threshold, opts.parallel_threshold)
    }

    #[must_use]
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    #[must_use]
    pub fn parallel_threshold(&self) -> Option<usize> {
        self.parallel_threshold
    }

    /// Multiply `a * b`.
    ///
    /// Inputs that are not square, equal-shaped, of even dimension and at
    /// least the threshold in size go to the naive multiplier.
    pub fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
        self.multiply_at(a, b, 0)
    }

    fn multiply_at(&self, a: &Matrix, b: &Matrix, depth: usize) -> Result<Matrix, MatrixError> {
        match select_route(a, b, self.threshold) {
            Route::Strassen => self.recurse(a, b, depth),
            Route::Naive(reason) => {
                tracing::trace!(depth, n = a.rows(), ?reason, "naive base case");
                multiply_naive(a, b)
            }
        }
    }

    fn recurse(&self, a: &Matrix, b: &Matrix, depth: usize) -> Result<Matrix, MatrixError> {
        let n = a.rows();
        tracing::trace!(depth, n, "strassen level");

        let qa = a.split()?;
        let qb = b.split()?;
        let operands = seven_operands(&qa, &qb)?;

        let products: Vec<Matrix> = if self.parallel_threshold.is_some_and(|p| n >= p) {
            operands
                .par_iter()
                .map(|(l, r)| self.multiply_at(l, r, depth + 1))
                .collect::<Result<_, MatrixError>>()?
        } else {
            operands
                .iter()
                .map(|(l, r)| self.multiply_at(l, r, depth + 1))
                .collect::<Result<_, MatrixError>>()?
        };

        let h = &products;
        Quadrants {
            q11: h[0].add(&h[3])?.sub(&h[4])?.add(&h[6])?,
            q12: h[2].add(&h[4])?,
            q21: h[1].add(&h[3])?,
            q22: h[0].sub(&h[1])?.add(&h[2])?.add(&h[5])?,
        }
        .assemble()
    }
}

impl Default for StrassenMultiplier {
    fn default() -> Self {
        Self::new(DEFAULT_STRASSEN_THRESHOLD)
    }
}

/// Left and right factors of H0..H6.
fn seven_operands<'a>(
    a: &'a Quadrants,
    b: &'a Quadrants,
) -> Result<Vec<Operands<'a>>, MatrixError> {
    use Cow::{Borrowed, Owned};
    Ok(vec![
        (Owned(a.q11.add(&a.q22)?), Owned(b.q11.add(&b.q22)?)),
        (Owned(a.q21.add(&a.q22)?), Borrowed(&b.q11)),
        (Borrowed(&a.q11), Owned(b.q12.sub(&b.q22)?)),
        (Borrowed(&a.q22), Owned(b.q21.sub(&b.q11)?)),
        (Owned(a.q11.add(&a.q12)?), Borrowed(&b.q22)),
        (Owned(a.q21.sub(&a.q11)?), Owned(b.q11.add(&b.q12)?)),
        (Owned(a.q12.sub(&a.q22)?), Owned(b.q21.add(&b.q22)?)),
    ])
}

/// Multiply with Strassen using the thresholds in `opts`.
pub fn multiply_strassen(a: &Matrix, b: &Matrix, opts: &Options) -> Result<Matrix, MatrixError> {
    StrassenMultiplier::from_options(opts).multiply(a, b)
}
