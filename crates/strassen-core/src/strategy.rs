//! Multiplication strategy trait and implementations.
//!
//! `Multiplier` is the narrow interface the orchestration layer consumes.
//! Strategies include the schoolbook product, sequential and parallel
//! Strassen, and the adaptive dispatcher.

use crate::dispatch;
use crate::error::MatrixError;
use crate::matrix::Matrix;
use crate::naive::multiply_naive;
use crate::options::Options;
use crate::strassen::StrassenMultiplier;

/// Narrow interface for matrix multiplication.
pub trait Multiplier: Send + Sync {
    /// Multiply `a * b`.
    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError>;

    /// Get the name of this multiplication strategy.
    fn name(&self) -> &str;
}

/// Schoolbook triple-loop strategy.
pub struct NaiveStrategy;

impl NaiveStrategy {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for NaiveStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Multiplier for NaiveStrategy {
    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
        multiply_naive(a, b)
    }

    fn name(&self) -> &'static str {
        "Naive"
    }
}

/// Sequential Strassen strategy.
pub struct StrassenStrategy {
    inner: StrassenMultiplier,
}

impl StrassenStrategy {
    #[must_use]
    pub fn new(threshold: usize) -> Self {
        Self {
            inner: StrassenMultiplier::new(threshold),
        }
    }
}

impl Multiplier for StrassenStrategy {
    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
        self.inner.multiply(a, b)
    }

    fn name(&self) -> &'static str {
        "Strassen"
    }
}

/// Strassen strategy that uses rayon to compute the seven products
/// concurrently once the dimension exceeds the parallel threshold.
pub struct ParallelStrassenStrategy {
    inner: StrassenMultiplier,
}

impl ParallelStrassenStrategy {
    #[must_use]
    pub fn new(threshold: usize, parallel_threshold: usize) -> Self {
        Self {
            inner: StrassenMultiplier::parallel(threshold, parallel_threshold),
        }
    }
}

impl Multiplier for ParallelStrassenStrategy {
    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
        self.inner.multiply(a, b)
    }

    fn name(&self) -> &'static str {
        "ParallelStrassen"
    }
}

/// Adaptive strategy: routes each product through the dispatcher.
pub struct AdaptiveStrategy {
    opts: Options,
}

impl AdaptiveStrategy {
    #[must_use]
    pub fn new(opts: Options) -> Self {
        Self { opts }
    }
}

impl Multiplier for AdaptiveStrategy {
    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
        dispatch::multiply(a, b, &self.opts)
    }

    fn name(&self) -> &'static str {
        "Adaptive"
    }
}
