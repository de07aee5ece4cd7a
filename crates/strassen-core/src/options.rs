//! Multiplication options and configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_PARALLEL_THRESHOLD, DEFAULT_RANDOM_UPPER, DEFAULT_STRASSEN_THRESHOLD,
};

/// Options for matrix multiplication and random fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    /// Dimension below which Strassen falls back to the naive multiplier.
    pub strassen_threshold: usize,
    /// Dimension at which the seven Strassen products run in parallel.
    pub parallel_threshold: usize,
    /// Exclusive upper bound for random fill values.
    pub random_upper: i32,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            strassen_threshold: DEFAULT_STRASSEN_THRESHOLD,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            random_upper: DEFAULT_RANDOM_UPPER,
        }
    }
}

impl Options {
    /// Normalize options, applying defaults where values are zero.
    ///
    /// The parallel threshold is raised to at least the Strassen threshold.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.strassen_threshold == 0 {
            self.strassen_threshold = DEFAULT_STRASSEN_THRESHOLD;
        }
        if self.parallel_threshold == 0 {
            self.parallel_threshold = DEFAULT_PARALLEL_THRESHOLD;
        }
        if self.random_upper <= 0 {
            self.random_upper = DEFAULT_RANDOM_UPPER;
        }
        self.parallel_threshold = self.parallel_threshold.max(self.strassen_threshold);
        self
    }

    /// Options with a custom crossover threshold.
    #[must_use]
    pub fn with_strassen_threshold(mut self, threshold: usize) -> Self {
        self.strassen_threshold = threshold;
        self
    }

    /// Options with a custom parallel threshold.
    #[must_use]
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }
}
