//! Orchestration interfaces.

use std::time::Duration;

use strassen_core::{Matrix, MatrixError};

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present the operands of a run.
    fn present_operands(&self, a: &Matrix, b: &Matrix);

    /// Present a single multiplication result.
    fn present_result(&self, strategy: &str, result: &Matrix, duration: Duration);

    /// Present a comparison of all results.
    fn present_comparison(&self, results: &[MultiplicationResult]);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Result of a single multiplication run.
#[derive(Debug, Clone)]
pub struct MultiplicationResult {
    /// Strategy name.
    pub strategy: String,
    /// The computed product or a structured error.
    pub outcome: Result<Matrix, MatrixError>,
    /// Computation duration.
    pub duration: Duration,
}

impl MultiplicationResult {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}
