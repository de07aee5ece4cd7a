//! Core orchestration: parallel execution and result analysis.

use std::sync::Arc;
use std::time::Instant;

use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

use strassen_core::{Matrix, MatrixError, Multiplier};

use crate::interfaces::MultiplicationResult;

/// Multiply `a * b` with every given strategy.
///
/// A single strategy runs on the calling thread; several run in parallel.
pub fn execute_multiplications(
    multipliers: &[Arc<dyn Multiplier>],
    a: &Matrix,
    b: &Matrix,
) -> Vec<MultiplicationResult> {
    let run = |strat: &Arc<dyn Multiplier>| {
        let start = Instant::now();
        let outcome = strat.multiply(a, b);
        let duration = start.elapsed();
        tracing::debug!(
            strategy = strat.name(),
            ?duration,
            ok = outcome.is_ok(),
            "multiplication finished"
        );
        MultiplicationResult {
            strategy: strat.name().to_string(),
            outcome,
            duration,
        }
    };

    if multipliers.len() == 1 {
        return vec![run(&multipliers[0])];
    }

    multipliers.par_iter().map(run).collect()
}

/// Check that all successful results agree.
///
/// Fails with `Mismatch` when two successful results differ, or with the
/// first error when no strategy succeeded.
pub fn analyze_comparison_results(results: &[MultiplicationResult]) -> Result<(), MatrixError> {
    let mut valid = results.iter().filter_map(|r| r.outcome.as_ref().ok());

    let Some(first) = valid.next() else {
        return Err(results
            .iter()
            .find_map(|r| r.outcome.as_ref().err().cloned())
            .unwrap_or_else(|| MatrixError::InvalidConfig("no strategies were run".into())));
    };

    if valid.any(|m| m != first) {
        return Err(MatrixError::Mismatch);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use strassen_core::registry::DefaultFactory;
    use strassen_core::{MultiplierFactory, Options};

    fn result(strategy: &str, outcome: Result<Matrix, MatrixError>) -> MultiplicationResult {
        MultiplicationResult {
            strategy: strategy.into(),
            outcome,
            duration: Duration::from_millis(1),
        }
    }

    #[test]
    fn execute_single_strategy() {
        let factory = DefaultFactory::default();
        let strat = factory.get("naive").unwrap();
        let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let b = Matrix::from_rows(vec![vec![5, 6], vec![7, 8]]).unwrap();
        let results = execute_multiplications(&[strat], &a, &b);
        assert_eq!(results.len(), 1);
        assert_eq!(
            results[0].outcome.as_ref().unwrap(),
            &Matrix::from_rows(vec![vec![19, 22], vec![43, 50]]).unwrap()
        );
    }

    #[test]
    fn execute_all_strategies_agree() {
        let factory = DefaultFactory::new(Options::default().with_strassen_threshold(4));
        let strats: Vec<_> = factory
            .available()
            .into_iter()
            .map(|n| factory.get(n).unwrap())
            .collect();
        let a = Matrix::identity(16);
        let b = Matrix::from_rows((0..16).map(|i| (0..16).map(|j| i * 16 + j).collect()).collect())
            .unwrap();
        let results = execute_multiplications(&strats, &a, &b);
        assert_eq!(results.len(), strats.len());
        assert!(analyze_comparison_results(&results).is_ok());
        assert!(results.iter().all(|r| r.outcome.as_ref() == Ok(&b)));
    }

    #[test]
    fn analyze_mismatching_results() {
        let results = vec![
            result("A", Ok(Matrix::identity(2))),
            result("B", Ok(Matrix::new(2, 2))),
        ];
        assert_eq!(analyze_comparison_results(&results), Err(MatrixError::Mismatch));
    }

    #[test]
    fn analyze_mixed_valid_and_error_results() {
        let results = vec![
            result("A", Ok(Matrix::identity(2))),
            result("B", Err(MatrixError::OddDimension(3))),
        ];
        assert!(analyze_comparison_results(&results).is_ok());
    }

    #[test]
    fn analyze_no_valid_results_returns_first_error() {
        let results = vec![result("A", Err(MatrixError::OddDimension(3)))];
        assert_eq!(
            analyze_comparison_results(&results),
            Err(MatrixError::OddDimension(3))
        );
    }

    #[test]
    fn analyze_empty_results() {
        assert!(matches!(
            analyze_comparison_results(&[]),
            Err(MatrixError::InvalidConfig(_))
        ));
    }
}
