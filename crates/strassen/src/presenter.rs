//! CLI result presenter.

use std::time::Duration;

use strassen_core::Matrix;
use strassen_orchestration::interfaces::{MultiplicationResult, ResultPresenter};

use crate::output::{checksum, format_duration, format_matrix};

/// CLI result presenter.
pub struct CliResultPresenter {
    verbose: bool,
    quiet: bool,
    print: bool,
}

impl CliResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool, print: bool) -> Self {
        Self {
            verbose,
            quiet,
            print,
        }
    }
}

impl ResultPresenter for CliResultPresenter {
    fn present_operands(&self, a: &Matrix, b: &Matrix) {
        if self.quiet || !self.print {
            return;
        }
        println!("A =\n{}", format_matrix(a, self.verbose));
        println!("B =\n{}", format_matrix(b, self.verbose));
    }

    fn present_result(&self, strategy: &str, result: &Matrix, duration: Duration) {
        if self.quiet {
            print!("{result}");
            return;
        }

        println!("Strategy: {strategy}");
        println!("Shape: {}x{}", result.rows(), result.cols());
        println!("Duration: {}", format_duration(duration));
        println!("Checksum: {}", checksum(result));
        if self.print {
            println!("C =\n{}", format_matrix(result, self.verbose));
        }
    }

    fn present_comparison(&self, results: &[MultiplicationResult]) {
        if self.quiet {
            return;
        }

        println!("\nComparison Results:");
        println!("{:-<60}", "");
        for result in results {
            let status = if result.is_ok() { "OK" } else { "ERROR" };
            println!(
                "  {:<20} {:>10} [{}]",
                result.strategy,
                format_duration(result.duration),
                status,
            );
        }
    }

    fn present_error(&self, error: &str) {
        eprintln!("Error: {error}");
    }
}
