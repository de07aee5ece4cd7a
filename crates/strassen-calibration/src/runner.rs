//! Benchmark runner for calibration.

use std::time::{Duration, Instant};

/// Run a benchmark with a warmup phase, returning median, min, max and mean.
pub fn benchmark_detailed<F>(warmup_iters: u32, measure_iters: u32, mut f: F) -> BenchmarkResult
where
    F: FnMut(),
{
    for _ in 0..warmup_iters {
        f();
    }

    let measure_iters = measure_iters.max(1);
    let mut durations = Vec::with_capacity(measure_iters as usize);
    for _ in 0..measure_iters {
        let start = Instant::now();
        f();
        durations.push(start.elapsed());
    }

    durations.sort();
    let min = durations.first().copied().unwrap_or_default();
    let max = durations.last().copied().unwrap_or_default();
    let mid = durations.len() / 2;
    let median = if durations.len() % 2 == 1 {
        durations[mid]
    } else {
        (durations[mid - 1] + durations[mid]) / 2
    };
    let total: Duration = durations.iter().sum();

    BenchmarkResult {
        name: String::new(),
        mean: total / measure_iters,
        median,
        min,
        max,
        iterations: measure_iters,
    }
}

/// Result of a single benchmark run.
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub name: String,
    pub mean: Duration,
    pub median: Duration,
    pub min: Duration,
    pub max: Duration,
    pub iterations: u32,
}

impl BenchmarkResult {
    /// Create a named result.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn benchmark_zero_iterations_does_not_divide_by_zero() {
        let result = benchmark_detailed(0, 0, || {});
        assert_eq!(result.iterations, 1);
    }

    #[test]
    fn benchmark_detailed_orders_stats() {
        let result = benchmark_detailed(2, 5, || {
            std::hint::black_box(2 + 2);
        });
        assert_eq!(result.iterations, 5);
        assert!(result.min <= result.median);
        assert!(result.median <= result.max);
    }

    #[test]
    fn benchmark_result_with_name() {
        let result = benchmark_detailed(1, 3, || {}).with_name("test_bench");
        assert_eq!(result.name, "test_bench");
    }
}
