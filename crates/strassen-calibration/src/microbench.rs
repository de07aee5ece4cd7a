//! Micro-benchmarks comparing the naive and Strassen multipliers.

use rand::rngs::StdRng;
use rand::SeedableRng;

use strassen_core::{multiply_naive, Matrix, StrassenMultiplier, DEFAULT_RANDOM_UPPER};

use crate::runner::{benchmark_detailed, BenchmarkResult};

/// Naive vs single-level Strassen timings at one dimension.
#[derive(Debug, Clone)]
pub struct CrossoverPoint {
    pub size: usize,
    pub naive_ns: u64,
    pub strassen_ns: u64,
    pub strassen_is_faster: bool,
}

/// Sequential vs parallel Strassen timings at one dimension.
#[derive(Debug, Clone)]
pub struct ParallelOverhead {
    pub size: usize,
    pub sequential_ns: u64,
    pub parallel_ns: u64,
    pub speedup: f64,
}

/// Benchmark naive against one Strassen level at each size.
///
/// The Strassen run uses the size itself as its threshold, so it recurses
/// exactly once and multiplies the quadrants naively. Odd sizes are skipped.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn find_crossover(sizes: &[usize], iterations: u32) -> Vec<CrossoverPoint> {
    sizes
        .iter()
        .filter(|&&n| n >= 2 && n % 2 == 0)
        .map(|&n| {
            let (a, b) = operands(n);
            let naive = bench_naive(&a, &b, iterations);
            let strassen = bench_strassen(&a, &b, StrassenMultiplier::new(n), iterations);
            tracing::debug!(
                size = n,
                naive = ?naive.median,
                strassen = ?strassen.median,
                "crossover sample"
            );
            CrossoverPoint {
                size: n,
                naive_ns: naive.median.as_nanos() as u64,
                strassen_ns: strassen.median.as_nanos() as u64,
                strassen_is_faster: strassen.median < naive.median,
            }
        })
        .collect()
}

/// Measure what parallel evaluation of the seven products buys at `size`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn measure_parallel_overhead(size: usize, threshold: usize, iterations: u32) -> ParallelOverhead {
    let (a, b) = operands(size);
    let sequential = bench_strassen(&a, &b, StrassenMultiplier::new(threshold), iterations);
    let parallel = bench_strassen(
        &a,
        &b,
        StrassenMultiplier::parallel(threshold, size),
        iterations,
    );

    let seq_ns = sequential.median.as_nanos() as u64;
    let par_ns = parallel.median.as_nanos() as u64;

    ParallelOverhead {
        size,
        sequential_ns: seq_ns,
        parallel_ns: par_ns,
        speedup: if par_ns > 0 {
            seq_ns as f64 / par_ns as f64
        } else {
            1.0
        },
    }
}

fn bench_naive(a: &Matrix, b: &Matrix, iterations: u32) -> BenchmarkResult {
    benchmark_detailed(1, iterations, || {
        let _ = std::hint::black_box(multiply_naive(a, b));
    })
    .with_name(format!("naive_{}", a.rows()))
}

fn bench_strassen(
    a: &Matrix,
    b: &Matrix,
    multiplier: StrassenMultiplier,
    iterations: u32,
) -> BenchmarkResult {
    benchmark_detailed(1, iterations, || {
        let _ = std::hint::black_box(multiplier.multiply(a, b));
    })
    .with_name(format!("strassen_{}", a.rows()))
}

/// Deterministic random operands of dimension `n`.
fn operands(n: usize) -> (Matrix, Matrix) {
    let mut rng = StdRng::seed_from_u64(0x5EED ^ n as u64);
    let a = Matrix::random(n, n, &mut rng, DEFAULT_RANDOM_UPPER).unwrap_or_else(|_| Matrix::new(n, n));
    let b = Matrix::random(n, n, &mut rng, DEFAULT_RANDOM_UPPER).unwrap_or_else(|_| Matrix::new(n, n));
    (a, b)
}
