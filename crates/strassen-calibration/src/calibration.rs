//! Calibration engine.

use strassen_core::constants::MIN_CALIBRATION_SIZE;
use strassen_core::DEFAULT_PARALLEL_THRESHOLD;

use crate::microbench;
use crate::profile::{self, CalibrationProfile};

/// Mode of calibration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalibrationMode {
    /// Full calibration: wide size range, more iterations.
    Full,
    /// Quick calibration: a few sizes, few iterations.
    Quick,
}

impl CalibrationMode {
    fn sizes(self) -> Vec<usize> {
        let max_exp = match self {
            Self::Full => 9,
            Self::Quick => 7,
        };
        (3..=max_exp)
            .map(|exp| 1usize << exp)
            .filter(|&n| n >= MIN_CALIBRATION_SIZE)
            .collect()
    }

    fn iterations(self) -> u32 {
        match self {
            Self::Full => 5,
            Self::Quick => 2,
        }
    }
}

/// Progress callback for calibration.
pub type ProgressCallback = Box<dyn Fn(CalibrationProgress) + Send>;

/// Progress information during calibration.
#[derive(Debug, Clone)]
pub struct CalibrationProgress {
    /// Current step name.
    pub step: String,
    /// Current step number (1-based).
    pub current: usize,
    /// Total number of steps.
    pub total: usize,
}

/// Calibration engine that measures crossover thresholds.
pub struct CalibrationEngine {
    mode: CalibrationMode,
    progress_cb: Option<ProgressCallback>,
}

impl CalibrationEngine {
    /// Create a new calibration engine.
    #[must_use]
    pub fn new(mode: CalibrationMode) -> Self {
        Self {
            mode,
            progress_cb: None,
        }
    }

    /// Set a progress callback.
    #[must_use]
    pub fn with_progress(mut self, cb: ProgressCallback) -> Self {
        self.progress_cb = Some(cb);
        self
    }

    /// Run calibration and produce a profile.
    #[must_use]
    pub fn calibrate(&self) -> CalibrationProfile {
        let total_steps = 3;
        let sizes = self.mode.sizes();
        let iterations = self.mode.iterations();

        self.report_progress("Benchmarking naive vs Strassen", 1, total_steps);
        let crossovers = microbench::find_crossover(&sizes, iterations);
        let strassen_threshold = crossover_threshold(&crossovers, &sizes);

        self.report_progress("Measuring parallel overhead", 2, total_steps);
        let mut parallel_threshold = DEFAULT_PARALLEL_THRESHOLD.max(strassen_threshold);
        for &n in sizes.iter().filter(|&&n| n > strassen_threshold) {
            let overhead = microbench::measure_parallel_overhead(n, strassen_threshold, iterations);
            if overhead.speedup > 1.1 {
                parallel_threshold = n;
                break;
            }
        }

        self.report_progress("Building profile", 3, total_steps);
        let profile = CalibrationProfile {
            version: profile::PROFILE_VERSION,
            strassen_threshold,
            parallel_threshold,
            cpu_model: profile::cpu_model(),
            num_cores: profile::num_cpus(),
            timestamp: profile::current_timestamp(),
        };
        tracing::info!(
            mode = ?self.mode,
            strassen_threshold,
            parallel_threshold,
            "calibration complete"
        );
        profile
    }

    fn report_progress(&self, step: &str, current: usize, total: usize) {
        if let Some(cb) = &self.progress_cb {
            cb(CalibrationProgress {
                step: step.to_string(),
                current,
                total,
            });
        }
    }
}

/// Smallest size where one Strassen level beats naive, or twice the largest
/// measured size when Strassen never wins.
fn crossover_threshold(points: &[microbench::CrossoverPoint], sizes: &[usize]) -> usize {
    points
        .iter()
        .find(|p| p.strassen_is_faster)
        .map_or_else(
            || sizes.iter().max().map_or(MIN_CALIBRATION_SIZE, |&n| n * 2),
            |p| p.size,
        )
}
