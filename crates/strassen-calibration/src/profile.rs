//! Calibration profile (serializable).

use serde::{Deserialize, Serialize};

use strassen_core::{Options, DEFAULT_PARALLEL_THRESHOLD, DEFAULT_STRASSEN_THRESHOLD};

/// Current profile format version.
pub const PROFILE_VERSION: u32 = 1;

/// Calibration profile containing measured thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalibrationProfile {
    /// Profile format version for compatibility checking.
    pub version: u32,
    /// Crossover dimension for Strassen.
    pub strassen_threshold: usize,
    /// Dimension at which the seven products run in parallel.
    pub parallel_threshold: usize,
    /// CPU model used for calibration.
    pub cpu_model: String,
    /// Number of CPU cores.
    pub num_cores: usize,
    /// Calibration timestamp.
    pub timestamp: String,
}

impl Default for CalibrationProfile {
    fn default() -> Self {
        Self {
            version: PROFILE_VERSION,
            strassen_threshold: DEFAULT_STRASSEN_THRESHOLD,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            cpu_model: String::new(),
            num_cores: num_cpus(),
            timestamp: String::new(),
        }
    }
}

impl CalibrationProfile {
    /// Check if this profile is compatible with the current version.
    #[must_use]
    pub fn is_compatible(&self) -> bool {
        self.version == PROFILE_VERSION
    }

    /// Validate that thresholds are usable.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.strassen_threshold >= 2 && self.parallel_threshold >= self.strassen_threshold
    }

    /// Apply the profile's thresholds on top of `base`.
    #[must_use]
    pub fn apply_to(&self, base: Options) -> Options {
        base.with_strassen_threshold(self.strassen_threshold)
            .with_parallel_threshold(self.parallel_threshold)
    }
}

pub(crate) fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(std::num::NonZero::get)
        .unwrap_or(4)
}

/// Get the current CPU model string.
#[must_use]
pub fn cpu_model() -> String {
    use sysinfo::System;
    let sys = System::new_all();
    sys.cpus()
        .first()
        .map(|cpu| cpu.brand().to_string())
        .unwrap_or_default()
}

/// Get the current timestamp as seconds since the Unix epoch.
#[must_use]
pub fn current_timestamp() -> String {
    let dur = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    format!("unix:{}", dur.as_secs())
}
