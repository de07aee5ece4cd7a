//! Constants for multiplication thresholds and configuration.

/// Default crossover dimension below which Strassen falls back to naive multiplication.
pub const DEFAULT_STRASSEN_THRESHOLD: usize = 32;

/// Default dimension at which the seven Strassen products are computed in parallel.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 256;

/// Default exclusive upper bound for random fill values.
pub const DEFAULT_RANDOM_UPPER: i32 = 10;

/// Smallest dimension the calibration search will consider.
pub const MIN_CALIBRATION_SIZE: usize = 8;

/// Exit codes for the command-line front end.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Strategy results did not match during cross-validation.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}
