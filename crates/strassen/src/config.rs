//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::Parser;

/// Strassen-rs: compare naive and Strassen integer matrix multiplication.
#[derive(Parser, Debug)]
#[command(name = "strassen", version, about)]
pub struct AppConfig {
    /// Dimension of the random square operands.
    #[arg(short = 'n', long, default_value = "256", env = "STRASSEN_SIZE")]
    pub size: usize,

    /// Strategy to use: naive, strassen, parallel, auto, or all.
    #[arg(long, default_value = "all")]
    pub algo: String,

    /// Crossover dimension below which Strassen falls back to naive (0 = default).
    #[arg(long, default_value = "0")]
    pub threshold: usize,

    /// Dimension at which the seven products run in parallel (0 = default).
    #[arg(long, default_value = "0")]
    pub parallel_threshold: usize,

    /// Exclusive upper bound for random entries (0 = default).
    #[arg(long, default_value = "0")]
    pub max_value: i32,

    /// Seed for the random operands.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the operands and the product.
    #[arg(short, long)]
    pub print: bool,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode (only output the product).
    #[arg(short, long)]
    pub quiet: bool,

    /// Write the product to a file.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Run full calibration.
    #[arg(long)]
    pub calibrate: bool,

    /// Run quick calibration.
    #[arg(long)]
    pub auto_calibrate: bool,

    /// Calibration profile to read thresholds from (and write to when calibrating).
    #[arg(long)]
    pub profile: Option<PathBuf>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
