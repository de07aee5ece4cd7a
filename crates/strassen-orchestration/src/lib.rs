//! # strassen-orchestration
//!
//! Strategy selection, parallel execution, and result analysis.

pub mod interfaces;
pub mod orchestrator;
pub mod strategy_selection;

pub use interfaces::{MultiplicationResult, ResultPresenter};
pub use orchestrator::{analyze_comparison_results, execute_multiplications};
pub use strategy_selection::get_multipliers_to_run;
