//! Strassen-rs: naive vs Strassen matrix multiplication.

use std::process::ExitCode;

use strassen_lib::{app, config, errors, logging};

fn main() -> ExitCode {
    logging::init();

    let config = config::AppConfig::parse();
    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(u8::try_from(errors::exit_code(&err)).unwrap_or(1))
        }
    }
}
