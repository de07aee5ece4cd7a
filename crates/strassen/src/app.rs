//! Application entry point and dispatch.

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use strassen_calibration::calibration::CalibrationProgress;
use strassen_calibration::{
    io as profile_io, CalibrationEngine, CalibrationMode, CalibrationProfile,
};
use strassen_core::registry::DefaultFactory;
use strassen_core::{Matrix, Options};
use strassen_orchestration::interfaces::ResultPresenter;
use strassen_orchestration::{
    analyze_comparison_results, execute_multiplications, get_multipliers_to_run,
};

use crate::config::AppConfig;
use crate::output::write_to_file;
use crate::presenter::CliResultPresenter;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        clap_complete::generate(shell, &mut cmd, "strassen", &mut std::io::stdout());
        return Ok(());
    }

    if config.calibrate || config.auto_calibrate {
        return run_calibration(config);
    }

    run_cli(config)
}

/// Profile named by `--profile`, or the one saved at the standard location.
pub fn resolve_profile(config: &AppConfig) -> Option<CalibrationProfile> {
    match &config.profile {
        Some(path) => {
            let profile = profile_io::load_validated(path);
            if profile.is_none() {
                tracing::warn!(path = %path.display(), "ignoring unusable calibration profile");
            }
            profile
        }
        None => profile_io::load_profile(),
    }
}

/// Build multiplication options: defaults, then the profile, then explicit flags.
pub fn build_options(config: &AppConfig, profile: Option<&CalibrationProfile>) -> Options {
    let mut opts = Options::default();
    if let Some(profile) = profile {
        opts = profile.apply_to(opts);
    }

    if config.threshold != 0 {
        opts.strassen_threshold = config.threshold;
    }
    if config.parallel_threshold != 0 {
        opts.parallel_threshold = config.parallel_threshold;
    }
    if config.max_value != 0 {
        opts.random_upper = config.max_value;
    }
    opts.normalize()
}

fn run_cli(config: &AppConfig) -> Result<()> {
    let opts = build_options(config, resolve_profile(config).as_ref());
    tracing::debug!(?opts, size = config.size, "resolved options");

    let factory = DefaultFactory::new(opts);
    let multipliers = get_multipliers_to_run(&config.algo, &factory)?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let a = Matrix::random(config.size, config.size, &mut rng, opts.random_upper)?;
    let b = Matrix::random(config.size, config.size, &mut rng, opts.random_upper)?;

    let presenter = CliResultPresenter::new(config.verbose, config.quiet, config.print);
    presenter.present_operands(&a, &b);

    let results = execute_multiplications(&multipliers, &a, &b);

    for result in &results {
        match &result.outcome {
            Ok(product) => presenter.present_result(&result.strategy, product, result.duration),
            Err(e) => presenter.present_error(&format!("{}: {e}", result.strategy)),
        }
        if config.quiet && result.is_ok() {
            break;
        }
    }

    if results.len() > 1 {
        presenter.present_comparison(&results);
    }
    analyze_comparison_results(&results)?;

    if let Some(path) = &config.output {
        if let Some(Ok(product)) = results.iter().map(|r| r.outcome.as_ref()).find(Result::is_ok) {
            write_to_file(path, product)
                .with_context(|| format!("writing product to {}", path.display()))?;
        }
    }

    Ok(())
}

fn run_calibration(config: &AppConfig) -> Result<()> {
    let mode = if config.calibrate {
        CalibrationMode::Full
    } else {
        CalibrationMode::Quick
    };

    let quiet = config.quiet;
    let report = move |p: CalibrationProgress| {
        if !quiet {
            println!("[{}/{}] {}", p.current, p.total, p.step);
        }
    };
    let engine = CalibrationEngine::new(mode).with_progress(Box::new(report));
    let profile = engine.calibrate();

    if !config.quiet {
        println!("Calibration complete:");
        println!("  Strassen threshold: {}", profile.strassen_threshold);
        println!("  Parallel threshold: {}", profile.parallel_threshold);
    }

    let path = match &config.profile {
        Some(path) => {
            profile_io::save_to_path(&profile, path)?;
            path.clone()
        }
        None => profile_io::save_profile(&profile)?,
    };
    if !config.quiet {
        println!("Profile saved to {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("strassen").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn options_default_when_flags_absent() {
        assert_eq!(build_options(&parse(&[]), None), Options::default());
    }

    #[test]
    fn flags_override_defaults() {
        let opts = build_options(&parse(&["--threshold", "8", "--max-value", "3"]), None);
        assert_eq!(opts.strassen_threshold, 8);
        assert_eq!(opts.random_upper, 3);
    }

    #[test]
    fn profile_then_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        let profile = CalibrationProfile {
            strassen_threshold: 64,
            parallel_threshold: 512,
            ..CalibrationProfile::default()
        };
        profile_io::save_to_path(&profile, &path).unwrap();
        let path_str = path.to_str().unwrap();

        let config = parse(&["--profile", path_str]);
        let loaded = resolve_profile(&config);
        assert_eq!(loaded.as_ref(), Some(&profile));
        let opts = build_options(&config, loaded.as_ref());
        assert_eq!(opts.strassen_threshold, 64);
        assert_eq!(opts.parallel_threshold, 512);

        let opts = build_options(&parse(&["--threshold", "16"]), Some(&profile));
        assert_eq!(opts.strassen_threshold, 16);
        assert_eq!(opts.parallel_threshold, 512);
    }

    #[test]
    fn flag_threshold_above_profile_parallel_threshold() {
        let profile = CalibrationProfile {
            strassen_threshold: 64,
            parallel_threshold: 512,
            ..CalibrationProfile::default()
        };
        let opts = build_options(&parse(&["--threshold", "1024"]), Some(&profile));
        assert_eq!(opts.strassen_threshold, 1024);
        assert_eq!(opts.parallel_threshold, 1024);
    }

    #[test]
    fn unusable_profile_path_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let config = parse(&["--profile", path.to_str().unwrap()]);
        assert!(resolve_profile(&config).is_none());
    }

    #[test]
    fn run_small_comparison() {
        let config = parse(&["-n", "16", "--threshold", "4", "--seed", "1", "-q"]);
        assert!(run(&config).is_ok());
    }

    #[test]
    fn unknown_algo_is_config_error() {
        let config = parse(&["-n", "4", "--algo", "bogus"]);
        let err = run(&config).unwrap_err();
        assert_eq!(crate::errors::exit_code(&err), 4);
    }
}
