//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - runs the load/train/report pipeline
//! - generates synthetic samples
//! - writes optional exports

use clap::Parser;

use crate::cli::{Command, FitArgs, SampleArgs};
use crate::data::{SampleConfig, generate_sample};
use crate::domain::FitConfig;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `linfit` binary.
pub fn run() -> Result<(), AppError> {
    // We want `linfit data.csv` to behave like `linfit fit data.csv`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of
    // the argv list before parsing. This preserves a clean clap structure
    // while retaining the shorter invocation.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Fit(args) => handle_fit(args),
        Command::Sample(args) => handle_sample(args),
    }
}

fn handle_fit(args: FitArgs) -> Result<(), AppError> {
    let config = fit_config_from_args(&args);
    let run = pipeline::run_fit(&config)?;

    println!(
        "{}",
        crate::report::format_run_summary(&run.stats, &run.model, run.mse, &config)
    );

    // Optional exports.
    if let Some(path) = &config.export_results {
        crate::io::export::write_results_csv(path, &run.dataset, &run.predictions)?;
    }
    if let Some(path) = &config.export_model {
        crate::io::export::write_model_json(path, &run.model, run.mse, &config)?;
    }

    Ok(())
}

fn handle_sample(args: SampleArgs) -> Result<(), AppError> {
    let sample = generate_sample(&SampleConfig {
        rows: args.rows,
        features: args.features,
        seed: args.seed,
        noise: args.noise,
        header: args.header,
    })?;

    std::fs::write(&args.out, &sample.csv).map_err(|e| {
        AppError::new(
            2,
            format!("Failed to write sample CSV '{}': {e}", args.out.display()),
        )
    })?;

    println!(
        "Wrote {} rows x {} features to {} (true coefficients: {})",
        args.rows,
        args.features,
        args.out.display(),
        crate::report::format_parameters(&sample.coefficients),
    );

    Ok(())
}

pub fn fit_config_from_args(args: &FitArgs) -> FitConfig {
    FitConfig {
        csv_path: args.csv.clone(),
        learning_rate: args.learning_rate,
        iterations: args.iterations,
        export_results: args.export.clone(),
        export_model: args.export_model.clone(),
    }
}

/// Rewrite argv so `linfit <path>` defaults to `linfit fit <path>`.
///
/// Rules:
/// - `linfit`                       -> unchanged (clap prints usage)
/// - `linfit --help/--version/-h`   -> unchanged
/// - `linfit fit/sample ...`        -> unchanged
/// - `linfit data.csv ...`          -> `linfit fit data.csv ...`
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        return argv;
    };

    let is_top_level_help_or_version =
        matches!(arg1.as_str(), "-h" | "--help" | "-V" | "--version" | "help");
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "fit" | "sample");
    if is_subcommand {
        return argv;
    }

    if !arg1.starts_with('-') {
        argv.insert(1, "fit".to_string());
    }
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_path_is_rewritten_to_fit() {
        assert_eq!(
            rewrite_args(args(&["linfit", "data.csv"])),
            args(&["linfit", "fit", "data.csv"])
        );
    }

    #[test]
    fn explicit_subcommands_are_untouched() {
        assert_eq!(
            rewrite_args(args(&["linfit", "sample", "out.csv"])),
            args(&["linfit", "sample", "out.csv"])
        );
        assert_eq!(
            rewrite_args(args(&["linfit", "fit", "data.csv"])),
            args(&["linfit", "fit", "data.csv"])
        );
    }

    #[test]
    fn help_and_version_are_untouched() {
        assert_eq!(rewrite_args(args(&["linfit", "--help"])), args(&["linfit", "--help"]));
        assert_eq!(rewrite_args(args(&["linfit"])), args(&["linfit"]));
    }
}
