//! Command-line parsing for the CSV linear-regression fitter.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the parsing/training code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "linfit",
    version,
    about = "Linear regression on numeric CSVs via batch gradient descent"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fit a linear model to a CSV and print coefficients + training MSE.
    Fit(FitArgs),
    /// Generate a synthetic linear CSV for experimentation.
    Sample(SampleArgs),
}

/// Options for fitting.
#[derive(Debug, Parser, Clone)]
pub struct FitArgs {
    /// Input CSV; the last column is the regression target.
    pub csv: PathBuf,

    /// Gradient-descent step size.
    #[arg(long, default_value_t = 0.01)]
    pub learning_rate: f64,

    /// Number of full-batch iterations.
    #[arg(long, default_value_t = 1000)]
    pub iterations: u32,

    /// Export per-row predictions/residuals to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export the fitted model to JSON.
    #[arg(long = "export-model")]
    pub export_model: Option<PathBuf>,
}

/// Options for synthetic sample generation.
#[derive(Debug, Parser)]
pub struct SampleArgs {
    /// Output CSV path.
    pub out: PathBuf,

    /// Number of data rows.
    #[arg(short = 'n', long, default_value_t = 100)]
    pub rows: usize,

    /// Number of feature columns.
    #[arg(long, default_value_t = 1)]
    pub features: usize,

    /// Random seed for reproducible samples.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Standard deviation of the Gaussian noise on the target.
    #[arg(long, default_value_t = 0.5)]
    pub noise: f64,

    /// Write a header line (x1,..,xN,y).
    #[arg(long)]
    pub header: bool,
}
