//! Shared "fit pipeline" logic used by the CLI front-end.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! CSV load -> model creation -> gradient descent -> predictions -> MSE
//!
//! The CLI can then focus on presentation (printing and exports).

use crate::domain::{Dataset, DatasetStats, FitConfig};
use crate::error::{AppError, LoadError};
use crate::io::loader;
use crate::math::mean_squared_error;
use crate::models::LinearModel;

/// All computed outputs of a single `linfit fit` run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub dataset: Dataset,
    pub stats: DatasetStats,
    pub model: LinearModel,
    pub predictions: Vec<f64>,
    pub mse: f64,
}

/// Execute the full fitting pipeline and return the computed outputs.
pub fn run_fit(config: &FitConfig) -> Result<RunOutput, AppError> {
    // 1) Load and validate the CSV.
    let dataset = loader::load(&config.csv_path).map_err(|err| match err {
        LoadError::IoUnavailable(e) => AppError::new(
            2,
            format!("Failed to read CSV '{}': {e}", config.csv_path.display()),
        ),
        other => AppError::from(other),
    })?;

    // 2) Train a zero-initialized model.
    let mut model = LinearModel::new(dataset.feature_count());
    crate::fit::train(&mut model, &dataset, config.learning_rate, config.iterations)?;

    // 3) Compute training-set predictions and error.
    let predictions: Vec<f64> = (0..dataset.rows())
        .map(|i| model.predict(dataset.features(i)))
        .collect();
    let targets: Vec<f64> = (0..dataset.rows()).map(|i| dataset.target(i)).collect();
    let mse = mean_squared_error(&predictions, &targets);

    let stats = dataset.stats();

    Ok(RunOutput {
        dataset,
        stats,
        model,
        predictions,
        mse,
    })
}
