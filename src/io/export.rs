//! Export fitted results to CSV and models to JSON.
//!
//! The CSV export is meant to be easy to consume in spreadsheets or
//! downstream scripts. The model JSON is the "portable" representation of a
//! fit: parameters plus the run settings that produced them.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{Dataset, FitConfig};
use crate::error::AppError;
use crate::models::LinearModel;

/// Portable representation of a fitted model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelFile {
    pub tool: String,
    pub learning_rate: f64,
    pub iterations: u32,
    pub feature_count: usize,
    pub model: LinearModel,
    pub training_mse: f64,
}

/// Write per-row predictions and residuals to a CSV file.
pub fn write_results_csv(
    path: &Path,
    data: &Dataset,
    predictions: &[f64],
) -> Result<(), AppError> {
    let mut file = File::create(path).map_err(|e| {
        AppError::new(
            2,
            format!("Failed to create export CSV '{}': {e}", path.display()),
        )
    })?;

    writeln!(file, "row,prediction,target,residual")
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV header: {e}")))?;

    for (i, prediction) in predictions.iter().enumerate() {
        let target = data.target(i);
        writeln!(
            file,
            "{},{:.10},{:.10},{:.10}",
            i,
            prediction,
            target,
            prediction - target,
        )
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV row: {e}")))?;
    }

    Ok(())
}

/// Write a fitted model as JSON.
pub fn write_model_json(
    path: &Path,
    model: &LinearModel,
    mse: f64,
    config: &FitConfig,
) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::new(
            2,
            format!("Failed to create model JSON '{}': {e}", path.display()),
        )
    })?;

    let out = ModelFile {
        tool: "linfit".to_string(),
        learning_rate: config.learning_rate,
        iterations: config.iterations,
        feature_count: model.parameter_count() - 1,
        model: model.clone(),
        training_mse: mse,
    };

    serde_json::to_writer_pretty(file, &out)
        .map_err(|e| AppError::new(2, format!("Failed to write model JSON: {e}")))?;

    Ok(())
}
