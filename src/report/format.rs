//! String formatting for run summaries and parameter vectors.
//!
//! The core never prints; everything user-visible goes through these pure
//! functions so the app layer decides what reaches the terminal.

use crate::domain::{DatasetStats, FitConfig};
use crate::models::LinearModel;

/// Format a parameter vector as `[a, b, c]` with six decimal places.
pub fn format_parameters(parameters: &[f64]) -> String {
    let mut out = String::from("[");
    for (i, p) in parameters.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&format!("{p:.6}"));
    }
    out.push(']');
    out
}

/// Format the full run summary (dataset stats + learned model + error).
pub fn format_run_summary(
    stats: &DatasetStats,
    model: &LinearModel,
    mse: f64,
    config: &FitConfig,
) -> String {
    let mut out = String::new();

    out.push_str("=== linfit - Linear Regression (batch gradient descent) ===\n");
    out.push_str(&format!("Input: {}\n", config.csv_path.display()));
    out.push_str(&format!(
        "Data: rows={} | features={} | target=[{:.4}, {:.4}]\n",
        stats.rows,
        stats.cols - 1,
        stats.y_min,
        stats.y_max,
    ));
    out.push_str(&format!(
        "Training: learning_rate={} | iterations={}\n",
        config.learning_rate, config.iterations,
    ));
    out.push_str(&format!(
        "Final parameters: {}\n",
        format_parameters(model.parameters()),
    ));
    out.push_str(&format!("Training MSE: {mse:.6}"));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn parameters_render_with_six_decimals() {
        assert_eq!(format_parameters(&[2.0, -3.5]), "[2.000000, -3.500000]");
        assert_eq!(format_parameters(&[]), "[]");
    }

    #[test]
    fn run_summary_mentions_shape_and_error() {
        let stats = DatasetStats {
            rows: 20,
            cols: 2,
            y_min: 2.0,
            y_max: 59.0,
        };
        let mut model = LinearModel::new(1);
        model.parameters_mut().copy_from_slice(&[2.0, 3.0]);
        let config = FitConfig {
            csv_path: PathBuf::from("data.csv"),
            learning_rate: 0.01,
            iterations: 1000,
            export_results: None,
            export_model: None,
        };

        let summary = format_run_summary(&stats, &model, 0.25, &config);
        assert!(summary.contains("rows=20"));
        assert!(summary.contains("features=1"));
        assert!(summary.contains("[2.000000, 3.000000]"));
        assert!(summary.contains("Training MSE: 0.250000"));
    }
}
