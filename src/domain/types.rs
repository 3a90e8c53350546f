//! Shared domain types.
//!
//! These types are intentionally kept lightweight so they can be:
//!
//! - used in-memory during training
//! - exported to JSON/CSV
//! - constructed directly in tests without touching the filesystem

use std::path::PathBuf;

/// A rectangular numeric dataset loaded from CSV.
///
/// Storage is row-major in a single flat buffer; every row is `cols` wide.
/// The last column of each row is the regression target, all preceding
/// columns are features. Immutable after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    values: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Dataset {
    /// Build a dataset from row-major values.
    ///
    /// # Panics
    /// Panics if `cols == 0` or `values.len()` is not a multiple of `cols`.
    pub fn from_row_major(values: Vec<f64>, cols: usize) -> Self {
        assert!(cols > 0, "dataset must have at least one column");
        assert!(
            values.len() % cols == 0,
            "row-major buffer length must be a multiple of the column count"
        );
        let rows = values.len() / cols;
        Self { values, rows, cols }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of feature columns (everything except the trailing target).
    pub fn feature_count(&self) -> usize {
        self.cols - 1
    }

    /// Full row `i`, features followed by the target.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.values[i * self.cols..(i + 1) * self.cols]
    }

    /// Feature slice of row `i` (excludes the target column).
    pub fn features(&self, i: usize) -> &[f64] {
        &self.row(i)[..self.cols - 1]
    }

    /// Target value of row `i` (last column).
    pub fn target(&self, i: usize) -> f64 {
        self.row(i)[self.cols - 1]
    }

    /// Iterate rows in ascending index order.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> {
        self.values.chunks_exact(self.cols)
    }

    /// Summary statistics over the dataset (target range included).
    pub fn stats(&self) -> DatasetStats {
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for i in 0..self.rows {
            let y = self.target(i);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
        DatasetStats {
            rows: self.rows,
            cols: self.cols,
            y_min,
            y_max,
        }
    }
}

/// Summary stats about the rows actually used for fitting.
#[derive(Debug, Clone)]
pub struct DatasetStats {
    pub rows: usize,
    pub cols: usize,
    pub y_min: f64,
    pub y_max: f64,
}

/// Resolved configuration for a single `linfit fit` run.
#[derive(Debug, Clone)]
pub struct FitConfig {
    pub csv_path: PathBuf,
    pub learning_rate: f64,
    pub iterations: u32,
    pub export_results: Option<PathBuf>,
    pub export_model: Option<PathBuf>,
}
