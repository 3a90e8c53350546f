//! Error types.
//!
//! The core (loader + trainer) returns structured enums so library callers can
//! match on failure kinds. The application boundary converts those into an
//! `AppError` carrying the process exit code:
//!
//! - `2` — input/usage errors (unreadable or malformed CSV, bad export path)
//! - `3` — no usable data (empty dataset)
//! - `4` — training errors (invalid parameters)

use thiserror::Error;

/// Errors produced while loading a CSV dataset.
///
/// Any of these aborts the whole load; no partial dataset is ever returned.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened or read.
    #[error("i/o failure: {0}")]
    IoUnavailable(#[source] std::io::Error),

    /// A data line contained an empty field (e.g. `1,,3`). Columns are 1-based.
    #[error("line {line}: empty field in column {column}")]
    EmptyToken { line: usize, column: usize },

    /// A data line contained a field that does not fully parse as a number.
    #[error("line {line}: non-numeric field '{token}' in column {column}")]
    NonNumericToken {
        line: usize,
        column: usize,
        token: String,
    },

    /// A data row's width disagrees with the established column count.
    #[error("line {line}: expected {expected} columns, found {found}")]
    ColumnCountMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// No numeric data rows were found after header/blank-line handling.
    #[error("no numeric data rows found")]
    EmptyDataset,
}

/// Errors produced by the gradient-descent trainer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrainError {
    /// A training precondition was violated; the model was left untouched.
    #[error("invalid training parameters: {0}")]
    InvalidParameters(&'static str),
}

/// Application-level error: a message plus the process exit code.
#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

impl From<LoadError> for AppError {
    fn from(err: LoadError) -> Self {
        let code = match err {
            LoadError::EmptyDataset => 3,
            _ => 2,
        };
        AppError::new(code, format!("CSV load failed: {err}"))
    }
}

impl From<TrainError> for AppError {
    fn from(err: TrainError) -> Self {
        AppError::new(4, format!("Training failed: {err}"))
    }
}
