//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the loaded numeric matrix (`Dataset`) and its summary (`DatasetStats`)
//! - the resolved run configuration (`FitConfig`)

pub mod types;

pub use types::*;
