//! Mathematical utilities: regression metrics.

pub mod metrics;

pub use metrics::*;
