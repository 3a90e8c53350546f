//! Linear regression model.
//!
//! The model is a plain parameter vector plus a prediction function, so the
//! trainer and reporting code can stay free of any model hierarchy.

pub mod linear;

pub use linear::*;
