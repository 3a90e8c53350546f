//! Model training.
//!
//! Responsibilities:
//!
//! - validate training preconditions before touching the model
//! - run fixed-iteration full-batch gradient descent

pub mod gradient;

pub use gradient::*;
