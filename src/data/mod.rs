//! Data generation.
//!
//! Synthetic linear CSV samples for experimentation and end-to-end testing.

pub mod sample;

pub use sample::*;
