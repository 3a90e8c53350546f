//! Input/output helpers.
//!
//! - CSV field tokenization (`tokenizer`)
//! - row classification + numeric parsing (`parse`)
//! - dataset loading + validation (`loader`)
//! - result/model exports (`export`)

pub mod export;
pub mod loader;
pub mod parse;
pub mod tokenizer;

pub use export::*;
pub use loader::*;
pub use parse::*;
pub use tokenizer::*;
