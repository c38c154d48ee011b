//! Input validation shared by the engines

pub mod inputs;

pub use inputs::*;
