//! Error types shared by the metrics and simulation engines

pub mod engine_error;

pub use engine_error::*;
