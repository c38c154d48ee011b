//! Core data types and structures

pub mod opportunity;
pub mod simulation;
pub mod metrics;

pub use opportunity::*;
pub use simulation::*;
pub use metrics::*;
