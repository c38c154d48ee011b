//! Trade simulation: cost presets and profit/ROI projection

pub mod calculator;
pub mod presets;

pub use calculator::*;
pub use presets::*;
