//! Arbitrage trade-economics engine
//!
//! Aggregates, ranks and filters cross-exchange arbitrage opportunity
//! records for dashboard views, and projects the fees, slippage, net profit
//! and ROI of a hypothetical trade on a single opportunity.

pub mod config;
pub mod types;
pub mod errors;
pub mod validation;
pub mod metrics;
pub mod simulation;
pub mod utils;
pub mod storage;

// Re-export commonly used items
pub use config::{Config, CONFIG};
pub use errors::{EngineError, EngineResult};
pub use metrics::summarize;
pub use simulation::simulate;
pub use types::*;
