//! Opportunity metrics: aggregates, risk, ranking and projections
//!
//! All functions are pure and read their input slice without mutating it.

pub mod aggregates;
pub mod risk;
pub mod ranking;
pub mod projection;

pub use aggregates::*;
pub use risk::*;
pub use ranking::*;
pub use projection::*;

use crate::types::{DashboardSummary, OpportunityRecord};

pub fn summarize(records: &[OpportunityRecord]) -> DashboardSummary {
    let risk = risk_distribution(records);
    DashboardSummary {
        total_opportunities: records.len(),
        active_opportunities: active_count(records),
        average_spread: average_spread(records),
        average_confidence: average_confidence(records),
        market: market_overview(records),
        posture: overall_risk_label(&risk),
        risk,
    }
}
