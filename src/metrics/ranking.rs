//! Ranking and tab filters

use chrono::{DateTime, Utc};
use rust_decimal::prelude::*;
use tracing::debug;
use crate::{
    config::HIGH_PROFIT_SPREAD_PCT,
    errors::EngineResult,
    types::{ExecutionRisk, FilterCriterion, OpportunityRecord},
};

/// Highest stored spread first. The sort is stable, so equal spreads keep
/// their input order. The input is left untouched.
pub fn top_performers(records: &[OpportunityRecord], n: usize) -> Vec<OpportunityRecord> {
    let mut ranked = records.to_vec();
    ranked.sort_by(|a, b| b.spread().cmp(&a.spread()));
    ranked.truncate(n);
    ranked
}

/// `threshold` replaces the 2% cut-off of `HighProfit` and is ignored by
/// the other criteria.
pub fn filter_by(
    records: &[OpportunityRecord],
    criterion: FilterCriterion,
    threshold: Option<Decimal>,
) -> Vec<OpportunityRecord> {
    let min_spread = threshold.unwrap_or(HIGH_PROFIT_SPREAD_PCT);

    records
        .iter()
        .filter(|r| match criterion {
            FilterCriterion::All => true,
            FilterCriterion::HighProfit => r.spread() >= min_spread,
            FilterCriterion::LowRisk => r.risk() == ExecutionRisk::Low,
            FilterCriterion::Active => r.is_active(),
        })
        .cloned()
        .collect()
}

pub fn filter_by_criterion(
    records: &[OpportunityRecord],
    name: &str,
    threshold: Option<Decimal>,
) -> EngineResult<Vec<OpportunityRecord>> {
    let criterion: FilterCriterion = name.parse()?;
    let filtered = filter_by(records, criterion, threshold);
    debug!(criterion = name, kept = filtered.len(), of = records.len(), "Filtered opportunities");
    Ok(filtered)
}

/// Drops records whose expiry has passed; records without one are kept.
pub fn purge_expired(records: &[OpportunityRecord], now: DateTime<Utc>) -> Vec<OpportunityRecord> {
    records
        .iter()
        .filter(|r| !r.is_expired_at(now))
        .cloned()
        .collect()
}
