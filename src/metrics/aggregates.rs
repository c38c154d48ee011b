//! Market-wide aggregates over a set of opportunities
//!
//! Every figure has a safe default for empty input so the dashboard always
//! has a number to show. Sums pin at the `Decimal` bounds rather than
//! overflowing.

use rust_decimal::prelude::*;
use std::collections::HashSet;
use crate::{
    config::LIQUIDITY_DISPLAY_SCALE,
    types::{MarketOverview, OpportunityRecord},
    utils::{mean_or, saturating_sum},
};

pub fn average_spread(records: &[OpportunityRecord]) -> Decimal {
    let sum = saturating_sum(records.iter().map(OpportunityRecord::spread));
    mean_or(sum, records.len(), Decimal::ZERO)
}

pub fn highest_spread(records: &[OpportunityRecord]) -> Decimal {
    records
        .iter()
        .map(OpportunityRecord::spread)
        .max()
        .unwrap_or(Decimal::ZERO)
}

pub fn total_volume(records: &[OpportunityRecord]) -> Decimal {
    saturating_sum(records.iter().map(OpportunityRecord::volume))
}

/// Mean liquidity score rescaled from 0-10 to 0-100.
pub fn average_liquidity(records: &[OpportunityRecord]) -> Decimal {
    let sum = saturating_sum(records.iter().map(OpportunityRecord::liquidity));
    mean_or(sum, records.len(), Decimal::ZERO).saturating_mul(LIQUIDITY_DISPLAY_SCALE)
}

/// Distinct venues across both legs, exact (case-sensitive) match.
pub fn active_exchange_count(records: &[OpportunityRecord]) -> usize {
    records
        .iter()
        .flat_map(|r| r.exchanges())
        .collect::<HashSet<&str>>()
        .len()
}

pub fn active_count(records: &[OpportunityRecord]) -> usize {
    records.iter().filter(|r| r.is_active()).count()
}

pub fn market_overview(records: &[OpportunityRecord]) -> MarketOverview {
    MarketOverview {
        total_volume: total_volume(records),
        average_liquidity: average_liquidity(records),
        highest_spread: highest_spread(records),
        active_exchanges: active_exchange_count(records),
    }
}
