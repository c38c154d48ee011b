//! Capital projection across the best active opportunities

use rust_decimal::prelude::*;
use rust_decimal_macros::dec;
use crate::{
    config::PROJECTION_COST_RATIO,
    types::{OpportunityRecord, ProfitProjection, ProjectionLine},
    utils::saturating_sum,
};
use super::top_performers;

/// Estimates what `capital` would earn on each of the `n` widest active
/// spreads, writing off a flat 20% of gross for fees and slippage.
pub fn project_profit(records: &[OpportunityRecord], capital: Decimal, n: usize) -> ProfitProjection {
    let active: Vec<OpportunityRecord> = records.iter().filter(|r| r.is_active()).cloned().collect();

    let lines: Vec<ProjectionLine> = top_performers(&active, n)
        .into_iter()
        .map(|opp| {
            let gross_profit = capital.saturating_mul(opp.spread()) / dec!(100);
            let estimated_costs = gross_profit * PROJECTION_COST_RATIO;
            ProjectionLine {
                risk: opp.risk(),
                spread: opp.spread(),
                net_profit: gross_profit - estimated_costs,
                gross_profit,
                estimated_costs,
                opportunity_id: opp.id,
                symbol: opp.symbol,
            }
        })
        .collect();

    ProfitProjection {
        capital,
        total_net: saturating_sum(lines.iter().map(|l| l.net_profit)),
        lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_PROJECTION_CAPITAL;

    fn record(id: &str, spread: Decimal) -> OpportunityRecord {
        OpportunityRecord::new(id, "BTC/USDT", "Binance", "Kraken", dec!(100), dec!(101)).with_spread(Some(spread))
    }

    #[test]
    fn projects_only_active_records() {
        let records = vec![
            record("a", dec!(2.5)),
            record("b", dec!(4.0)).with_status("expired"),
            record("c", dec!(1.0)),
        ];
        let projection = project_profit(&records, DEFAULT_PROJECTION_CAPITAL, 5);

        assert_eq!(projection.lines.len(), 2);
        assert_eq!(projection.lines[0].opportunity_id, "a");
        assert_eq!(projection.lines[0].gross_profit, dec!(250));
        assert_eq!(projection.lines[0].estimated_costs, dec!(50));
        assert_eq!(projection.lines[0].net_profit, dec!(200));
        assert_eq!(projection.lines[1].net_profit, dec!(80));
        assert_eq!(projection.total_net, dec!(280));
    }

    #[test]
    fn empty_projection() {
        let projection = project_profit(&[], dec!(10000), 5);
        assert!(projection.lines.is_empty());
        assert_eq!(projection.total_net, dec!(0));
        assert_eq!(projection.capital, dec!(10000));
    }
}
