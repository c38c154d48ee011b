//! Property tests for the metrics and simulation engines

use arb_economics::{
    metrics::{average_spread, risk_distribution, top_performers},
    simulate, ExecutionRisk, OpportunityRecord, SimulationParameters,
};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn record(idx: usize, spread: Option<Decimal>, risk: Option<ExecutionRisk>) -> OpportunityRecord {
    let mut record = OpportunityRecord::new(idx.to_string(), "BTC/USDT", "Binance", "Kraken", dec!(100), dec!(101))
        .with_spread(spread);
    record.execution_risk = risk;
    record
}

fn spread_strategy() -> impl Strategy<Value = Option<Decimal>> {
    prop::option::of((-500i64..1000).prop_map(|bps| Decimal::new(bps, 2)))
}

fn risk_strategy() -> impl Strategy<Value = Option<ExecutionRisk>> {
    prop::option::of(prop_oneof![
        Just(ExecutionRisk::Low),
        Just(ExecutionRisk::Medium),
        Just(ExecutionRisk::High),
        Just(ExecutionRisk::Unknown),
    ])
}

proptest! {
    #[test]
    fn prop_average_spread_within_band(spreads in prop::collection::vec(spread_strategy(), 1..40)) {
        let records: Vec<_> = spreads.iter().enumerate().map(|(i, s)| record(i, *s, None)).collect();
        let values: Vec<Decimal> = spreads.iter().map(|s| s.unwrap_or(Decimal::ZERO)).collect();
        let min = values.iter().copied().min().unwrap();
        let max = values.iter().copied().max().unwrap();

        let avg = average_spread(&records);
        prop_assert!(avg >= min && avg <= max, "avg {} outside [{}, {}]", avg, min, max);
    }
}

proptest! {
    #[test]
    fn prop_top_performers_sorted_and_stable(
        // few distinct values so ties are common
        spreads in prop::collection::vec(prop::option::of(0i64..4).prop_map(|s| s.map(Decimal::from)), 0..30),
        n in 0usize..35
    ) {
        let records: Vec<_> = spreads.iter().enumerate().map(|(i, s)| record(i, *s, None)).collect();
        let top = top_performers(&records, n);

        prop_assert_eq!(top.len(), n.min(records.len()));
        for pair in top.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(a.spread() >= b.spread());
            if a.spread() == b.spread() {
                let ia: usize = a.id.parse().unwrap();
                let ib: usize = b.id.parse().unwrap();
                prop_assert!(ia < ib);
            }
        }
        // input untouched
        for (i, r) in records.iter().enumerate() {
            prop_assert_eq!(r.id.clone(), i.to_string());
        }
    }
}

proptest! {
    #[test]
    fn prop_risk_counts_cover_every_record(risks in prop::collection::vec(risk_strategy(), 0..50)) {
        let records: Vec<_> = risks.iter().enumerate().map(|(i, r)| record(i, None, *r)).collect();
        let dist = risk_distribution(&records);

        prop_assert_eq!(dist.low + dist.medium + dist.high + dist.unknown, records.len());
        prop_assert_eq!(dist.total, records.len());

        let pct_sum = dist.low_pct + dist.medium_pct + dist.high_pct + dist.unknown_pct;
        if records.is_empty() {
            prop_assert_eq!(pct_sum, Decimal::ZERO);
        } else {
            prop_assert!((pct_sum - dec!(100)).abs() < dec!(0.0000001));
        }
    }
}

proptest! {
    #[test]
    fn prop_simulation_identities_hold(
        buy_cents in 1i64..10_000_000,
        sell_cents in 1i64..10_000_000,
        trade_cents in 1i64..100_000_000,
        buy_fee_bps in 0i64..100,
        sell_fee_bps in 0i64..100,
        slippage_bps in 0i64..100,
    ) {
        let opportunity = OpportunityRecord::new(
            "p",
            "ETH/USDT",
            "Kraken",
            "Binance",
            Decimal::new(buy_cents, 2),
            Decimal::new(sell_cents, 2),
        );
        let params = SimulationParameters {
            trade_amount: Decimal::new(trade_cents, 2),
            buy_fee_percent: Decimal::new(buy_fee_bps, 2),
            sell_fee_percent: Decimal::new(sell_fee_bps, 2),
            slippage_percent: Decimal::new(slippage_bps, 2),
        };

        let result = simulate(&opportunity, &params).unwrap();
        prop_assert_eq!(result.net_profit, result.gross_profit - result.trading_fees - result.slippage_cost);
        prop_assert_eq!(result.roi_percentage, result.net_profit / result.trade_amount * dec!(100));
        prop_assert_eq!(result.trading_fees, result.buy_fee + result.sell_fee);
        prop_assert_eq!(result.parameters(), params);

        let again = simulate(&opportunity, &params).unwrap();
        prop_assert_eq!(result, again);
    }
}
