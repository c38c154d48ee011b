//! Synthetic opportunity generator for tests and demo runs.
//!
//! Stands in for the external refresh cycle; the numbers are random and
//! carry no market meaning.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use rand::seq::IndexedRandom;
use rust_decimal::prelude::*;
use rust_decimal_macros::dec;
use crate::{
    config::OPPORTUNITY_TTL_HOURS,
    types::{ExecutionRisk, OpportunityRecord},
};

const PAIRS: [(&str, Decimal); 6] = [
    ("BTC/USDT", dec!(64000)),
    ("ETH/USDT", dec!(3100)),
    ("SOL/USDT", dec!(145)),
    ("XRP/USDT", dec!(0.52)),
    ("ADA/USDT", dec!(0.45)),
    ("DOGE/USDT", dec!(0.13)),
];

const EXCHANGES: [&str; 5] = ["Binance", "Kraken", "KuCoin", "Coinbase", "OKX"];

const RISKS: [ExecutionRisk; 3] = [ExecutionRisk::Low, ExecutionRisk::Medium, ExecutionRisk::High];

/// Active records with spreads between 0.8% and 4.2%, expiring
/// `OPPORTUNITY_TTL_HOURS` after `now`.
pub fn sample_opportunities<R: Rng>(
    rng: &mut R,
    count: usize,
    now: DateTime<Utc>,
) -> Vec<OpportunityRecord> {
    (0..count)
        .map(|i| {
            let (symbol, reference) = PAIRS[rng.random_range(0..PAIRS.len())];

            let buy_idx = rng.random_range(0..EXCHANGES.len());
            let sell_idx = (buy_idx + rng.random_range(1..EXCHANGES.len())) % EXCHANGES.len();

            // +/- 2% around the reference price
            let drift = Decimal::new(rng.random_range(-200..=200), 4);
            let buy_price = (reference * (dec!(1) + drift)).round_dp(6);
            let spread_pct = Decimal::new(rng.random_range(80..=420), 2);
            let sell_price = (buy_price * (dec!(1) + spread_pct / dec!(100))).round_dp(6);

            let risk = *RISKS.choose(&mut *rng).unwrap_or(&ExecutionRisk::Medium);

            OpportunityRecord::new(
                format!("sample-{}", i + 1),
                symbol,
                EXCHANGES[buy_idx],
                EXCHANGES[sell_idx],
                buy_price,
                sell_price,
            )
            .with_volume(Decimal::from(rng.random_range(50_000u32..=5_000_000)))
            .with_liquidity(Decimal::new(rng.random_range(30..=100), 1))
            .with_confidence(Decimal::from(rng.random_range(60u32..=98)))
            .with_risk(risk)
            .with_expiry(now + Duration::hours(OPPORTUNITY_TTL_HOURS))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn samples_are_active_and_well_formed() {
        let mut rng = StdRng::seed_from_u64(7);
        let now = Utc::now();
        let records = sample_opportunities(&mut rng, 50, now);

        assert_eq!(records.len(), 50);
        for record in &records {
            assert!(record.is_active());
            assert_ne!(record.buy_exchange, record.sell_exchange);
            assert!(record.buy_price > dec!(0));
            assert!(record.sell_price > record.buy_price);
            assert!(record.spread() > dec!(0.7) && record.spread() < dec!(4.3));
            assert_ne!(record.risk(), ExecutionRisk::Unknown);
            assert!(!record.is_expired_at(now));
            assert!(record.is_expired_at(now + Duration::hours(OPPORTUNITY_TTL_HOURS)));
        }
    }
}
