//! Engine constants and environment variable handling

use rust_decimal::prelude::*;
use rust_decimal_macros::dec;
use std::env;
use std::str::FromStr;

// Engine constants
pub const DEFAULT_CONFIDENCE_SCORE: Decimal = dec!(85);
pub const LIQUIDITY_DISPLAY_SCALE: Decimal = dec!(10); // 0-10 score -> 0-100 display
pub const HIGH_PROFIT_SPREAD_PCT: Decimal = dec!(2.0);
pub const DEFAULT_TOP_PERFORMERS: usize = 5;
pub const OPPORTUNITY_TTL_HOURS: i64 = 6;

// Projection Constants
pub const DEFAULT_PROJECTION_CAPITAL: Decimal = dec!(10000);
pub const PROJECTION_COST_RATIO: Decimal = dec!(0.20); // fees and slippage as a share of gross

// Runtime bounds
pub const MIN_TRADE_AMOUNT: Decimal = dec!(1);
pub const MAX_TRADE_AMOUNT: Decimal = dec!(1_000_000);
pub const MAX_TOP_PERFORMERS: usize = 50;
pub const DEFAULT_SAMPLE_SIZE: usize = 10;
pub const MAX_SAMPLE_SIZE: usize = 500;

#[derive(Debug, Clone)]
pub struct Config {
    pub opportunities_path: String,
    pub output_dir: String,
    // Simulation Configuration
    pub trade_amount: Decimal,
    pub cost_preset: String,
    // Dashboard Configuration
    pub dashboard_tab: String,
    pub high_profit_threshold: Option<Decimal>,
    pub top_performers: usize,
    pub projection_capital: Decimal,
    // Sample data
    pub use_sample_data: bool,
    pub sample_size: usize,
}

impl Config {
    pub fn load() -> Self {
        Self {
            opportunities_path: env::var("OPPORTUNITIES_PATH")
                .unwrap_or_else(|_| "data/opportunities.json".to_string()),
            output_dir: env::var("OUTPUT_DIR")
                .unwrap_or_else(|_| "output".to_string()),
            trade_amount: env::var("TRADE_AMOUNT")
                .ok()
                .and_then(|s| Decimal::from_str(&s).ok())
                .unwrap_or(dec!(1000))
                .max(MIN_TRADE_AMOUNT)
                .min(MAX_TRADE_AMOUNT),
            cost_preset: env::var("COST_PRESET")
                .unwrap_or_else(|_| "standard".to_string()),
            dashboard_tab: env::var("DASHBOARD_TAB")
                .unwrap_or_else(|_| "all".to_string()),
            high_profit_threshold: env::var("HIGH_PROFIT_THRESHOLD")
                .ok()
                .and_then(|s| Decimal::from_str(&s).ok()),
            top_performers: env::var("TOP_PERFORMERS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_TOP_PERFORMERS)
                .max(1)
                .min(MAX_TOP_PERFORMERS),
            projection_capital: env::var("PROJECTION_CAPITAL")
                .ok()
                .and_then(|s| Decimal::from_str(&s).ok())
                .unwrap_or(DEFAULT_PROJECTION_CAPITAL),
            use_sample_data: env::var("USE_SAMPLE_DATA")
                .unwrap_or_else(|_| "false".to_string())
                .parse()
                .unwrap_or(false),
            sample_size: env::var("SAMPLE_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_SAMPLE_SIZE)
                .min(MAX_SAMPLE_SIZE),
        }
    }
}
