//! Trade simulation inputs, outputs and the persisted envelope

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::errors::EngineError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    pub trade_amount: Decimal,
    pub buy_fee_percent: Decimal,
    pub sell_fee_percent: Decimal,
    pub slippage_percent: Decimal,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        let mut params = Self {
            trade_amount: dec!(1000),
            buy_fee_percent: Decimal::ZERO,
            sell_fee_percent: Decimal::ZERO,
            slippage_percent: Decimal::ZERO,
        };
        CostPreset::Standard.apply_to(&mut params);
        params
    }
}

impl SimulationParameters {
    pub fn new(trade_amount: Decimal) -> Self {
        Self {
            trade_amount,
            ..Self::default()
        }
    }

    pub fn with_preset(mut self, preset: CostPreset) -> Self {
        preset.apply_to(&mut self);
        self
    }
}

/// Named fee tiers. Fees are symmetric across both legs; slippage scales
/// with the tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostPreset {
    Low,
    Standard,
    High,
}

impl CostPreset {
    /// (fee percent per leg, slippage percent)
    pub fn costs(&self) -> (Decimal, Decimal) {
        match self {
            CostPreset::Low => (dec!(0.05), dec!(0.02)),
            CostPreset::Standard => (dec!(0.10), dec!(0.05)),
            CostPreset::High => (dec!(0.20), dec!(0.10)),
        }
    }

    /// Overwrites the fee and slippage fields only; `trade_amount` is kept.
    pub fn apply_to(&self, params: &mut SimulationParameters) {
        let (fee_percent, slippage_percent) = self.costs();
        params.buy_fee_percent = fee_percent;
        params.sell_fee_percent = fee_percent;
        params.slippage_percent = slippage_percent;
    }
}

impl FromStr for CostPreset {
    type Err = EngineError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "low" => Ok(CostPreset::Low),
            "standard" => Ok(CostPreset::Standard),
            "high" => Ok(CostPreset::High),
            other => Err(EngineError::configuration("cost preset", other)),
        }
    }
}

impl fmt::Display for CostPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CostPreset::Low => "low",
            CostPreset::Standard => "standard",
            CostPreset::High => "high",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub opportunity_id: String,
    pub trade_amount: Decimal,
    pub buy_fee_percent: Decimal,
    pub sell_fee_percent: Decimal,
    pub slippage_percent: Decimal,
    pub entry_price: Decimal,
    pub exit_price: Decimal,
    pub amount_in_base: Decimal,
    pub buy_fee: Decimal,
    pub sell_value: Decimal,
    pub sell_fee: Decimal,
    pub gross_profit: Decimal,
    pub trading_fees: Decimal,
    pub slippage_cost: Decimal,
    pub net_profit: Decimal,
    pub roi_percentage: Decimal,
}

impl SimulationResult {
    pub fn total_costs(&self) -> Decimal {
        self.trading_fees + self.slippage_cost
    }

    pub fn parameters(&self) -> SimulationParameters {
        SimulationParameters {
            trade_amount: self.trade_amount,
            buy_fee_percent: self.buy_fee_percent,
            sell_fee_percent: self.sell_fee_percent,
            slippage_percent: self.slippage_percent,
        }
    }

    pub fn is_profitable(&self) -> bool {
        self.net_profit > Decimal::ZERO
    }
}

/// Commentary produced by the text-generation service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advisory {
    pub recommendation: String,
    #[serde(default)]
    pub risk_factors: Vec<String>,
    #[serde(default)]
    pub success_probability: Option<Decimal>,
}

/// What gets handed to the record store after a simulation runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationRecord {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub result: SimulationResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advisory: Option<Advisory>,
}

impl SimulationRecord {
    pub fn new(result: SimulationResult) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            result,
            advisory: None,
        }
    }

    pub fn with_advisory(mut self, advisory: Advisory) -> Self {
        self.advisory = Some(advisory);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_standard_preset() {
        let params = SimulationParameters::default();
        assert_eq!(params.trade_amount, dec!(1000));
        assert_eq!(params.buy_fee_percent, dec!(0.1));
        assert_eq!(params.sell_fee_percent, dec!(0.1));
        assert_eq!(params.slippage_percent, dec!(0.05));
    }

    #[test]
    fn presets_leave_trade_amount_alone() {
        let mut params = SimulationParameters::new(dec!(2500));
        CostPreset::High.apply_to(&mut params);
        assert_eq!(params.trade_amount, dec!(2500));
        assert_eq!(params.buy_fee_percent, dec!(0.20));
        assert_eq!(params.sell_fee_percent, dec!(0.20));
        assert_eq!(params.slippage_percent, dec!(0.10));

        let params = params.with_preset(CostPreset::Low);
        assert_eq!(params.trade_amount, dec!(2500));
        assert_eq!(params.buy_fee_percent, dec!(0.05));
        assert_eq!(params.slippage_percent, dec!(0.02));
    }

    #[test]
    fn preset_names_round_trip_and_reject_unknown() {
        for preset in [CostPreset::Low, CostPreset::Standard, CostPreset::High] {
            assert_eq!(preset.to_string().parse::<CostPreset>(), Ok(preset));
        }
        assert!(matches!(
            "premium".parse::<CostPreset>(),
            Err(EngineError::Configuration { kind: "cost preset", .. })
        ));
    }

    #[test]
    fn record_serializes_flat_without_empty_advisory() {
        let result = SimulationResult {
            opportunity_id: "opp-1".to_string(),
            trade_amount: dec!(1000),
            buy_fee_percent: dec!(0.1),
            sell_fee_percent: dec!(0.1),
            slippage_percent: dec!(0.05),
            entry_price: dec!(100),
            exit_price: dec!(102),
            amount_in_base: dec!(10),
            buy_fee: dec!(1),
            sell_value: dec!(1020),
            sell_fee: dec!(1.02),
            gross_profit: dec!(20),
            trading_fees: dec!(2.02),
            slippage_cost: dec!(0.51),
            net_profit: dec!(17.47),
            roi_percentage: dec!(1.747),
        };
        assert_eq!(result.total_costs(), dec!(2.53));

        let record = SimulationRecord::new(result);
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["opportunity_id"], "opp-1");
        assert_eq!(value["net_profit"], "17.47");
        assert!(value.get("advisory").is_none());

        let advised = record.with_advisory(Advisory {
            recommendation: "MONITOR".to_string(),
            risk_factors: vec!["Withdrawal delays on the sell venue".to_string()],
            success_probability: Some(dec!(0.7)),
        });
        let value = serde_json::to_value(&advised).unwrap();
        assert_eq!(value["advisory"]["recommendation"], "MONITOR");
        // the computed figures are untouched by the commentary
        assert_eq!(advised.result.net_profit, dec!(17.47));
    }
}
