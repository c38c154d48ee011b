//! Aggregate figures shown by the dashboard summary views

use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use crate::errors::EngineError;
use super::ExecutionRisk;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RiskDistribution {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
    pub unknown: usize,
    pub total: usize,
    pub low_pct: Decimal,
    pub medium_pct: Decimal,
    pub high_pct: Decimal,
    pub unknown_pct: Decimal,
}

impl RiskDistribution {
    pub fn count(&self, risk: ExecutionRisk) -> usize {
        match risk {
            ExecutionRisk::Low => self.low,
            ExecutionRisk::Medium => self.medium,
            ExecutionRisk::High => self.high,
            ExecutionRisk::Unknown => self.unknown,
        }
    }

    pub fn percentage(&self, risk: ExecutionRisk) -> Decimal {
        match risk {
            ExecutionRisk::Low => self.low_pct,
            ExecutionRisk::Medium => self.medium_pct,
            ExecutionRisk::High => self.high_pct,
            ExecutionRisk::Unknown => self.unknown_pct,
        }
    }

    pub fn known(&self) -> usize {
        self.low + self.medium + self.high
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskPosture {
    Conservative,
    Balanced,
    Aggressive,
}

impl fmt::Display for RiskPosture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RiskPosture::Conservative => "Conservative",
            RiskPosture::Balanced => "Balanced",
            RiskPosture::Aggressive => "Aggressive",
        };
        f.write_str(label)
    }
}

/// Dashboard tab filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterCriterion {
    All,
    HighProfit,
    LowRisk,
    Active,
}

impl FromStr for FilterCriterion {
    type Err = EngineError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "all" => Ok(FilterCriterion::All),
            "high_profit" => Ok(FilterCriterion::HighProfit),
            "low_risk" => Ok(FilterCriterion::LowRisk),
            "active" => Ok(FilterCriterion::Active),
            other => Err(EngineError::configuration("filter criterion", other)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MarketOverview {
    pub total_volume: Decimal,
    pub average_liquidity: Decimal,
    pub highest_spread: Decimal,
    pub active_exchanges: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub total_opportunities: usize,
    pub active_opportunities: usize,
    pub average_spread: Decimal,
    pub average_confidence: Decimal,
    pub market: MarketOverview,
    pub risk: RiskDistribution,
    pub posture: RiskPosture,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionLine {
    pub opportunity_id: String,
    pub symbol: String,
    pub spread: Decimal,
    pub gross_profit: Decimal,
    pub estimated_costs: Decimal,
    pub net_profit: Decimal,
    pub risk: ExecutionRisk,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProfitProjection {
    pub capital: Decimal,
    pub total_net: Decimal,
    pub lines: Vec<ProjectionLine>,
}
