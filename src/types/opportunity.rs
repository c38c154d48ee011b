//! Arbitrage opportunity records as supplied by the record store

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use crate::config::DEFAULT_CONFIDENCE_SCORE;

pub const STATUS_ACTIVE: &str = "active";

/// Coarse execution risk bucket attached upstream.
///
/// Anything other than the three known labels, including non-string JSON,
/// lands in `Unknown`, so a malformed record never fails to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "serde_json::Value", into = "String")]
pub enum ExecutionRisk {
    Low,
    Medium,
    High,
    Unknown,
}

impl ExecutionRisk {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionRisk::Low => "low",
            ExecutionRisk::Medium => "medium",
            ExecutionRisk::High => "high",
            ExecutionRisk::Unknown => "unknown",
        }
    }
}

impl From<&str> for ExecutionRisk {
    fn from(label: &str) -> Self {
        match label {
            "low" => ExecutionRisk::Low,
            "medium" => ExecutionRisk::Medium,
            "high" => ExecutionRisk::High,
            _ => ExecutionRisk::Unknown,
        }
    }
}

impl From<String> for ExecutionRisk {
    fn from(label: String) -> Self {
        ExecutionRisk::from(label.as_str())
    }
}

impl From<serde_json::Value> for ExecutionRisk {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(label) => ExecutionRisk::from(label),
            _ => ExecutionRisk::Unknown,
        }
    }
}

impl From<ExecutionRisk> for String {
    fn from(risk: ExecutionRisk) -> Self {
        risk.as_str().to_string()
    }
}

impl fmt::Display for ExecutionRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpportunityRecord {
    pub id: String,
    pub symbol: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub base_asset: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub quote_asset: String,
    pub buy_exchange: String,
    pub sell_exchange: String,
    pub buy_price: Decimal,
    pub sell_price: Decimal,
    #[serde(default)]
    pub spread_percentage: Option<Decimal>,
    #[serde(default)]
    pub spread_amount: Option<Decimal>,
    #[serde(default)]
    pub volume_24h: Option<Decimal>,
    #[serde(default)]
    pub liquidity_score: Option<Decimal>,
    #[serde(default)]
    pub execution_risk: Option<ExecutionRisk>,
    #[serde(default)]
    pub confidence_score: Option<Decimal>,
    #[serde(default)]
    pub profit_potential: Option<Decimal>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

impl OpportunityRecord {
    /// Builds an active record with the spread fields derived from the two
    /// prices, the way the refresh cycle stores them.
    pub fn new(
        id: impl Into<String>,
        symbol: &str,
        buy_exchange: &str,
        sell_exchange: &str,
        buy_price: Decimal,
        sell_price: Decimal,
    ) -> Self {
        let (base_asset, quote_asset) = symbol
            .split_once('/')
            .map(|(b, q)| (b.to_string(), q.to_string()))
            .unwrap_or_else(|| (symbol.to_string(), String::new()));

        let spread_amount = sell_price.checked_sub(buy_price);
        let spread_percentage = match spread_amount {
            Some(amount) if buy_price > Decimal::ZERO => amount
                .checked_div(buy_price)
                .and_then(|ratio| ratio.checked_mul(dec!(100))),
            _ => None,
        };

        Self {
            id: id.into(),
            symbol: symbol.to_string(),
            base_asset,
            quote_asset,
            buy_exchange: buy_exchange.to_string(),
            sell_exchange: sell_exchange.to_string(),
            buy_price,
            sell_price,
            spread_percentage,
            spread_amount,
            volume_24h: None,
            liquidity_score: None,
            execution_risk: None,
            confidence_score: None,
            profit_potential: None,
            status: STATUS_ACTIVE.to_string(),
            expires_at: None,
        }
    }

    pub fn with_spread(mut self, spread_percentage: Option<Decimal>) -> Self {
        self.spread_percentage = spread_percentage;
        self
    }

    pub fn with_volume(mut self, volume_24h: Decimal) -> Self {
        self.volume_24h = Some(volume_24h);
        self
    }

    pub fn with_liquidity(mut self, liquidity_score: Decimal) -> Self {
        self.liquidity_score = Some(liquidity_score);
        self
    }

    pub fn with_risk(mut self, risk: ExecutionRisk) -> Self {
        self.execution_risk = Some(risk);
        self
    }

    pub fn with_confidence(mut self, confidence_score: Decimal) -> Self {
        self.confidence_score = Some(confidence_score);
        self
    }

    pub fn with_status(mut self, status: &str) -> Self {
        self.status = status.to_string();
        self
    }

    pub fn with_expiry(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    /// Stored spread, 0 when absent. Never re-derived from the prices.
    pub fn spread(&self) -> Decimal {
        self.spread_percentage.unwrap_or(Decimal::ZERO)
    }

    pub fn volume(&self) -> Decimal {
        self.volume_24h.unwrap_or(Decimal::ZERO)
    }

    pub fn liquidity(&self) -> Decimal {
        self.liquidity_score.unwrap_or(Decimal::ZERO)
    }

    pub fn confidence(&self) -> Decimal {
        self.confidence_score.unwrap_or(DEFAULT_CONFIDENCE_SCORE)
    }

    pub fn risk(&self) -> ExecutionRisk {
        self.execution_risk.unwrap_or(ExecutionRisk::Unknown)
    }

    pub fn is_active(&self) -> bool {
        self.status == STATUS_ACTIVE
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expiry| expiry <= now)
    }

    pub fn exchanges(&self) -> [&str; 2] {
        [self.buy_exchange.as_str(), self.sell_exchange.as_str()]
    }
}
