//! Risk distribution, posture label and confidence

use rust_decimal::prelude::*;
use crate::{
    config::DEFAULT_CONFIDENCE_SCORE,
    types::{ExecutionRisk, OpportunityRecord, RiskDistribution, RiskPosture},
    utils::{mean_or, percentage_of, saturating_sum},
};

/// Counts per risk bucket, with percentages of the full input length.
/// Absent and unrecognized labels go to `unknown`.
pub fn risk_distribution(records: &[OpportunityRecord]) -> RiskDistribution {
    let mut dist = RiskDistribution {
        total: records.len(),
        ..RiskDistribution::default()
    };

    for record in records {
        match record.risk() {
            ExecutionRisk::Low => dist.low += 1,
            ExecutionRisk::Medium => dist.medium += 1,
            ExecutionRisk::High => dist.high += 1,
            ExecutionRisk::Unknown => dist.unknown += 1,
        }
    }

    dist.low_pct = percentage_of(dist.low, dist.total);
    dist.medium_pct = percentage_of(dist.medium, dist.total);
    dist.high_pct = percentage_of(dist.high, dist.total);
    dist.unknown_pct = percentage_of(dist.unknown, dist.total);
    dist
}

/// Evaluated in order: low outweighs the rest, then medium over high.
pub fn overall_risk_label(dist: &RiskDistribution) -> RiskPosture {
    if dist.low > dist.medium + dist.high {
        RiskPosture::Conservative
    } else if dist.medium > dist.high {
        RiskPosture::Balanced
    } else {
        RiskPosture::Aggressive
    }
}

/// Mean confidence, assuming the baseline of 85 for records without a
/// score and for empty input.
pub fn average_confidence(records: &[OpportunityRecord]) -> Decimal {
    let sum = saturating_sum(records.iter().map(OpportunityRecord::confidence));
    mean_or(sum, records.len(), DEFAULT_CONFIDENCE_SCORE)
}
