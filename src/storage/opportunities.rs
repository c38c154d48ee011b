//! Opportunity loading from the record store export

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;
use crate::types::OpportunityRecord;

pub fn load_opportunities(path: impl AsRef<Path>) -> Result<Vec<OpportunityRecord>> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read opportunities from {}", path.display()))?;

    let records: Vec<OpportunityRecord> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse opportunities in {}", path.display()))?;

    info!(
        path = %path.display(),
        count = records.len(),
        "Loaded opportunity records"
    );

    Ok(records)
}
