//! Simulation result storage

use anyhow::Result;
use chrono::Utc;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;
use crate::types::SimulationRecord;

pub fn save_simulation(output_dir: impl AsRef<Path>, record: &SimulationRecord) -> Result<PathBuf> {
    let filename = output_dir.as_ref().join("simulations").join(format!(
        "simulations_{}.jsonl",
        Utc::now().format("%Y-%m-%d")
    ));

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&filename)?;

    writeln!(file, "{}", serde_json::to_string(record)?)?;

    info!(
        simulation_id = %record.id,
        opportunity_id = %record.result.opportunity_id,
        net_profit = %record.result.net_profit,
        roi_pct = %record.result.roi_percentage,
        "Saved trade simulation"
    );

    Ok(filename)
}
