//! Dashboard summary reports

use anyhow::Result;
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use crate::types::{DashboardSummary, ProfitProjection};

#[derive(serde::Serialize)]
struct Report<'a> {
    generated_at: chrono::DateTime<Utc>,
    summary: &'a DashboardSummary,
    projection: &'a ProfitProjection,
}

pub fn save_summary(
    output_dir: impl AsRef<Path>,
    summary: &DashboardSummary,
    projection: &ProfitProjection,
) -> Result<PathBuf> {
    let generated_at = Utc::now();
    let filename = output_dir.as_ref().join("reports").join(format!(
        "summary_{}.json",
        generated_at.format("%Y-%m-%dT%H%M%S")
    ));

    let report = Report {
        generated_at,
        summary,
        projection,
    };
    fs::write(&filename, serde_json::to_string_pretty(&report)?)?;

    info!(
        path = %filename.display(),
        opportunities = summary.total_opportunities,
        "Saved dashboard summary"
    );

    Ok(filename)
}
