//! Arbitrage Economics - Report Entry Point
//!
//! Loads opportunity records, logs the dashboard figures and simulates the
//! best opportunities with the configured cost preset.

use arb_economics::*;
use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{info, warn};

fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let config = CONFIG.clone();

    // Initialize logging
    utils::setup_output_directories(&config.output_dir)?;
    let _logging_guard = utils::setup_logging(&config.output_dir)?;

    info!("📈 Arbitrage Economics v{}", env!("CARGO_PKG_VERSION"));
    info!("📋 Configuration:");
    info!("   Trade Amount: ${}", config.trade_amount);
    info!("   Cost Preset: {}", config.cost_preset);
    info!("   Dashboard Tab: {}", config.dashboard_tab);
    info!("   Top Performers: {}", config.top_performers);

    // Validate configuration
    let mut params = SimulationParameters::new(config.trade_amount);
    simulation::apply_named_preset(&mut params, &config.cost_preset)
        .context("Invalid COST_PRESET")?;
    let criterion: FilterCriterion = config.dashboard_tab.parse()
        .context("Invalid DASHBOARD_TAB")?;

    let now = Utc::now();
    let loaded = if config.use_sample_data {
        warn!("⚠️  USE_SAMPLE_DATA set - generating {} synthetic opportunities", config.sample_size);
        utils::sample_opportunities(&mut rand::rng(), config.sample_size, now)
    } else {
        storage::load_opportunities(&config.opportunities_path)?
    };

    let opportunities = metrics::purge_expired(&loaded, now);
    if opportunities.len() < loaded.len() {
        info!("🧹 Skipped {} expired opportunities", loaded.len() - opportunities.len());
    }

    let summary = summarize(&opportunities);
    utils::print_dashboard_summary(&summary);

    let projection = metrics::project_profit(&opportunities, config.projection_capital, config.top_performers);
    utils::print_profit_projection(&projection);
    storage::save_summary(&config.output_dir, &summary, &projection)?;

    let visible = metrics::filter_by(&opportunities, criterion, config.high_profit_threshold);
    info!("\n🗂️  Tab '{}': {} of {} opportunities", config.dashboard_tab, visible.len(), opportunities.len());

    let top = metrics::top_performers(&visible, config.top_performers);
    utils::print_top_performers(&top);

    let mut simulated = 0;
    for opportunity in &top {
        match simulate(opportunity, &params) {
            Ok(result) => {
                utils::print_simulation(opportunity, &result);
                storage::save_simulation(&config.output_dir, &SimulationRecord::new(result))?;
                simulated += 1;
            }
            Err(e) => {
                warn!("Skipping {} ({}): {}", opportunity.symbol, opportunity.id, e);
            }
        }
    }

    info!("\n✅ Simulated {} of {} top opportunities", simulated, top.len());
    Ok(())
}
