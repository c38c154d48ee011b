//! Display and printing utilities

use tracing::{info, warn};
use crate::types::{DashboardSummary, OpportunityRecord, ProfitProjection, SimulationResult};

pub fn print_dashboard_summary(summary: &DashboardSummary) {
    let risk = &summary.risk;

    info!("\n📊 Dashboard Summary");
    info!("   Opportunities: {} ({} active)", summary.total_opportunities, summary.active_opportunities);
    info!("   Avg Spread: {:.2}%", summary.average_spread);
    info!("   🌐 MARKET:");
    info!("     Total 24h Volume: ${:.0}", summary.market.total_volume);
    info!("     Avg Liquidity: {:.0}/100", summary.market.average_liquidity);
    info!("     Highest Spread: {:.2}%", summary.market.highest_spread);
    info!("     Active Exchanges: {}", summary.market.active_exchanges);
    info!("   ⚠️  RISK:");
    info!("     Low:    {} ({:.0}%)", risk.low, risk.low_pct);
    info!("     Medium: {} ({:.0}%)", risk.medium, risk.medium_pct);
    info!("     High:   {} ({:.0}%)", risk.high, risk.high_pct);
    if risk.unknown > 0 {
        info!("     Unrated: {} ({:.0}%)", risk.unknown, risk.unknown_pct);
    }
    info!("     Posture: {}", summary.posture);
    info!("     Avg Confidence: {:.0}/100", summary.average_confidence);
}

pub fn print_top_performers(top: &[OpportunityRecord]) {
    info!("\n👑 Top Performers");
    if top.is_empty() {
        info!("   No opportunities available");
        return;
    }
    for (rank, opp) in top.iter().enumerate() {
        info!(
            "   #{} {} {} → {} +{:.2}% ({} risk)",
            rank + 1,
            opp.symbol,
            opp.buy_exchange,
            opp.sell_exchange,
            opp.spread(),
            opp.risk()
        );
    }
}

pub fn print_profit_projection(projection: &ProfitProjection) {
    info!("\n💼 Projection on ${:.0} capital", projection.capital);
    for line in &projection.lines {
        info!(
            "   {} {:.2}%: gross ${:.2}, net ${:.2}",
            line.symbol, line.spread, line.gross_profit, line.net_profit
        );
    }
    info!("   Total net: ${:.2}", projection.total_net);
}

pub fn print_simulation(opportunity: &OpportunityRecord, result: &SimulationResult) {
    info!("\n🎯 SIMULATION {} ({} → {})", opportunity.symbol, opportunity.buy_exchange, opportunity.sell_exchange);
    info!("   Trade Amount: ${:.2}", result.trade_amount);
    info!("   Entry: ${:.4}  Exit: ${:.4}", result.entry_price, result.exit_price);
    info!("   Gross Profit: ${:.2}", result.gross_profit);
    info!("   Total Costs: -${:.2} (fees ${:.2}, slippage ${:.2})",
        result.total_costs(),
        result.trading_fees,
        result.slippage_cost
    );
    if result.is_profitable() {
        info!("   Net Profit: ${:.2}", result.net_profit);
        info!("   ROI: {:.2}%", result.roi_percentage);
    } else {
        warn!("   Net Profit: ${:.2}", result.net_profit);
        warn!("   ROI: {:.2}%", result.roi_percentage);
    }
}
