//! Trade economics for a single hypothetical arbitrage execution

use rust_decimal::prelude::*;
use rust_decimal_macros::dec;
use tracing::{debug, warn};
use crate::{
    errors::{EngineError, EngineResult},
    types::{OpportunityRecord, SimulationParameters, SimulationResult},
    validation::validate_positive,
};

/// Projects gross profit, fees, slippage, net profit and ROI for buying
/// `trade_amount` worth of the base asset on the buy venue and selling it
/// on the sell venue.
///
/// Slippage is charged against the sell leg's notional only. An inverted
/// spread yields negative figures rather than an error. A figure that
/// leaves the `Decimal` range is reported as `InvalidInput` naming it.
pub fn simulate(
    opportunity: &OpportunityRecord,
    params: &SimulationParameters,
) -> EngineResult<SimulationResult> {
    validate_positive("buy_price", opportunity.buy_price)?;
    validate_positive("trade_amount", params.trade_amount)?;

    let buy_price = opportunity.buy_price;
    let sell_price = opportunity.sell_price;

    if sell_price < buy_price {
        warn!(
            opportunity_id = %opportunity.id,
            %buy_price,
            %sell_price,
            "Simulating an inverted spread"
        );
    }

    let trade_amount = params.trade_amount;
    let fits = |field: &'static str, value: Option<Decimal>| {
        value.ok_or_else(|| {
            EngineError::invalid_input(field, trade_amount, "result exceeds the decimal range")
        })
    };

    let amount_in_base = fits("amount_in_base", trade_amount.checked_div(buy_price))?;
    let gross_profit = fits(
        "gross_profit",
        sell_price.checked_sub(buy_price).and_then(|d| d.checked_mul(amount_in_base)),
    )?;

    let buy_fee = fits("buy_fee", trade_amount.checked_mul(params.buy_fee_percent / dec!(100)))?;
    let sell_value = fits("sell_value", amount_in_base.checked_mul(sell_price))?;
    let sell_fee = fits("sell_fee", sell_value.checked_mul(params.sell_fee_percent / dec!(100)))?;
    let trading_fees = fits("trading_fees", buy_fee.checked_add(sell_fee))?;

    let slippage_cost = fits(
        "slippage_cost",
        sell_value.checked_mul(params.slippage_percent / dec!(100)),
    )?;

    let net_profit = fits(
        "net_profit",
        gross_profit
            .checked_sub(trading_fees)
            .and_then(|p| p.checked_sub(slippage_cost)),
    )?;
    let roi_percentage = fits(
        "roi_percentage",
        net_profit.checked_div(trade_amount).and_then(|r| r.checked_mul(dec!(100))),
    )?;

    debug!(
        opportunity_id = %opportunity.id,
        symbol = %opportunity.symbol,
        %gross_profit,
        %trading_fees,
        %slippage_cost,
        %net_profit,
        %roi_percentage,
        "Trade simulated"
    );

    Ok(SimulationResult {
        opportunity_id: opportunity.id.clone(),
        trade_amount,
        buy_fee_percent: params.buy_fee_percent,
        sell_fee_percent: params.sell_fee_percent,
        slippage_percent: params.slippage_percent,
        entry_price: buy_price,
        exit_price: sell_price,
        amount_in_base,
        buy_fee,
        sell_value,
        sell_fee,
        gross_profit,
        trading_fees,
        slippage_cost,
        net_profit,
        roi_percentage,
    })
}
