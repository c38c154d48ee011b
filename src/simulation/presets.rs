//! Applying named cost presets to user-entered parameters

use tracing::debug;
use crate::{
    errors::EngineResult,
    types::{CostPreset, SimulationParameters},
};

/// Looks up a preset by name and overwrites the fee and slippage fields.
/// Unknown names leave `params` untouched.
pub fn apply_named_preset(params: &mut SimulationParameters, name: &str) -> EngineResult<CostPreset> {
    let preset: CostPreset = name.parse()?;
    preset.apply_to(params);
    debug!(%preset, "Applied cost preset");
    Ok(preset)
}
