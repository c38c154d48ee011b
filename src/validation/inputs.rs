//! Numeric precondition checks

use rust_decimal::prelude::*;
use crate::errors::{EngineError, EngineResult};

pub fn validate_positive(field: &'static str, value: Decimal) -> EngineResult<()> {
    if value <= Decimal::ZERO {
        return Err(EngineError::invalid_input(field, value, "must be greater than zero"));
    }

    Ok(())
}
