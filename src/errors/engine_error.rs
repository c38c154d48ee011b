//! Custom error types for the economics engine

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Invalid input: {field} = {value} - {reason}")]
    InvalidInput {
        field: &'static str,
        value: Decimal,
        reason: String,
    },

    #[error("Unknown {kind}: '{name}'")]
    Configuration {
        kind: &'static str,
        name: String,
    },
}

impl EngineError {
    pub fn invalid_input(field: &'static str, value: Decimal, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            value,
            reason: reason.into(),
        }
    }

    pub fn configuration(kind: &'static str, name: impl Into<String>) -> Self {
        Self::Configuration {
            kind,
            name: name.into(),
        }
    }

    /// Name of the offending field for input errors.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidInput { field, .. } => Some(*field),
            Self::Configuration { .. } => None,
        }
    }
}

pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn messages_name_the_culprit() {
        let err = EngineError::invalid_input("trade_amount", dec!(0), "must be greater than zero");
        assert_eq!(err.to_string(), "Invalid input: trade_amount = 0 - must be greater than zero");
        assert_eq!(err.field(), Some("trade_amount"));

        let err = EngineError::configuration("filter criterion", "unknown_tab");
        assert_eq!(err.to_string(), "Unknown filter criterion: 'unknown_tab'");
        assert_eq!(err.field(), None);
    }
}
