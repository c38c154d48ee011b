//! Mathematical utility functions

use rust_decimal::prelude::*;
use rust_decimal_macros::dec;

/// Arithmetic mean, or `empty` when there is nothing to average.
pub fn mean_or(sum: Decimal, count: usize, empty: Decimal) -> Decimal {
    if count == 0 {
        return empty;
    }
    sum / Decimal::from(count)
}

/// Sum that pins at `Decimal::MAX`/`MIN` instead of overflowing.
pub fn saturating_sum<I: IntoIterator<Item = Decimal>>(values: I) -> Decimal {
    values
        .into_iter()
        .fold(Decimal::ZERO, |acc, v| acc.saturating_add(v))
}

/// `part / max(total, 1) * 100`
pub fn percentage_of(part: usize, total: usize) -> Decimal {
    Decimal::from(part) / Decimal::from(total.max(1)) * dec!(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_falls_back_on_empty() {
        assert_eq!(mean_or(dec!(9), 3, dec!(0)), dec!(3));
        assert_eq!(mean_or(dec!(0), 0, dec!(85)), dec!(85));
    }

    #[test]
    fn sum_saturates() {
        assert_eq!(saturating_sum([dec!(1.5), dec!(2.5)]), dec!(4));
        assert_eq!(saturating_sum([Decimal::MAX, Decimal::MAX]), Decimal::MAX);
        assert_eq!(saturating_sum([Decimal::MIN, dec!(-1)]), Decimal::MIN);
    }

    #[test]
    fn percentage_guards_zero_total() {
        assert_eq!(percentage_of(0, 0), dec!(0));
        assert_eq!(percentage_of(1, 4), dec!(25));
    }
}
