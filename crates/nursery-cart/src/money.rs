//! Money rounding

use rust_decimal::{Decimal, RoundingStrategy};

/// Round to whole cents, halves away from zero
#[inline]
#[must_use]
pub fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Unrounded `price × quantity`, saturating at [`Decimal::MAX`]
#[inline]
#[must_use]
pub fn line_cost(price: Decimal, quantity: u64) -> Decimal {
    price.saturating_mul(Decimal::from(quantity))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_cents(Decimal::new(12_345, 3)), Decimal::new(1235, 2));
        assert_eq!(round_cents(Decimal::new(12_344, 3)), Decimal::new(1234, 2));
        assert_eq!(round_cents(Decimal::new(-12_345, 3)), Decimal::new(-1235, 2));
    }

    #[test]
    fn keeps_exact_cents() {
        assert_eq!(round_cents(Decimal::new(9495, 2)), Decimal::new(9495, 2));
        assert_eq!(round_cents(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn line_cost_is_exact_then_saturates() {
        assert_eq!(line_cost(Decimal::new(5, 3), 3), Decimal::new(15, 3));
        assert_eq!(line_cost(Decimal::from(10u128.pow(20)), 100_000_000_000), Decimal::MAX);
        assert_eq!(round_cents(Decimal::MAX), Decimal::MAX);
    }
}
