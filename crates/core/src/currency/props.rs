//! Property-based tests for conversion arithmetic.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::conversion::{convert_amount, round_money};

/// Positive amounts from 0.01 to 1,000,000.00.
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Positive rates from 0.0001 to 10,000.0000.
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Conversion results never carry more than 4 decimal places.
    #[test]
    fn prop_convert_keeps_at_most_four_decimals(
        amount in positive_amount(),
        rate in positive_rate(),
    ) {
        let result = convert_amount(amount, rate);
        let scaled = result * Decimal::from(10_000);
        prop_assert_eq!(scaled, scaled.round());
    }

    /// Money lines never carry more than 2 decimal places.
    #[test]
    fn prop_round_money_keeps_at_most_two_decimals(
        amount in positive_amount(),
        rate in positive_rate(),
    ) {
        let result = round_money(amount * rate);
        let scaled = result * Decimal::from(100);
        prop_assert_eq!(scaled, scaled.round());
    }

    /// A unity rate only rounds; it never changes the value beyond that.
    #[test]
    fn prop_unity_rate_only_rounds(amount in positive_amount()) {
        let result = convert_amount(amount, Decimal::ONE);
        prop_assert_eq!(result, amount);
    }

    /// Positive inputs never round below zero.
    ///
    /// Strict positivity does not hold: a product like 0.01 * 0.0001 is
    /// below half the last kept place and rounds to zero.
    #[test]
    fn prop_positive_inputs_never_negative(
        amount in positive_amount(),
        rate in positive_rate(),
    ) {
        let result = convert_amount(amount, rate);
        prop_assert!(result >= Decimal::ZERO);
    }

    /// Rounding error is bounded by half a unit in the last kept place.
    #[test]
    fn prop_conversion_error_is_bounded(
        amount in positive_amount(),
        rate in positive_rate(),
    ) {
        let exact = amount * rate;
        let rounded = convert_amount(amount, rate);
        let error = (rounded - exact).abs();
        prop_assert!(error <= Decimal::new(5, 5));
    }

    /// Exact midpoints settle on the even cent.
    #[test]
    fn prop_money_midpoints_settle_even(n in 0i64..1_000_000i64) {
        let midpoint = Decimal::new(n * 10 + 5, 3);
        let rounded = round_money(midpoint);
        let cents = rounded * Decimal::from(100);
        prop_assert_eq!(cents, cents.round());
        prop_assert_eq!(cents % Decimal::from(2), Decimal::ZERO);
    }
}
