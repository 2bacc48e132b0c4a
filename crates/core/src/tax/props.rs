//! Property-based tests for the income tax schedule.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::tax::schedule::{income_tax_in_reference, monthly_brackets};

/// Strategy for monthly gross amounts in cents, spanning every bracket.
fn arb_gross() -> impl Strategy<Value = Decimal> {
    (0i64..=1_000_000_00).prop_map(|cents| Decimal::new(cents, 2))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Tax is never negative, whatever the gross.
    #[test]
    fn prop_tax_never_negative(gross in arb_gross()) {
        prop_assert!(income_tax_in_reference(gross) >= Decimal::ZERO);
    }

    /// Tax never exceeds the top marginal rate applied to the whole gross.
    #[test]
    fn prop_tax_below_top_marginal_rate(gross in arb_gross()) {
        let tax = income_tax_in_reference(gross);
        prop_assert!(tax <= gross * dec!(0.40));
    }

    /// More gross never means less tax. The fixed deductions are sized so
    /// the schedule stays monotone across bracket boundaries.
    #[test]
    fn prop_tax_monotone_in_gross(a in arb_gross(), b in arb_gross()) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(income_tax_in_reference(lo) <= income_tax_in_reference(hi));
    }

    /// Take-home (gross minus tax) also grows with gross: the flat-rate
    /// table never taxes an extra earned cent at more than 100%.
    #[test]
    fn prop_take_home_monotone_in_gross(a in arb_gross(), b in arb_gross()) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let take_lo = lo - income_tax_in_reference(lo);
        let take_hi = hi - income_tax_in_reference(hi);
        prop_assert!(take_lo <= take_hi);
    }
}

#[cfg(test)]
mod boundary_tests {
    use super::*;

    /// Crossing any bracket boundary by one cent moves the tax by less
    /// than a cent, and never downward.
    #[test]
    fn test_continuity_at_every_boundary() {
        let one_cent = dec!(0.01);
        for bracket in monthly_brackets() {
            let Some(upper) = bracket.max else { continue };
            let below = income_tax_in_reference(upper);
            let above = income_tax_in_reference(upper + one_cent);
            assert!(
                above >= below,
                "tax inverted at boundary {upper}: {below} -> {above}"
            );
            assert!(
                above - below < one_cent,
                "tax jumped at boundary {upper}: {below} -> {above}"
            );
        }
    }

    #[test]
    fn test_exact_boundary_values() {
        assert_eq!(income_tax_in_reference(dec!(100.00)), dec!(0));
        assert_eq!(income_tax_in_reference(dec!(100.01)), dec!(0.002));
        assert_eq!(income_tax_in_reference(dec!(1000.00)), dec!(215.00));
        assert_eq!(income_tax_in_reference(dec!(1000.01)), dec!(215.003));
        assert_eq!(income_tax_in_reference(dec!(3000.00)), dec!(865.00));
        assert_eq!(income_tax_in_reference(dec!(3000.01)), dec!(865.004));
    }
}
