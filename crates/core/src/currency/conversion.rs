//! Currency conversion arithmetic.
//!
//! CRITICAL: Rounding strategy for multi-currency:
//! - Converted amounts keep 4 decimal places
//! - Payslip money lines keep 2 decimal places
//! - Use banker's rounding (round half to even)

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;

/// Decimal places kept by currency conversions.
pub const CONVERSION_DP: u32 = 4;

/// Decimal places kept by monetary payslip lines.
pub const MONEY_DP: u32 = 2;

/// Converts an amount using the given exchange rate.
///
/// Uses banker's rounding (round half to even) to minimize cumulative errors.
#[must_use]
pub fn convert_amount(amount: Decimal, rate: Decimal) -> Decimal {
    let converted = amount * rate;
    converted.round_dp_with_strategy(CONVERSION_DP, RoundingStrategy::MidpointNearestEven)
}

/// Rounds a value to a monetary payslip line.
#[must_use]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_DP, RoundingStrategy::MidpointNearestEven)
}
