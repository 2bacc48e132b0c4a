//! Currency records, exchange rates, and conversion arithmetic.

pub mod conversion;
pub mod exchange;
pub mod types;

#[cfg(test)]
mod props;

pub use conversion::{convert_amount, round_money};
pub use exchange::{ExchangeRate, RateSource};
pub use types::Currency;
