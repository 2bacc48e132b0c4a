//! Exchange rate types.

use chrono::{DateTime, Duration, Utc};
use payforge_shared::CurrencyCode;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Where an exchange rate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RateSource {
    /// Fetched from the external rate provider.
    Api,
    /// Entered by an operator.
    Manual,
}

/// Exchange rate between two currencies.
///
/// Rates are append-only: a newer observation never overwrites an older
/// one, and "the current rate" is the most recent entry inside the
/// freshness window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRate {
    /// Source currency code.
    pub from_currency: CurrencyCode,
    /// Target currency code.
    pub to_currency: CurrencyCode,
    /// Exchange rate (1 from_currency = rate to_currency).
    pub rate: Decimal,
    /// When this rate was observed.
    pub fetched_at: DateTime<Utc>,
    /// Where this rate came from.
    pub source: RateSource,
}

impl ExchangeRate {
    /// Creates a new exchange rate observed now.
    #[must_use]
    pub fn new(
        from_currency: CurrencyCode,
        to_currency: CurrencyCode,
        rate: Decimal,
        source: RateSource,
    ) -> Self {
        Self {
            from_currency,
            to_currency,
            rate,
            fetched_at: Utc::now(),
            source,
        }
    }

    /// Returns true if this rate is still usable at `now` given the
    /// freshness window.
    #[must_use]
    pub fn is_fresh(&self, now: DateTime<Utc>, window: Duration) -> bool {
        self.fetched_at >= now - window
    }
}
