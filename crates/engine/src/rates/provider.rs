//! The rate provider contract and its wire format.

use std::collections::HashMap;

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Deserialize;

use payforge_shared::CurrencyCode;

/// Error types for rate provider operations.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The HTTP request itself failed (connect, timeout, decode).
    #[error("rate provider request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The upstream answered with a non-success status.
    #[error("rate provider returned HTTP {status}")]
    Status {
        /// The status code the upstream answered with.
        status: reqwest::StatusCode,
    },

    /// The provider has no table for the requested base currency.
    #[error("no rate table for base currency {base}")]
    UnknownBase {
        /// The base currency that was requested.
        base: CurrencyCode,
    },
}

/// One base currency's quote table, as the upstream API ships it.
#[derive(Debug, Clone, Deserialize)]
pub struct RateTable {
    /// Base currency every quote is relative to.
    pub base: CurrencyCode,
    /// Upstream's publication date, kept verbatim.
    pub date: String,
    /// Quotes keyed by target currency: 1 base = rate target.
    pub rates: HashMap<CurrencyCode, Decimal>,
}

impl RateTable {
    /// Looks up the quote for one target currency.
    #[must_use]
    pub fn quote(&self, code: &CurrencyCode) -> Option<Decimal> {
        self.rates.get(code).copied()
    }
}

/// Source of exchange rate quotes.
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Fetches the latest quote table for a base currency.
    ///
    /// # Errors
    ///
    /// Returns a [`ProviderError`] when the upstream cannot be reached or
    /// has no table for the base.
    async fn latest_rates(&self, base: &CurrencyCode) -> Result<RateTable, ProviderError>;
}
