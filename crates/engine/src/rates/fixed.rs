//! Static rate provider with fixed quote tables.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;

use payforge_shared::CurrencyCode;

use super::{ProviderError, RateProvider, RateTable};

/// Rate provider that answers from fixed in-memory tables.
///
/// Serves tests and the demo binary. Every call is counted so tests can
/// assert how often the provider was actually consulted.
#[derive(Debug, Clone, Default)]
pub struct StaticRateProvider {
    tables: HashMap<CurrencyCode, HashMap<CurrencyCode, Decimal>>,
    calls: Arc<AtomicUsize>,
}

impl StaticRateProvider {
    /// Creates a provider with no quote tables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single quote: 1 `base` = `rate` `target`.
    #[must_use]
    pub fn with_quote(mut self, base: CurrencyCode, target: CurrencyCode, rate: Decimal) -> Self {
        self.tables.entry(base).or_default().insert(target, rate);
        self
    }

    /// Number of times `latest_rates` has been called.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RateProvider for StaticRateProvider {
    async fn latest_rates(&self, base: &CurrencyCode) -> Result<RateTable, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let rates = self
            .tables
            .get(base)
            .ok_or_else(|| ProviderError::UnknownBase { base: base.clone() })?;

        Ok(RateTable {
            base: base.clone(),
            date: Utc::now().date_naive().to_string(),
            rates: rates.clone(),
        })
    }
}
