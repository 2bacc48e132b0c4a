//! Cached currency conversion over a rate provider.
//!
//! Rate lookups read the append-only rate log first and only consult the
//! provider when no observation inside the freshness window exists. A
//! freshly fetched rate is persisted fire-and-forget: the conversion result
//! never waits on, and can never be failed by, the cache write.

use std::sync::Arc;

use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use tracing::warn;

use payforge_core::currency::{convert_amount, ExchangeRate, RateSource};
use payforge_shared::{CompanyId, CurrencyCode, RatesConfig};
use payforge_store::{CompanyStore, CurrencyStore, RateStore, StoreError};

use crate::rates::RateProvider;

/// Error types for currency conversion operations.
#[derive(Debug, thiserror::Error)]
pub enum CurrencyError {
    /// No usable rate: nothing cached, and the provider had no quote.
    #[error("no exchange rate available for {from} -> {to}")]
    RateUnavailable {
        /// Source currency.
        from: CurrencyCode,
        /// Target currency.
        to: CurrencyCode,
    },

    /// Store error.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Currency conversion service.
///
/// Generic over the store so the engine can run against any backend that
/// implements the rate log contract.
pub struct CurrencyService<S> {
    store: Arc<S>,
    provider: Arc<dyn RateProvider>,
    freshness: Duration,
    assume_unity_when_missing: bool,
}

impl<S> Clone for CurrencyService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            provider: Arc::clone(&self.provider),
            freshness: self.freshness,
            assume_unity_when_missing: self.assume_unity_when_missing,
        }
    }
}

impl<S> CurrencyService<S> {
    /// Creates a conversion service from the rates configuration.
    #[must_use]
    pub fn new(store: Arc<S>, provider: Arc<dyn RateProvider>, config: &RatesConfig) -> Self {
        Self {
            store,
            provider,
            freshness: Duration::hours(config.freshness_hours),
            assume_unity_when_missing: config.assume_unity_when_missing,
        }
    }
}

impl<S> CurrencyService<S>
where
    S: RateStore + 'static,
{
    /// Returns the exchange rate from one currency to another.
    ///
    /// Identical currencies are `1` without touching the store or the
    /// provider. Otherwise the freshest cached observation inside the
    /// freshness window wins; on a miss the provider is called exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`CurrencyError::RateUnavailable`] when neither the cache nor
    /// the provider can quote the pair, unless the service is configured to
    /// assume a 1:1 rate for missing quotes.
    pub async fn rate(
        &self,
        from: &CurrencyCode,
        to: &CurrencyCode,
    ) -> Result<Decimal, CurrencyError> {
        if from == to {
            return Ok(Decimal::ONE);
        }

        let not_before = Utc::now() - self.freshness;
        if let Some(cached) = self.store.latest_rate(from, to, not_before).await? {
            return Ok(cached.rate);
        }

        match self.provider.latest_rates(from).await {
            Ok(table) => match table.quote(to) {
                Some(rate) => {
                    self.persist_in_background(from, to, rate);
                    Ok(rate)
                }
                None => {
                    warn!(%from, %to, "Provider table has no quote for target currency");
                    self.unity_or_unavailable(from, to)
                }
            },
            Err(err) => {
                warn!(%from, %to, error = %err, "Rate provider call failed");
                self.unity_or_unavailable(from, to)
            }
        }
    }

    /// Converts an amount between currencies.
    ///
    /// Identical currencies return the amount unchanged; otherwise the
    /// result is rounded to 4 decimal places with banker's rounding.
    ///
    /// # Errors
    ///
    /// Returns [`CurrencyError::RateUnavailable`] when no rate can be
    /// resolved for the pair.
    pub async fn convert(
        &self,
        amount: Decimal,
        from: &CurrencyCode,
        to: &CurrencyCode,
    ) -> Result<Decimal, CurrencyError> {
        if from == to {
            return Ok(amount);
        }

        let rate = self.rate(from, to).await?;
        Ok(convert_amount(amount, rate))
    }

    fn unity_or_unavailable(
        &self,
        from: &CurrencyCode,
        to: &CurrencyCode,
    ) -> Result<Decimal, CurrencyError> {
        if self.assume_unity_when_missing {
            warn!(%from, %to, "Assuming 1:1 exchange rate for missing quote");
            return Ok(Decimal::ONE);
        }
        Err(CurrencyError::RateUnavailable {
            from: from.clone(),
            to: to.clone(),
        })
    }

    /// Appends the fetched rate to the log without blocking the caller.
    /// A failed write only costs the next lookup a refetch.
    fn persist_in_background(&self, from: &CurrencyCode, to: &CurrencyCode, rate: Decimal) {
        let record = ExchangeRate::new(from.clone(), to.clone(), rate, RateSource::Api);
        let store = Arc::clone(&self.store);
        tokio::spawn(async move {
            if let Err(err) = store.append_rate(record).await {
                warn!(error = %err, "Failed to persist fetched exchange rate");
            }
        });
    }
}

impl<S> CurrencyService<S>
where
    S: RateStore + CompanyStore + CurrencyStore + 'static,
{
    /// Refreshes stored rates from the company's base currency to every
    /// other active currency.
    ///
    /// Best effort: a currency whose quote cannot be fetched is logged and
    /// skipped. Appends happen synchronously so callers observe the new
    /// rates immediately. Returns the number of rates refreshed.
    ///
    /// # Errors
    ///
    /// Returns a [`CurrencyError::Store`] when the company or the currency
    /// list cannot be loaded.
    pub async fn refresh_company_rates(
        &self,
        company_id: CompanyId,
    ) -> Result<usize, CurrencyError> {
        let company = self.store.company(company_id).await?;
        let currencies = self.store.active_currencies().await?;

        let mut refreshed = 0;
        for currency in currencies {
            if currency.code == company.base_currency {
                continue;
            }

            let quote = match self.provider.latest_rates(&company.base_currency).await {
                Ok(table) => table.quote(&currency.code),
                Err(err) => {
                    warn!(
                        from = %company.base_currency,
                        to = %currency.code,
                        error = %err,
                        "Rate refresh fetch failed"
                    );
                    continue;
                }
            };

            let Some(rate) = quote else {
                warn!(
                    from = %company.base_currency,
                    to = %currency.code,
                    "Rate refresh found no quote"
                );
                continue;
            };

            let record = ExchangeRate::new(
                company.base_currency.clone(),
                currency.code.clone(),
                rate,
                RateSource::Api,
            );
            if let Err(err) = self.store.append_rate(record).await {
                warn!(
                    from = %company.base_currency,
                    to = %currency.code,
                    error = %err,
                    "Rate refresh append failed"
                );
                continue;
            }
            refreshed += 1;
        }

        Ok(refreshed)
    }
}
