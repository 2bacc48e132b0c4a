//! HTTP rate provider backed by a public exchange rate API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use payforge_shared::{CurrencyCode, RatesConfig};

use super::{ProviderError, RateProvider, RateTable};

/// Rate provider that fetches quote tables over HTTP.
///
/// The upstream exposes one table per base currency at
/// `{provider_url}{CODE}`, e.g. `.../v4/latest/USD`.
#[derive(Debug, Clone)]
pub struct HttpRateProvider {
    http: Client,
    base_url: String,
}

impl HttpRateProvider {
    /// Creates a provider from the rates configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ProviderError`] if the HTTP client cannot be built.
    pub fn new(config: &RatesConfig) -> Result<Self, ProviderError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.provider_url.clone(),
        })
    }

    /// Sets a custom base URL (useful for testing).
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Returns the base URL quote tables are fetched from.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl RateProvider for HttpRateProvider {
    async fn latest_rates(&self, base: &CurrencyCode) -> Result<RateTable, ProviderError> {
        let url = format!("{}{}", self.base_url, base);
        tracing::debug!(%base, "Fetching rate table");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status { status });
        }

        let table = response.json::<RateTable>().await?;
        Ok(table)
    }
}
