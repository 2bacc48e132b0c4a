//! Engine configuration management.

use serde::Deserialize;

/// Engine configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EngineConfig {
    /// Exchange rate provider configuration.
    #[serde(default)]
    pub rates: RatesConfig,
}

/// Exchange rate provider configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RatesConfig {
    /// Base URL of the rate provider; the source currency code is appended.
    #[serde(default = "default_provider_url")]
    pub provider_url: String,
    /// How long a stored rate stays usable without a provider refetch.
    #[serde(default = "default_freshness_hours")]
    pub freshness_hours: i64,
    /// Treat a missing quote as a 1:1 rate instead of an error.
    /// Off by default.
    #[serde(default)]
    pub assume_unity_when_missing: bool,
    /// Provider request timeout in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_provider_url() -> String {
    "https://api.exchangerate-api.com/v4/latest/".to_string()
}

fn default_freshness_hours() -> i64 {
    24
}

fn default_request_timeout() -> u64 {
    10
}

impl Default for RatesConfig {
    fn default() -> Self {
        Self {
            provider_url: default_provider_url(),
            freshness_hours: default_freshness_hours(),
            assume_unity_when_missing: false,
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl EngineConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("PAYFORGE").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
