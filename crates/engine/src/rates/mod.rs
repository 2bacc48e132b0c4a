//! Exchange rate providers.
//!
//! A provider answers one question: given a base currency, what are the
//! latest quotes against it. The HTTP implementation talks to an upstream
//! rate API; the static implementation serves tests and the demo binary.

pub mod fixed;
pub mod http;
mod provider;

pub use fixed::StaticRateProvider;
pub use http::HttpRateProvider;
pub use provider::{ProviderError, RateProvider, RateTable};
