//! Payroll engine services for Payforge.
//!
//! This crate wires the pure domain logic from `payforge-core` to the
//! persistence contracts from `payforge-store` and adds the one outward
//! dependency the system has: an exchange rate provider.
//!
//! # Modules
//!
//! - `rates` - Exchange rate providers (HTTP and static)
//! - `currency` - Cached currency conversion over a rate provider
//! - `tax` - Statutory tax calculation in any pay currency
//! - `payroll` - Period lifecycle and the batch payroll run

pub mod currency;
pub mod payroll;
pub mod rates;
pub mod tax;

pub use currency::{CurrencyError, CurrencyService};
pub use payroll::{
    CurrencyTotals, FailedEmployee, PayrollError, PayrollProcessor, PayrollSummary, RunOutcome,
    SkipReason, SkippedEmployee,
};
pub use rates::{HttpRateProvider, ProviderError, RateProvider, RateTable, StaticRateProvider};
pub use tax::TaxCalculator;
