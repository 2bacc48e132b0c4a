//! Payroll period lifecycle management.
//!
//! This module implements the period state machine that gates batch
//! processing and approval.
//!
//! # Modules
//!
//! - `types` - Period domain types (PeriodStatus, PayrollPeriod, PeriodTransition)
//! - `error` - Period-specific error types
//! - `service` - State transition logic

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use error::PeriodError;
pub use service::PeriodService;
pub use types::{month_bounds, PayrollPeriod, PeriodStatus, PeriodTransition};
