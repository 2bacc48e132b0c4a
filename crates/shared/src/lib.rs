//! Shared types and configuration for Payforge.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe entity references
//! - Currency codes with ISO 4217 normalization
//! - Engine configuration management

pub mod config;
pub mod types;

pub use config::{EngineConfig, RatesConfig};
pub use types::{
    AllowanceId, CompanyId, CurrencyCode, DeductionId, EmployeeId, InvalidCurrencyCode,
    PayrollPeriodId, PayslipId, UserId,
};
