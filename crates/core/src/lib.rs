//! Core payroll domain logic for Payforge.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, statutory calculations, and state machines live here.
//!
//! # Modules
//!
//! - `currency` - Currency records, exchange rates, and conversion arithmetic
//! - `tax` - Statutory monthly income tax schedule and related rates
//! - `period` - Payroll period lifecycle state machine
//! - `calendar` - Work week definitions and working day counts
//! - `workforce` - Companies, payroll policies, employees, and benefits
//! - `payslip` - Payslip records and totals assembly

pub mod calendar;
pub mod currency;
pub mod payslip;
pub mod period;
pub mod tax;
pub mod workforce;
