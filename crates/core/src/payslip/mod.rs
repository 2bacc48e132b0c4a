//! Payslip records and totals assembly.

pub mod compute;
pub mod types;

pub use compute::{compute_totals, PayComponents, PayslipTotals};
pub use types::{Payslip, PayslipStatus};
