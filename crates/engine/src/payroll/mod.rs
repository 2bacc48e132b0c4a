//! Period lifecycle and the batch payroll run.

pub mod processor;
pub mod summary;

pub use processor::{
    FailedEmployee, PayrollError, PayrollProcessor, RunOutcome, SkipReason, SkippedEmployee,
};
pub use summary::{CurrencyTotals, PayrollSummary};
