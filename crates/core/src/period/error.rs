//! Period error types for payroll lifecycle management.

use thiserror::Error;

use crate::period::types::PeriodStatus;

/// Errors that can occur during period operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PeriodError {
    /// Attempted an invalid status transition.
    #[error("Invalid period transition from {from} to {to}")]
    InvalidTransition {
        /// The current status.
        from: PeriodStatus,
        /// The attempted target status.
        to: PeriodStatus,
    },

    /// Year/month pair does not name a calendar month.
    #[error("Invalid period month: {year}-{month}")]
    InvalidMonth {
        /// The requested year.
        year: i32,
        /// The requested month.
        month: u32,
    },
}
