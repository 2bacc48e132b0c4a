//! Store error types.

use payforge_core::period::PeriodStatus;
use thiserror::Error;

/// Errors surfaced by store implementations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The requested record does not exist.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Entity kind (e.g. "company").
        entity: &'static str,
        /// Identifier that missed.
        id: String,
    },

    /// An insert violated a uniqueness constraint.
    #[error("{entity} conflict: {constraint}")]
    Conflict {
        /// Entity kind (e.g. "payslip").
        entity: &'static str,
        /// The violated constraint, for logs.
        constraint: String,
    },

    /// A compare-and-swap transition lost the race.
    #[error("period status is {found}, update lost the compare-and-swap")]
    StatusConflict {
        /// The status actually found in the store.
        found: PeriodStatus,
    },

    /// The backend could not serve the request.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
