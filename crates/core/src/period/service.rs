//! Period service for payroll lifecycle transitions.
//!
//! This module implements the core state machine logic for moving
//! payroll periods through the processing lifecycle.

use chrono::Utc;
use payforge_shared::UserId;

use crate::period::error::PeriodError;
use crate::period::types::{PeriodStatus, PeriodTransition};

/// Stateless service for managing period lifecycle transitions.
///
/// All methods are associated functions that validate and execute
/// state transitions, returning the appropriate `PeriodTransition`
/// with audit trail information. Persisting the transition (and doing
/// so atomically) is the store's job.
pub struct PeriodService;

impl PeriodService {
    /// Claim a draft period for a batch run.
    ///
    /// # Arguments
    /// * `current_status` - The current status of the period
    ///
    /// # Returns
    /// * `Ok(PeriodTransition::BeginProcessing)` if the transition is valid
    /// * `Err(PeriodError::InvalidTransition)` if not in Draft status
    pub fn begin_processing(
        current_status: PeriodStatus,
    ) -> Result<PeriodTransition, PeriodError> {
        match current_status {
            PeriodStatus::Draft => Ok(PeriodTransition::BeginProcessing {
                new_status: PeriodStatus::Processing,
            }),
            _ => Err(PeriodError::InvalidTransition {
                from: current_status,
                to: PeriodStatus::Processing,
            }),
        }
    }

    /// Mark a running period as processed.
    ///
    /// # Arguments
    /// * `current_status` - The current status of the period
    ///
    /// # Returns
    /// * `Ok(PeriodTransition::Complete)` if the transition is valid
    /// * `Err(PeriodError::InvalidTransition)` if not in Processing status
    pub fn complete(current_status: PeriodStatus) -> Result<PeriodTransition, PeriodError> {
        match current_status {
            PeriodStatus::Processing => Ok(PeriodTransition::Complete {
                new_status: PeriodStatus::Processed,
                processed_at: Utc::now(),
            }),
            _ => Err(PeriodError::InvalidTransition {
                from: current_status,
                to: PeriodStatus::Processed,
            }),
        }
    }

    /// Approve a processed period.
    ///
    /// # Arguments
    /// * `current_status` - The current status of the period
    /// * `approved_by` - The user approving the period
    ///
    /// # Returns
    /// * `Ok(PeriodTransition::Approve)` if the transition is valid
    /// * `Err(PeriodError::InvalidTransition)` if not in Processed status
    pub fn approve(
        current_status: PeriodStatus,
        approved_by: UserId,
    ) -> Result<PeriodTransition, PeriodError> {
        match current_status {
            PeriodStatus::Processed => Ok(PeriodTransition::Approve {
                new_status: PeriodStatus::Approved,
                approved_by,
                approved_at: Utc::now(),
            }),
            _ => Err(PeriodError::InvalidTransition {
                from: current_status,
                to: PeriodStatus::Approved,
            }),
        }
    }

    /// Check if a status transition is valid.
    ///
    /// Valid transitions:
    /// - Draft → Processing (claim)
    /// - Processing → Processed (complete)
    /// - Processed → Approved (approve)
    /// - Approved → Paid (payment tooling)
    ///
    /// # Arguments
    /// * `from` - The current status
    /// * `to` - The target status
    ///
    /// # Returns
    /// `true` if the transition is valid, `false` otherwise
    #[must_use]
    pub fn is_valid_transition(from: PeriodStatus, to: PeriodStatus) -> bool {
        matches!(
            (from, to),
            (PeriodStatus::Draft, PeriodStatus::Processing)
                | (PeriodStatus::Processing, PeriodStatus::Processed)
                | (PeriodStatus::Processed, PeriodStatus::Approved)
                | (PeriodStatus::Approved, PeriodStatus::Paid)
        )
    }
}
