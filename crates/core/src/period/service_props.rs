//! Property-based tests for PeriodService.

use proptest::prelude::*;
use uuid::Uuid;

use crate::period::error::PeriodError;
use crate::period::service::PeriodService;
use crate::period::types::{PeriodStatus, PeriodTransition};
use payforge_shared::UserId;

/// Strategy for generating random PeriodStatus values.
fn arb_status() -> impl Strategy<Value = PeriodStatus> {
    prop_oneof![
        Just(PeriodStatus::Draft),
        Just(PeriodStatus::Processing),
        Just(PeriodStatus::Processed),
        Just(PeriodStatus::Approved),
        Just(PeriodStatus::Paid),
    ]
}

/// Strategy for generating random user IDs.
fn arb_user_id() -> impl Strategy<Value = UserId> {
    any::<u128>().prop_map(|raw| UserId::from_uuid(Uuid::from_u128(raw)))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Claiming from any non-Draft status returns InvalidTransition with
    /// the offending status in the error.
    #[test]
    fn prop_begin_processing_rejects_non_draft(status in arb_status()) {
        prop_assume!(status != PeriodStatus::Draft);

        match PeriodService::begin_processing(status) {
            Err(PeriodError::InvalidTransition { from, to }) => {
                prop_assert_eq!(from, status);
                prop_assert_eq!(to, PeriodStatus::Processing);
            }
            _ => prop_assert!(false, "Expected InvalidTransition error"),
        }
    }

    /// Completing from any non-Processing status returns InvalidTransition.
    #[test]
    fn prop_complete_rejects_non_processing(status in arb_status()) {
        prop_assume!(status != PeriodStatus::Processing);

        match PeriodService::complete(status) {
            Err(PeriodError::InvalidTransition { from, to }) => {
                prop_assert_eq!(from, status);
                prop_assert_eq!(to, PeriodStatus::Processed);
            }
            _ => prop_assert!(false, "Expected InvalidTransition error"),
        }
    }

    /// Approving from any non-Processed status returns InvalidTransition.
    #[test]
    fn prop_approve_rejects_non_processed(
        status in arb_status(),
        approver in arb_user_id()
    ) {
        prop_assume!(status != PeriodStatus::Processed);

        match PeriodService::approve(status, approver) {
            Err(PeriodError::InvalidTransition { from, to }) => {
                prop_assert_eq!(from, status);
                prop_assert_eq!(to, PeriodStatus::Approved);
            }
            _ => prop_assert!(false, "Expected InvalidTransition error"),
        }
    }

    /// Approve stamps the approver into the audit fields unchanged.
    #[test]
    fn prop_approve_preserves_approver(approver in arb_user_id()) {
        let result = PeriodService::approve(PeriodStatus::Processed, approver);
        prop_assert!(result.is_ok());
        if let Ok(PeriodTransition::Approve { approved_by, .. }) = result {
            prop_assert_eq!(approved_by, approver);
        } else {
            prop_assert!(false, "Expected Approve transition");
        }
    }

    /// Every transition the service hands out passes is_valid_transition.
    #[test]
    fn prop_issued_transitions_are_valid(status in arb_status()) {
        if let Ok(transition) = PeriodService::begin_processing(status) {
            prop_assert!(PeriodService::is_valid_transition(status, transition.new_status()));
        }
        if let Ok(transition) = PeriodService::complete(status) {
            prop_assert!(PeriodService::is_valid_transition(status, transition.new_status()));
        }
        if let Ok(transition) = PeriodService::approve(status, UserId::new()) {
            prop_assert!(PeriodService::is_valid_transition(status, transition.new_status()));
        }
    }

    /// is_valid_transition matches the lifecycle chain exactly.
    #[test]
    fn prop_is_valid_transition_consistency(
        from in arb_status(),
        to in arb_status()
    ) {
        let is_valid = PeriodService::is_valid_transition(from, to);

        let expected_valid = matches!(
            (from, to),
            (PeriodStatus::Draft, PeriodStatus::Processing)
                | (PeriodStatus::Processing, PeriodStatus::Processed)
                | (PeriodStatus::Processed, PeriodStatus::Approved)
                | (PeriodStatus::Approved, PeriodStatus::Paid)
        );

        prop_assert_eq!(is_valid, expected_valid,
            "is_valid_transition({:?}, {:?}) = {}, expected {}",
            from, to, is_valid, expected_valid);
    }
}

#[cfg(test)]
mod edge_case_tests {
    use super::*;

    /// Test all 25 combinations of is_valid_transition (5x5 matrix).
    #[test]
    fn test_is_valid_transition_all_combinations() {
        let statuses = [
            PeriodStatus::Draft,
            PeriodStatus::Processing,
            PeriodStatus::Processed,
            PeriodStatus::Approved,
            PeriodStatus::Paid,
        ];

        let valid_transitions = [
            (PeriodStatus::Draft, PeriodStatus::Processing),
            (PeriodStatus::Processing, PeriodStatus::Processed),
            (PeriodStatus::Processed, PeriodStatus::Approved),
            (PeriodStatus::Approved, PeriodStatus::Paid),
        ];

        for from in &statuses {
            for to in &statuses {
                let is_valid = PeriodService::is_valid_transition(*from, *to);
                let expected = valid_transitions.contains(&(*from, *to));
                assert_eq!(
                    is_valid, expected,
                    "is_valid_transition({:?}, {:?}) = {}, expected {}",
                    from, to, is_valid, expected
                );
            }
        }
    }

    /// Same status transitions are never valid.
    #[test]
    fn test_same_status_transitions_invalid() {
        let statuses = [
            PeriodStatus::Draft,
            PeriodStatus::Processing,
            PeriodStatus::Processed,
            PeriodStatus::Approved,
            PeriodStatus::Paid,
        ];

        for status in &statuses {
            assert!(
                !PeriodService::is_valid_transition(*status, *status),
                "Same status transition should be invalid: {:?} -> {:?}",
                status,
                status
            );
        }
    }

    /// Paid is terminal: nothing transitions out of it.
    #[test]
    fn test_paid_cannot_transition() {
        let statuses = [
            PeriodStatus::Draft,
            PeriodStatus::Processing,
            PeriodStatus::Processed,
            PeriodStatus::Approved,
            PeriodStatus::Paid,
        ];

        for to in &statuses {
            assert!(
                !PeriodService::is_valid_transition(PeriodStatus::Paid, *to),
                "Paid should not transition to {:?}",
                to
            );
        }
    }
}
