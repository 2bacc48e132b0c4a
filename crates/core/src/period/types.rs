//! Period domain types for payroll lifecycle management.
//!
//! This module defines the core types used for managing payroll period
//! status transitions.

use chrono::{DateTime, NaiveDate, Utc};
use payforge_shared::{CompanyId, PayrollPeriodId, UserId};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::period::error::PeriodError;

/// Payroll period status in the processing lifecycle.
///
/// Periods progress through these states from creation to payment.
/// The valid transitions are:
/// - Draft → Processing (claim by a batch run)
/// - Processing → Processed (run completed)
/// - Processed → Approved (approve)
/// - Approved → Paid (payment tooling, outside this engine)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodStatus {
    /// Period is open for configuration; no payslips exist yet.
    Draft,
    /// A batch run holds the period; nothing else may claim it.
    Processing,
    /// Payslips have been generated and await approval.
    Processed,
    /// Payslips are approved and ready for payment.
    Approved,
    /// Salaries have been paid out (immutable).
    Paid,
}

impl PeriodStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Processing => "processing",
            Self::Processed => "processed",
            Self::Approved => "approved",
            Self::Paid => "paid",
        }
    }

    /// Parses a status from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "draft" => Some(Self::Draft),
            "processing" => Some(Self::Processing),
            "processed" => Some(Self::Processed),
            "approved" => Some(Self::Approved),
            "paid" => Some(Self::Paid),
            _ => None,
        }
    }

    /// Returns true if a batch run may claim the period.
    #[must_use]
    pub fn is_claimable(&self) -> bool {
        matches!(self, Self::Draft)
    }

    /// Returns true if no further engine transition applies.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Paid)
    }
}

impl fmt::Display for PeriodStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returns the inclusive calendar-month date range for a period.
///
/// # Errors
///
/// Returns [`PeriodError::InvalidMonth`] when `month` is outside `1..=12`
/// or the year is outside chrono's representable range.
pub fn month_bounds(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate), PeriodError> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or(PeriodError::InvalidMonth { year, month })?;
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    let end = next_month
        .and_then(|d| d.pred_opt())
        .ok_or(PeriodError::InvalidMonth { year, month })?;
    Ok((start, end))
}

/// A payroll period for one company and calendar month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollPeriod {
    /// Unique identifier.
    pub id: PayrollPeriodId,
    /// Company this period belongs to.
    pub company_id: CompanyId,
    /// Calendar year.
    pub year: i32,
    /// Calendar month (1-12).
    pub month: u32,
    /// First day of the month.
    pub start_date: NaiveDate,
    /// Last day of the month.
    pub end_date: NaiveDate,
    /// Current lifecycle status.
    pub status: PeriodStatus,
    /// Free-form description (e.g. "January 2026 payroll").
    pub description: Option<String>,
    /// When the batch run completed.
    pub processed_at: Option<DateTime<Utc>>,
    /// When the period was approved.
    pub approved_at: Option<DateTime<Utc>>,
    /// Who approved the period.
    pub approved_by: Option<UserId>,
    /// When the period was created.
    pub created_at: DateTime<Utc>,
}

impl PayrollPeriod {
    /// Creates a draft period covering one calendar month.
    ///
    /// Start and end dates are always derived from the month, never
    /// supplied by callers.
    ///
    /// # Errors
    ///
    /// Returns [`PeriodError::InvalidMonth`] for an unrepresentable month.
    pub fn for_month(
        company_id: CompanyId,
        year: i32,
        month: u32,
        description: Option<String>,
    ) -> Result<Self, PeriodError> {
        let (start_date, end_date) = month_bounds(year, month)?;
        Ok(Self {
            id: PayrollPeriodId::new(),
            company_id,
            year,
            month,
            start_date,
            end_date,
            status: PeriodStatus::Draft,
            description,
            processed_at: None,
            approved_at: None,
            approved_by: None,
            created_at: Utc::now(),
        })
    }

    /// Returns true if the given date falls within this period.
    #[must_use]
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}

/// Period transition representing a state change with audit data.
///
/// Each variant captures the resulting status and the audit trail
/// information the store must persist alongside it.
#[derive(Debug, Clone)]
pub enum PeriodTransition {
    /// Claim a draft period for a batch run.
    BeginProcessing {
        /// The new status after the claim.
        new_status: PeriodStatus,
    },
    /// Mark a running period as processed.
    Complete {
        /// The new status after completion.
        new_status: PeriodStatus,
        /// When the batch run completed.
        processed_at: DateTime<Utc>,
    },
    /// Approve a processed period.
    Approve {
        /// The new status after approval.
        new_status: PeriodStatus,
        /// The user who approved the period.
        approved_by: UserId,
        /// When the period was approved.
        approved_at: DateTime<Utc>,
    },
}

impl PeriodTransition {
    /// Returns the new status resulting from this transition.
    #[must_use]
    pub fn new_status(&self) -> PeriodStatus {
        match self {
            Self::BeginProcessing { new_status }
            | Self::Complete { new_status, .. }
            | Self::Approve { new_status, .. } => *new_status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_status_as_str() {
        assert_eq!(PeriodStatus::Draft.as_str(), "draft");
        assert_eq!(PeriodStatus::Processing.as_str(), "processing");
        assert_eq!(PeriodStatus::Processed.as_str(), "processed");
        assert_eq!(PeriodStatus::Approved.as_str(), "approved");
        assert_eq!(PeriodStatus::Paid.as_str(), "paid");
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(PeriodStatus::parse("draft"), Some(PeriodStatus::Draft));
        assert_eq!(
            PeriodStatus::parse("PROCESSING"),
            Some(PeriodStatus::Processing)
        );
        assert_eq!(PeriodStatus::parse("Paid"), Some(PeriodStatus::Paid));
        assert_eq!(PeriodStatus::parse("open"), None);
    }

    #[test]
    fn test_month_bounds_regular_month() {
        let (start, end) = month_bounds(2026, 1).unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2026, 1, 31).unwrap());
    }

    #[test]
    fn test_month_bounds_february_leap_year() {
        let (start, end) = month_bounds(2024, 2).unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn test_month_bounds_december_wraps_year() {
        let (start, end) = month_bounds(2025, 12).unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2025, 12, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2025, 12, 31).unwrap());
    }

    #[test]
    fn test_month_bounds_rejects_invalid_month() {
        assert!(matches!(
            month_bounds(2026, 0),
            Err(PeriodError::InvalidMonth { month: 0, .. })
        ));
        assert!(matches!(
            month_bounds(2026, 13),
            Err(PeriodError::InvalidMonth { month: 13, .. })
        ));
    }

    #[test]
    fn test_for_month_builds_draft() {
        let period =
            PayrollPeriod::for_month(CompanyId::new(), 2026, 3, Some("March".to_string()))
                .unwrap();
        assert_eq!(period.status, PeriodStatus::Draft);
        assert_eq!(period.start_date.day(), 1);
        assert_eq!(period.end_date.day(), 31);
        assert!(period.processed_at.is_none());
        assert!(period.approved_by.is_none());
    }

    #[test]
    fn test_contains_date() {
        let period = PayrollPeriod::for_month(CompanyId::new(), 2026, 4, None).unwrap();
        assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 4, 15).unwrap()));
        assert!(!period.contains_date(NaiveDate::from_ymd_opt(2026, 5, 1).unwrap()));
    }
}
