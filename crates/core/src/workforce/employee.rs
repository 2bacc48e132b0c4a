//! Employee types.

use payforge_shared::{CompanyId, CurrencyCode, EmployeeId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Employment status of an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmploymentStatus {
    /// Employed and paid.
    Active,
    /// Temporarily not paid (e.g. unpaid leave).
    Suspended,
    /// No longer employed.
    Terminated,
}

/// An employee of a company.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier.
    pub id: EmployeeId,
    /// Company this employee belongs to.
    pub company_id: CompanyId,
    /// Company-scoped employee number (e.g. "EMP-0042"), used in logs.
    pub employee_number: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Currency the employee is paid in.
    pub pay_currency: CurrencyCode,
    /// Monthly basic salary in the pay currency. Never negative.
    pub basic_salary: Decimal,
    /// Current employment status.
    pub employment_status: EmploymentStatus,
    /// Soft-delete flag; inactive employees never enter a run.
    pub is_active: bool,
}

impl Employee {
    /// Returns true if this employee participates in payroll runs.
    #[must_use]
    pub fn is_payroll_eligible(&self) -> bool {
        self.is_active && self.employment_status == EmploymentStatus::Active
    }

    /// Full display name.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
