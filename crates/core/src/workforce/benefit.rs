//! Allowance and deduction types.

use payforge_shared::{AllowanceId, CompanyId, CurrencyCode, DeductionId, EmployeeId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a benefit amount is determined.
///
/// The two cases are mutually exclusive by construction; a row can no
/// longer carry both a fixed amount and a percentage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "basis", rename_all = "snake_case")]
pub enum BenefitBasis {
    /// A fixed amount, possibly in a currency other than the employee's
    /// pay currency (converted at run time).
    Fixed {
        /// The amount.
        amount: Decimal,
        /// Currency the amount is denominated in.
        currency: CurrencyCode,
    },
    /// A percentage of the employee's basic salary, resolved in the pay
    /// currency with no conversion.
    PercentOfBasic {
        /// Percentage, e.g. `10` for 10%.
        percent: Decimal,
    },
}

/// Resolves a percentage-of-basic benefit against a basic salary.
///
/// Fixed bases never go through this; their resolution may require a
/// currency conversion and therefore lives with the caller.
#[must_use]
pub fn percent_of_basic(basic_salary: Decimal, percent: Decimal) -> Decimal {
    basic_salary * percent / Decimal::ONE_HUNDRED
}

/// A recurring or one-off allowance for an employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Allowance {
    /// Unique identifier.
    pub id: AllowanceId,
    /// Company this allowance belongs to.
    pub company_id: CompanyId,
    /// Employee this allowance applies to.
    pub employee_id: EmployeeId,
    /// Display name (e.g. "Housing").
    pub name: String,
    /// How the amount is determined.
    pub basis: BenefitBasis,
    /// Recurring allowances apply to every run; one-off rows do not.
    pub is_recurring: bool,
    /// Inactive rows never apply.
    pub is_active: bool,
}

impl Allowance {
    /// Returns true if this allowance participates in a payroll run.
    #[must_use]
    pub fn applies_to_run(&self) -> bool {
        self.is_recurring && self.is_active
    }
}

/// A recurring or one-off deduction for an employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deduction {
    /// Unique identifier.
    pub id: DeductionId,
    /// Company this deduction belongs to.
    pub company_id: CompanyId,
    /// Employee this deduction applies to.
    pub employee_id: EmployeeId,
    /// Display name (e.g. "Union dues").
    pub name: String,
    /// How the amount is determined.
    pub basis: BenefitBasis,
    /// Statutory rows are computed by the engine, never summed from
    /// stored rows.
    pub is_statutory: bool,
    /// Recurring deductions apply to every run; one-off rows do not.
    pub is_recurring: bool,
    /// Inactive rows never apply.
    pub is_active: bool,
}

impl Deduction {
    /// Returns true if this deduction participates in a payroll run as
    /// an "other deduction".
    #[must_use]
    pub fn applies_to_run(&self) -> bool {
        self.is_recurring && self.is_active && !self.is_statutory
    }
}
