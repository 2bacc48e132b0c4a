//! Persistence contracts, one trait per aggregate.
//!
//! Implementations must be safe to share across tasks; every trait is
//! `Send + Sync` so services can hold stores behind an `Arc`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use payforge_core::currency::{Currency, ExchangeRate};
use payforge_core::payslip::Payslip;
use payforge_core::period::{PayrollPeriod, PeriodStatus, PeriodTransition};
use payforge_core::workforce::{Allowance, Company, CompanyPolicy, Deduction, Employee};
use payforge_shared::{CompanyId, CurrencyCode, EmployeeId, PayrollPeriodId};

use crate::error::StoreError;

/// Company records.
#[async_trait]
pub trait CompanyStore: Send + Sync {
    /// Fetches a company by id.
    async fn company(&self, id: CompanyId) -> Result<Company, StoreError>;

    /// Inserts a new company.
    async fn insert_company(&self, company: Company) -> Result<(), StoreError>;
}

/// Statutory payroll policies.
#[async_trait]
pub trait PolicyStore: Send + Sync {
    /// Fetches the policy for a company.
    ///
    /// Companies without a stored policy resolve to
    /// [`CompanyPolicy::default`], never to an error.
    async fn policy(&self, company_id: CompanyId) -> Result<CompanyPolicy, StoreError>;

    /// Stores or replaces the policy for a company.
    async fn put_policy(
        &self,
        company_id: CompanyId,
        policy: CompanyPolicy,
    ) -> Result<(), StoreError>;
}

/// Currency reference data.
#[async_trait]
pub trait CurrencyStore: Send + Sync {
    /// Fetches a currency by code.
    async fn currency(&self, code: &CurrencyCode) -> Result<Currency, StoreError>;

    /// Lists active currencies, ordered by code.
    async fn active_currencies(&self) -> Result<Vec<Currency>, StoreError>;

    /// Inserts a new currency.
    async fn insert_currency(&self, currency: Currency) -> Result<(), StoreError>;
}

/// The append-only exchange rate log.
#[async_trait]
pub trait RateStore: Send + Sync {
    /// Most recent `from` → `to` rate fetched at or after `not_before`.
    async fn latest_rate(
        &self,
        from: &CurrencyCode,
        to: &CurrencyCode,
        not_before: DateTime<Utc>,
    ) -> Result<Option<ExchangeRate>, StoreError>;

    /// Appends an observation to the log. Never overwrites.
    async fn append_rate(&self, rate: ExchangeRate) -> Result<(), StoreError>;
}

/// Employee records.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Lists payroll-eligible employees of a company (active flag set and
    /// employment status active), ordered by employee number.
    async fn eligible_employees(&self, company_id: CompanyId) -> Result<Vec<Employee>, StoreError>;

    /// Inserts a new employee.
    async fn insert_employee(&self, employee: Employee) -> Result<(), StoreError>;
}

/// Allowance and deduction rows.
#[async_trait]
pub trait BenefitStore: Send + Sync {
    /// Recurring active allowances for an employee.
    async fn recurring_allowances(
        &self,
        employee_id: EmployeeId,
    ) -> Result<Vec<Allowance>, StoreError>;

    /// Recurring active non-statutory deductions for an employee.
    /// Statutory amounts are computed by the engine, never read as rows.
    async fn recurring_deductions(
        &self,
        employee_id: EmployeeId,
    ) -> Result<Vec<Deduction>, StoreError>;

    /// Inserts a new allowance.
    async fn insert_allowance(&self, allowance: Allowance) -> Result<(), StoreError>;

    /// Inserts a new deduction.
    async fn insert_deduction(&self, deduction: Deduction) -> Result<(), StoreError>;
}

/// Payroll period records and their lifecycle.
#[async_trait]
pub trait PeriodStore: Send + Sync {
    /// Fetches a period by id.
    async fn period(&self, id: PayrollPeriodId) -> Result<PayrollPeriod, StoreError>;

    /// Inserts a new period.
    ///
    /// (company, year, month) is unique; a duplicate fails with
    /// [`StoreError::Conflict`].
    async fn insert_period(&self, period: PayrollPeriod) -> Result<(), StoreError>;

    /// Applies a lifecycle transition as an atomic compare-and-swap.
    ///
    /// The transition is applied only if the stored status still equals
    /// `expected`; otherwise the call fails with
    /// [`StoreError::StatusConflict`] carrying the status actually found.
    /// Returns the updated period.
    async fn transition_period(
        &self,
        id: PayrollPeriodId,
        expected: PeriodStatus,
        transition: PeriodTransition,
    ) -> Result<PayrollPeriod, StoreError>;
}

/// Payslip records.
#[async_trait]
pub trait PayslipStore: Send + Sync {
    /// Fetches the payslip for an (employee, period) pair, if any.
    async fn payslip_for(
        &self,
        employee_id: EmployeeId,
        period_id: PayrollPeriodId,
    ) -> Result<Option<Payslip>, StoreError>;

    /// Inserts a new payslip.
    ///
    /// (employee, period) is unique; a duplicate fails with
    /// [`StoreError::Conflict`].
    async fn insert_payslip(&self, payslip: Payslip) -> Result<(), StoreError>;

    /// Lists every payslip of a period.
    async fn payslips_for_period(
        &self,
        period_id: PayrollPeriodId,
    ) -> Result<Vec<Payslip>, StoreError>;
}

/// Everything a full payroll run needs from persistence.
pub trait PayrollStore:
    CompanyStore
    + PolicyStore
    + CurrencyStore
    + RateStore
    + EmployeeStore
    + BenefitStore
    + PeriodStore
    + PayslipStore
{
}

impl<T> PayrollStore for T where
    T: CompanyStore
        + PolicyStore
        + CurrencyStore
        + RateStore
        + EmployeeStore
        + BenefitStore
        + PeriodStore
        + PayslipStore
{
}
