//! Payslip record types.

use chrono::{DateTime, NaiveDate, Utc};
use payforge_shared::{CompanyId, CurrencyCode, EmployeeId, PayrollPeriodId, PayslipId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::payslip::compute::PayslipTotals;

/// Payment status of a payslip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayslipStatus {
    /// Created by a batch run; not yet approved.
    Generated,
    /// Approved together with its period.
    Approved,
    /// Paid out by payment tooling.
    Paid,
}

/// An immutable payroll computation result for one employee and period.
///
/// Exactly one payslip exists per (employee, period). The exchange rate
/// is frozen at computation time; later rate changes never alter a
/// stored payslip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payslip {
    /// Unique identifier.
    pub id: PayslipId,
    /// Company this payslip belongs to.
    pub company_id: CompanyId,
    /// Employee this payslip belongs to.
    pub employee_id: EmployeeId,
    /// Period this payslip was generated for.
    pub period_id: PayrollPeriodId,
    /// Currency the pay lines are denominated in.
    pub currency: CurrencyCode,
    /// Pay currency to company base currency rate, frozen forever.
    pub exchange_rate: Decimal,
    /// Basic salary line.
    pub basic_salary: Decimal,
    /// Overtime line.
    pub overtime: Decimal,
    /// Allowances line.
    pub allowances: Decimal,
    /// Bonus line.
    pub bonus: Decimal,
    /// Sum of the earning lines.
    pub total_earnings: Decimal,
    /// Income tax line.
    pub income_tax: Decimal,
    /// Levy line.
    pub levy: Decimal,
    /// Social security contribution line.
    pub social_contribution: Decimal,
    /// Other deductions line.
    pub other_deductions: Decimal,
    /// Sum of the deduction lines.
    pub total_deductions: Decimal,
    /// Earnings minus deductions; may be negative.
    pub net_pay: Decimal,
    /// Total earnings in the company base currency.
    pub total_earnings_base: Decimal,
    /// Total deductions in the company base currency.
    pub total_deductions_base: Decimal,
    /// Net pay in the company base currency.
    pub net_pay_base: Decimal,
    /// Working days in the period for the company work week.
    pub working_days: u32,
    /// Days the employee actually worked.
    pub days_worked: u32,
    /// Days the employee was absent.
    pub days_absent: u32,
    /// Payment status.
    pub status: PayslipStatus,
    /// Reference assigned by payment tooling.
    pub payment_reference: Option<String>,
    /// Date the payslip was paid.
    pub payment_date: Option<NaiveDate>,
    /// When this payslip was created.
    pub created_at: DateTime<Utc>,
}

impl Payslip {
    /// Builds a freshly generated payslip from computed totals.
    #[must_use]
    pub fn from_totals(
        company_id: CompanyId,
        employee_id: EmployeeId,
        period_id: PayrollPeriodId,
        currency: CurrencyCode,
        exchange_rate: Decimal,
        totals: PayslipTotals,
        working_days: u32,
        days_worked: u32,
    ) -> Self {
        Self {
            id: PayslipId::new(),
            company_id,
            employee_id,
            period_id,
            currency,
            exchange_rate,
            basic_salary: totals.basic_salary,
            overtime: totals.overtime,
            allowances: totals.allowances,
            bonus: totals.bonus,
            total_earnings: totals.total_earnings,
            income_tax: totals.income_tax,
            levy: totals.levy,
            social_contribution: totals.social_contribution,
            other_deductions: totals.other_deductions,
            total_deductions: totals.total_deductions,
            net_pay: totals.net_pay,
            total_earnings_base: totals.total_earnings_base,
            total_deductions_base: totals.total_deductions_base,
            net_pay_base: totals.net_pay_base,
            working_days,
            days_worked,
            days_absent: working_days.saturating_sub(days_worked),
            status: PayslipStatus::Generated,
            payment_reference: None,
            payment_date: None,
            created_at: Utc::now(),
        }
    }
}
