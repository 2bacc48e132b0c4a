//! Payslip totals assembly.
//!
//! All monetary lines are rounded to money precision first; totals are
//! then sums of the rounded stored lines, so the arithmetic invariants
//! hold exactly on what gets persisted:
//!
//! - `total_earnings = basic_salary + allowances + overtime + bonus`
//! - `total_deductions = income_tax + levy + social_contribution + other_deductions`
//! - `net_pay = total_earnings - total_deductions` (may be negative)
//! - `*_base = round_money(* × exchange_rate)`

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::currency::conversion::round_money;

/// Resolved pay component amounts, all in the employee's pay currency.
#[derive(Debug, Clone, Default)]
pub struct PayComponents {
    /// Monthly basic salary.
    pub basic_salary: Decimal,
    /// Overtime pay.
    pub overtime: Decimal,
    /// Sum of resolved allowances.
    pub allowances: Decimal,
    /// Bonus pay.
    pub bonus: Decimal,
    /// Monthly income tax.
    pub income_tax: Decimal,
    /// Levy on the income tax.
    pub levy: Decimal,
    /// Social security contribution.
    pub social_contribution: Decimal,
    /// Sum of resolved non-statutory deductions.
    pub other_deductions: Decimal,
}

/// Rounded payslip money lines with their totals and base-currency mirrors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayslipTotals {
    /// Basic salary line.
    pub basic_salary: Decimal,
    /// Overtime line.
    pub overtime: Decimal,
    /// Allowances line.
    pub allowances: Decimal,
    /// Bonus line.
    pub bonus: Decimal,
    /// Sum of the four earning lines.
    pub total_earnings: Decimal,
    /// Income tax line.
    pub income_tax: Decimal,
    /// Levy line.
    pub levy: Decimal,
    /// Social security contribution line.
    pub social_contribution: Decimal,
    /// Other deductions line.
    pub other_deductions: Decimal,
    /// Sum of the four deduction lines.
    pub total_deductions: Decimal,
    /// Earnings minus deductions; negative when deductions exceed pay.
    pub net_pay: Decimal,
    /// Total earnings in the company base currency.
    pub total_earnings_base: Decimal,
    /// Total deductions in the company base currency.
    pub total_deductions_base: Decimal,
    /// Net pay in the company base currency.
    pub net_pay_base: Decimal,
}

/// Assembles rounded payslip totals from resolved component amounts.
///
/// `exchange_rate` converts the pay currency into the company base
/// currency and is frozen into the payslip by the caller.
#[must_use]
pub fn compute_totals(components: &PayComponents, exchange_rate: Decimal) -> PayslipTotals {
    let basic_salary = round_money(components.basic_salary);
    let overtime = round_money(components.overtime);
    let allowances = round_money(components.allowances);
    let bonus = round_money(components.bonus);
    let total_earnings = basic_salary + overtime + allowances + bonus;

    let income_tax = round_money(components.income_tax);
    let levy = round_money(components.levy);
    let social_contribution = round_money(components.social_contribution);
    let other_deductions = round_money(components.other_deductions);
    let total_deductions = income_tax + levy + social_contribution + other_deductions;

    let net_pay = total_earnings - total_deductions;

    PayslipTotals {
        basic_salary,
        overtime,
        allowances,
        bonus,
        total_earnings,
        income_tax,
        levy,
        social_contribution,
        other_deductions,
        total_deductions,
        net_pay,
        total_earnings_base: round_money(total_earnings * exchange_rate),
        total_deductions_base: round_money(total_deductions * exchange_rate),
        net_pay_base: round_money(net_pay * exchange_rate),
    }
}
