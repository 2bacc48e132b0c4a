//! Period-level aggregation of generated payslips.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;

use payforge_core::payslip::Payslip;
use payforge_shared::CurrencyCode;

/// Totals for one pay currency within a period, in that currency.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CurrencyTotals {
    /// Payslips denominated in this currency.
    pub employee_count: usize,
    /// Sum of gross earnings.
    pub total_earnings: Decimal,
    /// Sum of net pay.
    pub total_net_pay: Decimal,
}

/// Aggregated view of a period's payslips.
///
/// Base-currency totals come from the mirrors stored on each payslip at
/// generation time; the statutory totals are re-derived line by line at
/// each payslip's stored rate. Summaries are computed per call and never
/// persisted, so they always reflect the payslips as stored.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PayrollSummary {
    /// Number of payslips in the period.
    pub total_employees: usize,
    /// Gross earnings in the company base currency.
    pub total_earnings_base: Decimal,
    /// Deductions in the company base currency.
    pub total_deductions_base: Decimal,
    /// Net pay in the company base currency.
    pub total_net_pay_base: Decimal,
    /// Income tax in the company base currency.
    pub total_income_tax_base: Decimal,
    /// Social contributions in the company base currency.
    pub total_social_contribution_base: Decimal,
    /// Per-currency totals, keyed by pay currency.
    pub by_currency: HashMap<CurrencyCode, CurrencyTotals>,
}

impl PayrollSummary {
    /// Builds the summary for one period's payslips.
    #[must_use]
    pub fn from_payslips(payslips: &[Payslip]) -> Self {
        let mut summary = Self {
            total_employees: payslips.len(),
            ..Self::default()
        };

        for slip in payslips {
            summary.total_earnings_base += slip.total_earnings_base;
            summary.total_deductions_base += slip.total_deductions_base;
            summary.total_net_pay_base += slip.net_pay_base;
            summary.total_income_tax_base += slip.income_tax * slip.exchange_rate;
            summary.total_social_contribution_base +=
                slip.social_contribution * slip.exchange_rate;

            let entry = summary.by_currency.entry(slip.currency.clone()).or_default();
            entry.employee_count += 1;
            entry.total_earnings += slip.total_earnings;
            entry.total_net_pay += slip.net_pay;
        }

        summary
    }
}
