//! Company and payroll policy types.

use payforge_shared::{CompanyId, CurrencyCode};
use serde::{Deserialize, Serialize};

use crate::calendar::WorkWeek;

/// A tenant company.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    /// Unique identifier.
    pub id: CompanyId,
    /// Legal name.
    pub name: String,
    /// Short code used in references and logs (e.g. "ACME").
    pub code: String,
    /// Currency consolidated reporting is expressed in.
    pub base_currency: CurrencyCode,
    /// Work week shape used for working day counts.
    pub work_week: WorkWeek,
}

/// Statutory payroll policy for a company.
///
/// Companies without a stored policy run with everything enabled; a
/// missing row must never silently skip statutory deductions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CompanyPolicy {
    /// Compute monthly income tax.
    pub income_tax_enabled: bool,
    /// Compute the levy on income tax.
    pub levy_enabled: bool,
    /// Compute the social security contribution.
    pub social_contribution_enabled: bool,
}

impl Default for CompanyPolicy {
    fn default() -> Self {
        Self {
            income_tax_enabled: true,
            levy_enabled: true,
            social_contribution_enabled: true,
        }
    }
}
