//! In-memory reference backend.
//!
//! A single `RwLock` guards all tables, which is what makes the
//! compare-and-swap transition and the uniqueness checks genuinely
//! atomic: no interleaving can observe a half-applied update.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use payforge_core::currency::{Currency, ExchangeRate};
use payforge_core::payslip::Payslip;
use payforge_core::period::{PayrollPeriod, PeriodStatus, PeriodTransition};
use payforge_core::workforce::{Allowance, Company, CompanyPolicy, Deduction, Employee};
use payforge_shared::{CompanyId, CurrencyCode, EmployeeId, PayrollPeriodId};

use crate::error::StoreError;
use crate::traits::{
    BenefitStore, CompanyStore, CurrencyStore, EmployeeStore, PayslipStore, PeriodStore,
    PolicyStore, RateStore,
};

#[derive(Debug, Default)]
struct Inner {
    companies: HashMap<CompanyId, Company>,
    policies: HashMap<CompanyId, CompanyPolicy>,
    currencies: HashMap<CurrencyCode, Currency>,
    rates: Vec<ExchangeRate>,
    employees: HashMap<EmployeeId, Employee>,
    allowances: Vec<Allowance>,
    deductions: Vec<Deduction>,
    periods: HashMap<PayrollPeriodId, PayrollPeriod>,
    payslips: Vec<Payslip>,
}

/// In-memory store backing tests and the demo runner.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Inner>, StoreError> {
        self.inner
            .read()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Inner>, StoreError> {
        self.inner
            .write()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".to_string()))
    }

    /// Operator recovery tool: force a period back to draft.
    ///
    /// A run that dies after claiming its period leaves it in
    /// `processing`. Resetting to draft makes a rerun possible; the
    /// payslip uniqueness constraint keeps the rerun from double-paying.
    pub fn reset_period_to_draft(&self, id: PayrollPeriodId) -> Result<(), StoreError> {
        let mut inner = self.write()?;
        let period = inner
            .periods
            .get_mut(&id)
            .ok_or_else(|| StoreError::NotFound {
                entity: "payroll_period",
                id: id.to_string(),
            })?;
        period.status = PeriodStatus::Draft;
        period.processed_at = None;
        period.approved_at = None;
        period.approved_by = None;
        Ok(())
    }
}

#[async_trait]
impl CompanyStore for MemoryStore {
    async fn company(&self, id: CompanyId) -> Result<Company, StoreError> {
        self.read()?
            .companies
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                entity: "company",
                id: id.to_string(),
            })
    }

    async fn insert_company(&self, company: Company) -> Result<(), StoreError> {
        self.write()?.companies.insert(company.id, company);
        Ok(())
    }
}

#[async_trait]
impl PolicyStore for MemoryStore {
    async fn policy(&self, company_id: CompanyId) -> Result<CompanyPolicy, StoreError> {
        Ok(self
            .read()?
            .policies
            .get(&company_id)
            .copied()
            .unwrap_or_default())
    }

    async fn put_policy(
        &self,
        company_id: CompanyId,
        policy: CompanyPolicy,
    ) -> Result<(), StoreError> {
        self.write()?.policies.insert(company_id, policy);
        Ok(())
    }
}

#[async_trait]
impl CurrencyStore for MemoryStore {
    async fn currency(&self, code: &CurrencyCode) -> Result<Currency, StoreError> {
        self.read()?
            .currencies
            .get(code)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                entity: "currency",
                id: code.to_string(),
            })
    }

    async fn active_currencies(&self) -> Result<Vec<Currency>, StoreError> {
        let mut currencies: Vec<Currency> = self
            .read()?
            .currencies
            .values()
            .filter(|currency| currency.is_active)
            .cloned()
            .collect();
        currencies.sort_by(|a, b| a.code.cmp(&b.code));
        Ok(currencies)
    }

    async fn insert_currency(&self, currency: Currency) -> Result<(), StoreError> {
        self.write()?
            .currencies
            .insert(currency.code.clone(), currency);
        Ok(())
    }
}

#[async_trait]
impl RateStore for MemoryStore {
    async fn latest_rate(
        &self,
        from: &CurrencyCode,
        to: &CurrencyCode,
        not_before: DateTime<Utc>,
    ) -> Result<Option<ExchangeRate>, StoreError> {
        // max_by_key keeps the last maximal element, so equal timestamps
        // resolve to the most recently appended observation.
        Ok(self
            .read()?
            .rates
            .iter()
            .filter(|rate| {
                rate.from_currency == *from
                    && rate.to_currency == *to
                    && rate.fetched_at >= not_before
            })
            .max_by_key(|rate| rate.fetched_at)
            .cloned())
    }

    async fn append_rate(&self, rate: ExchangeRate) -> Result<(), StoreError> {
        self.write()?.rates.push(rate);
        Ok(())
    }
}

#[async_trait]
impl EmployeeStore for MemoryStore {
    async fn eligible_employees(&self, company_id: CompanyId) -> Result<Vec<Employee>, StoreError> {
        let mut employees: Vec<Employee> = self
            .read()?
            .employees
            .values()
            .filter(|employee| {
                employee.company_id == company_id && employee.is_payroll_eligible()
            })
            .cloned()
            .collect();
        employees.sort_by(|a, b| a.employee_number.cmp(&b.employee_number));
        Ok(employees)
    }

    async fn insert_employee(&self, employee: Employee) -> Result<(), StoreError> {
        self.write()?.employees.insert(employee.id, employee);
        Ok(())
    }
}

#[async_trait]
impl BenefitStore for MemoryStore {
    async fn recurring_allowances(
        &self,
        employee_id: EmployeeId,
    ) -> Result<Vec<Allowance>, StoreError> {
        Ok(self
            .read()?
            .allowances
            .iter()
            .filter(|allowance| {
                allowance.employee_id == employee_id && allowance.applies_to_run()
            })
            .cloned()
            .collect())
    }

    async fn recurring_deductions(
        &self,
        employee_id: EmployeeId,
    ) -> Result<Vec<Deduction>, StoreError> {
        Ok(self
            .read()?
            .deductions
            .iter()
            .filter(|deduction| {
                deduction.employee_id == employee_id && deduction.applies_to_run()
            })
            .cloned()
            .collect())
    }

    async fn insert_allowance(&self, allowance: Allowance) -> Result<(), StoreError> {
        self.write()?.allowances.push(allowance);
        Ok(())
    }

    async fn insert_deduction(&self, deduction: Deduction) -> Result<(), StoreError> {
        self.write()?.deductions.push(deduction);
        Ok(())
    }
}

#[async_trait]
impl PeriodStore for MemoryStore {
    async fn period(&self, id: PayrollPeriodId) -> Result<PayrollPeriod, StoreError> {
        self.read()?
            .periods
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                entity: "payroll_period",
                id: id.to_string(),
            })
    }

    async fn insert_period(&self, period: PayrollPeriod) -> Result<(), StoreError> {
        let mut inner = self.write()?;
        let duplicate = inner.periods.values().any(|existing| {
            existing.company_id == period.company_id
                && existing.year == period.year
                && existing.month == period.month
        });
        if duplicate {
            return Err(StoreError::Conflict {
                entity: "payroll_period",
                constraint: format!(
                    "company {} already has a period for {}-{:02}",
                    period.company_id, period.year, period.month
                ),
            });
        }
        inner.periods.insert(period.id, period);
        Ok(())
    }

    async fn transition_period(
        &self,
        id: PayrollPeriodId,
        expected: PeriodStatus,
        transition: PeriodTransition,
    ) -> Result<PayrollPeriod, StoreError> {
        let mut inner = self.write()?;
        let period = inner
            .periods
            .get_mut(&id)
            .ok_or_else(|| StoreError::NotFound {
                entity: "payroll_period",
                id: id.to_string(),
            })?;
        if period.status != expected {
            return Err(StoreError::StatusConflict {
                found: period.status,
            });
        }
        period.status = transition.new_status();
        match transition {
            PeriodTransition::BeginProcessing { .. } => {}
            PeriodTransition::Complete { processed_at, .. } => {
                period.processed_at = Some(processed_at);
            }
            PeriodTransition::Approve {
                approved_by,
                approved_at,
                ..
            } => {
                period.approved_by = Some(approved_by);
                period.approved_at = Some(approved_at);
            }
        }
        Ok(period.clone())
    }
}

#[async_trait]
impl PayslipStore for MemoryStore {
    async fn payslip_for(
        &self,
        employee_id: EmployeeId,
        period_id: PayrollPeriodId,
    ) -> Result<Option<Payslip>, StoreError> {
        Ok(self
            .read()?
            .payslips
            .iter()
            .find(|payslip| {
                payslip.employee_id == employee_id && payslip.period_id == period_id
            })
            .cloned())
    }

    async fn insert_payslip(&self, payslip: Payslip) -> Result<(), StoreError> {
        let mut inner = self.write()?;
        let duplicate = inner.payslips.iter().any(|existing| {
            existing.employee_id == payslip.employee_id && existing.period_id == payslip.period_id
        });
        if duplicate {
            return Err(StoreError::Conflict {
                entity: "payslip",
                constraint: format!(
                    "employee {} already has a payslip for period {}",
                    payslip.employee_id, payslip.period_id
                ),
            });
        }
        inner.payslips.push(payslip);
        Ok(())
    }

    async fn payslips_for_period(
        &self,
        period_id: PayrollPeriodId,
    ) -> Result<Vec<Payslip>, StoreError> {
        Ok(self
            .read()?
            .payslips
            .iter()
            .filter(|payslip| payslip.period_id == period_id)
            .cloned()
            .collect())
    }
}
