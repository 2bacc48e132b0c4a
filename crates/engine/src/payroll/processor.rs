//! Batch payroll run over a claimed period.
//!
//! A run claims its period with an atomic `Draft` → `Processing` swap, so
//! only one writer ever generates payslips for a period. Employees are then
//! processed one at a time; a bad employee row lands in the run report
//! instead of aborting the batch.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use payforge_core::calendar;
use payforge_core::payslip::{compute_totals, PayComponents, Payslip};
use payforge_core::period::{
    PayrollPeriod, PeriodError, PeriodService, PeriodStatus, PeriodTransition,
};
use payforge_core::workforce::{percent_of_basic, BenefitBasis, Company, CompanyPolicy, Employee};
use payforge_shared::{CompanyId, EmployeeId, PayrollPeriodId, UserId};
use payforge_store::{PayrollStore, StoreError};

use crate::currency::{CurrencyError, CurrencyService};
use crate::payroll::summary::PayrollSummary;
use crate::tax::TaxCalculator;

/// Errors that can occur while running payroll.
#[derive(Debug, Error)]
pub enum PayrollError {
    /// The period is not in the status the operation requires.
    #[error("payroll period is {found}, not {required}")]
    InvalidState {
        /// The status actually found.
        found: PeriodStatus,
        /// The status the operation requires.
        required: PeriodStatus,
    },

    /// The period id does not exist.
    #[error("payroll period not found")]
    PeriodNotFound,

    /// The company already has a period for this month.
    #[error("payroll period for {year}-{month:02} already exists")]
    PeriodExists {
        /// Requested year.
        year: i32,
        /// Requested month.
        month: u32,
    },

    /// The year/month pair does not name a calendar month.
    #[error("invalid payroll month {year}-{month}")]
    InvalidMonth {
        /// Requested year.
        year: i32,
        /// Requested month.
        month: u32,
    },

    /// A currency conversion failed.
    #[error(transparent)]
    Currency(#[from] CurrencyError),

    /// The store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Why an employee was left out of a run without counting as a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// A payslip for this employee and period already exists.
    PayslipExists,
}

/// An employee skipped by a run, with the reason.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedEmployee {
    /// The skipped employee.
    pub employee_id: EmployeeId,
    /// Their human-readable number, for run reports.
    pub employee_number: String,
    /// Why they were skipped.
    pub reason: SkipReason,
}

/// An employee whose payslip could not be generated.
#[derive(Debug, Clone, Serialize)]
pub struct FailedEmployee {
    /// The failed employee.
    pub employee_id: EmployeeId,
    /// Their human-readable number, for run reports.
    pub employee_number: String,
    /// The rendered error.
    pub reason: String,
}

/// Per-employee report of a completed run.
///
/// A run that reaches `Processed` always returns an outcome; employees the
/// run could not pay are listed here rather than surfaced as errors.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunOutcome {
    /// Employees a payslip was generated for.
    pub succeeded: Vec<EmployeeId>,
    /// Employees skipped without error.
    pub skipped: Vec<SkippedEmployee>,
    /// Employees whose payslip generation failed.
    pub failed: Vec<FailedEmployee>,
}

enum EmployeeOutcome {
    Created,
    Skipped(SkipReason),
}

/// Orchestrates the payroll period lifecycle and the batch run itself.
///
/// The processor owns no state beyond its collaborators; every run reads
/// company, policy, and employee data fresh from the store.
pub struct PayrollProcessor<S> {
    store: Arc<S>,
    currency: CurrencyService<S>,
    tax: TaxCalculator<S>,
}

impl<S> Clone for PayrollProcessor<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            currency: self.currency.clone(),
            tax: self.tax.clone(),
        }
    }
}

impl<S> PayrollProcessor<S> {
    /// Creates a processor over a store and a currency service.
    #[must_use]
    pub fn new(store: Arc<S>, currency: CurrencyService<S>) -> Self {
        Self {
            store,
            tax: TaxCalculator::new(currency.clone()),
            currency,
        }
    }
}

impl<S> PayrollProcessor<S>
where
    S: PayrollStore + 'static,
{
    /// Creates a draft payroll period for a calendar month.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::InvalidMonth`] if the year/month pair names
    /// no calendar month, [`PayrollError::PeriodExists`] if the company
    /// already has a period for that month, or [`PayrollError::Store`] if
    /// the store fails.
    pub async fn create_period(
        &self,
        company_id: CompanyId,
        year: i32,
        month: u32,
        description: Option<String>,
    ) -> Result<PayrollPeriod, PayrollError> {
        let period = PayrollPeriod::for_month(company_id, year, month, description)
            .map_err(|_| PayrollError::InvalidMonth { year, month })?;

        match self.store.insert_period(period.clone()).await {
            Ok(()) => {
                info!(company_id = %company_id, year, month, "Payroll period created");
                Ok(period)
            }
            Err(StoreError::Conflict { .. }) => Err(PayrollError::PeriodExists { year, month }),
            Err(err) => Err(err.into()),
        }
    }

    /// Runs payroll for every eligible employee of the period's company.
    ///
    /// The period is claimed with an atomic `Draft` → `Processing` swap
    /// before any payslip is written, and moved to `Processed` once the
    /// batch finishes. Employees that already have a payslip are skipped;
    /// employees whose payslip cannot be computed are reported in the
    /// outcome without stopping the batch.
    ///
    /// A failure between the claim and completion leaves the period in
    /// `Processing`; recovering such a period is an operator action, not
    /// something the engine retries on its own.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::PeriodNotFound`] for an unknown period,
    /// [`PayrollError::InvalidState`] if the period is not in `Draft` (or
    /// another run claimed it first), or [`PayrollError::Store`] if loading
    /// run inputs fails.
    pub async fn process(&self, period_id: PayrollPeriodId) -> Result<RunOutcome, PayrollError> {
        let period = self.load_period(period_id).await?;
        let claim = PeriodService::begin_processing(period.status)
            .map_err(invalid_state(PeriodStatus::Draft))?;
        let claimed = self
            .apply_transition(period_id, PeriodStatus::Draft, claim)
            .await?;

        let employees = self.store.eligible_employees(claimed.company_id).await?;
        let company = self.store.company(claimed.company_id).await?;
        let policy = self.store.policy(claimed.company_id).await?;

        info!(
            period_id = %claimed.id,
            year = claimed.year,
            month = claimed.month,
            employees = employees.len(),
            "Payroll run started"
        );

        let mut outcome = RunOutcome::default();
        for employee in &employees {
            match self
                .process_employee(employee, &claimed, &company, &policy)
                .await
            {
                Ok(EmployeeOutcome::Created) => outcome.succeeded.push(employee.id),
                Ok(EmployeeOutcome::Skipped(reason)) => outcome.skipped.push(SkippedEmployee {
                    employee_id: employee.id,
                    employee_number: employee.employee_number.clone(),
                    reason,
                }),
                Err(err) => {
                    warn!(
                        employee_number = %employee.employee_number,
                        error = %err,
                        "Failed to generate payslip"
                    );
                    outcome.failed.push(FailedEmployee {
                        employee_id: employee.id,
                        employee_number: employee.employee_number.clone(),
                        reason: err.to_string(),
                    });
                }
            }
        }

        let complete = PeriodService::complete(claimed.status)
            .map_err(invalid_state(PeriodStatus::Processing))?;
        self.apply_transition(period_id, PeriodStatus::Processing, complete)
            .await?;

        info!(
            period_id = %period_id,
            succeeded = outcome.succeeded.len(),
            skipped = outcome.skipped.len(),
            failed = outcome.failed.len(),
            "Payroll run completed"
        );
        Ok(outcome)
    }

    /// Approves a processed period.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::PeriodNotFound`] for an unknown period,
    /// [`PayrollError::InvalidState`] if the period is not in `Processed`,
    /// or [`PayrollError::Store`] if the store fails.
    pub async fn approve(
        &self,
        period_id: PayrollPeriodId,
        approver: UserId,
    ) -> Result<PayrollPeriod, PayrollError> {
        let period = self.load_period(period_id).await?;
        let transition = PeriodService::approve(period.status, approver)
            .map_err(invalid_state(PeriodStatus::Processed))?;
        let approved = self
            .apply_transition(period_id, PeriodStatus::Processed, transition)
            .await?;

        info!(period_id = %approved.id, approved_by = %approver, "Payroll period approved");
        Ok(approved)
    }

    /// Aggregates the payslips of a period.
    ///
    /// A period with no payslips (including an unknown period id) yields
    /// the zero summary.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::Store`] if listing payslips fails.
    pub async fn summary(
        &self,
        period_id: PayrollPeriodId,
    ) -> Result<PayrollSummary, PayrollError> {
        let payslips = self.store.payslips_for_period(period_id).await?;
        Ok(PayrollSummary::from_payslips(&payslips))
    }

    /// Generates one employee's payslip for the period.
    async fn process_employee(
        &self,
        employee: &Employee,
        period: &PayrollPeriod,
        company: &Company,
        policy: &CompanyPolicy,
    ) -> Result<EmployeeOutcome, PayrollError> {
        if self
            .store
            .payslip_for(employee.id, period.id)
            .await?
            .is_some()
        {
            warn!(
                employee_number = %employee.employee_number,
                "Payslip already exists, skipping"
            );
            return Ok(EmployeeOutcome::Skipped(SkipReason::PayslipExists));
        }

        let exchange_rate = self
            .currency
            .rate(&employee.pay_currency, &company.base_currency)
            .await?;

        let mut allowances = Decimal::ZERO;
        for row in self.store.recurring_allowances(employee.id).await? {
            if let Some(amount) = self.resolve_basis(&row.name, &row.basis, employee).await {
                allowances += amount;
            }
        }

        // Overtime and bonus stay zero until a timesheet source feeds them.
        let overtime = Decimal::ZERO;
        let bonus = Decimal::ZERO;

        let gross = employee.basic_salary + overtime + allowances + bonus;

        let income_tax = if policy.income_tax_enabled {
            self.tax
                .monthly_income_tax(gross, &employee.pay_currency)
                .await?
        } else {
            Decimal::ZERO
        };
        let levy = if policy.levy_enabled {
            self.tax.levy(income_tax)
        } else {
            Decimal::ZERO
        };
        let social_contribution = if policy.social_contribution_enabled {
            self.tax.social_contribution(gross)
        } else {
            Decimal::ZERO
        };

        let mut other_deductions = Decimal::ZERO;
        for row in self.store.recurring_deductions(employee.id).await? {
            if let Some(amount) = self.resolve_basis(&row.name, &row.basis, employee).await {
                other_deductions += amount;
            }
        }

        let components = PayComponents {
            basic_salary: employee.basic_salary,
            overtime,
            allowances,
            bonus,
            income_tax,
            levy,
            social_contribution,
            other_deductions,
        };
        let totals = compute_totals(&components, exchange_rate);

        let working_days =
            calendar::working_days(period.start_date, period.end_date, company.work_week);
        // Full attendance until an attendance source exists.
        let days_worked = working_days;

        let payslip = Payslip::from_totals(
            employee.company_id,
            employee.id,
            period.id,
            employee.pay_currency.clone(),
            exchange_rate,
            totals,
            working_days,
            days_worked,
        );

        match self.store.insert_payslip(payslip).await {
            Ok(()) => {
                debug!(employee_number = %employee.employee_number, "Payslip generated");
                Ok(EmployeeOutcome::Created)
            }
            Err(StoreError::Conflict { .. }) => {
                warn!(
                    employee_number = %employee.employee_number,
                    "Lost payslip insert race, skipping"
                );
                Ok(EmployeeOutcome::Skipped(SkipReason::PayslipExists))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Resolves one benefit row to an amount in the employee's pay currency.
    ///
    /// A row whose conversion fails is dropped from this run with a warning
    /// rather than failing the whole payslip.
    async fn resolve_basis(
        &self,
        name: &str,
        basis: &BenefitBasis,
        employee: &Employee,
    ) -> Option<Decimal> {
        match basis {
            BenefitBasis::Fixed { amount, currency } => {
                match self
                    .currency
                    .convert(*amount, currency, &employee.pay_currency)
                    .await
                {
                    Ok(converted) => Some(converted),
                    Err(err) => {
                        warn!(
                            employee_number = %employee.employee_number,
                            benefit = name,
                            error = %err,
                            "Dropping benefit row, conversion failed"
                        );
                        None
                    }
                }
            }
            BenefitBasis::PercentOfBasic { percent } => {
                Some(percent_of_basic(employee.basic_salary, *percent))
            }
        }
    }

    async fn load_period(&self, id: PayrollPeriodId) -> Result<PayrollPeriod, PayrollError> {
        self.store.period(id).await.map_err(|err| match err {
            StoreError::NotFound { .. } => PayrollError::PeriodNotFound,
            other => PayrollError::Store(other),
        })
    }

    async fn apply_transition(
        &self,
        id: PayrollPeriodId,
        expected: PeriodStatus,
        transition: PeriodTransition,
    ) -> Result<PayrollPeriod, PayrollError> {
        self.store
            .transition_period(id, expected, transition)
            .await
            .map_err(|err| match err {
                StoreError::StatusConflict { found } => PayrollError::InvalidState {
                    found,
                    required: expected,
                },
                StoreError::NotFound { .. } => PayrollError::PeriodNotFound,
                other => PayrollError::Store(other),
            })
    }
}

fn invalid_state(required: PeriodStatus) -> impl Fn(PeriodError) -> PayrollError {
    move |err| match err {
        PeriodError::InvalidTransition { from, .. } => PayrollError::InvalidState {
            found: from,
            required,
        },
        PeriodError::InvalidMonth { year, month } => PayrollError::InvalidMonth { year, month },
    }
}
