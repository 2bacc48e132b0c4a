//! Functional tests for the in-memory store backend.
//!
//! These pin the contract the engine depends on: uniqueness constraints,
//! compare-and-swap transitions, freshness-windowed rate lookups, and
//! eligibility filtering.

use chrono::{Duration, Utc};
use rust_decimal_macros::dec;

use payforge_core::currency::{ExchangeRate, RateSource};
use payforge_core::payslip::{compute_totals, PayComponents, Payslip};
use payforge_core::period::{PayrollPeriod, PeriodService, PeriodStatus};
use payforge_core::workforce::{
    Allowance, BenefitBasis, CompanyPolicy, Deduction, Employee, EmploymentStatus,
};
use payforge_shared::{AllowanceId, CompanyId, CurrencyCode, DeductionId, EmployeeId};
use payforge_store::{
    BenefitStore, EmployeeStore, MemoryStore, PayslipStore, PeriodStore, PolicyStore, RateStore,
    StoreError,
};

fn code(s: &str) -> CurrencyCode {
    CurrencyCode::new(s).unwrap()
}

fn employee(
    company_id: CompanyId,
    number: &str,
    status: EmploymentStatus,
    active: bool,
) -> Employee {
    Employee {
        id: EmployeeId::new(),
        company_id,
        employee_number: number.to_string(),
        first_name: "Test".to_string(),
        last_name: number.to_string(),
        pay_currency: code("USD"),
        basic_salary: dec!(1000),
        employment_status: status,
        is_active: active,
    }
}

fn payslip_for(company_id: CompanyId, employee_id: EmployeeId, period: &PayrollPeriod) -> Payslip {
    let totals = compute_totals(
        &PayComponents {
            basic_salary: dec!(1000),
            ..Default::default()
        },
        dec!(1),
    );
    Payslip::from_totals(
        company_id,
        employee_id,
        period.id,
        code("USD"),
        dec!(1),
        totals,
        23,
        23,
    )
}

#[tokio::test]
async fn period_uniqueness_is_per_company_year_month() {
    let store = MemoryStore::new();
    let company_id = CompanyId::new();

    let first = PayrollPeriod::for_month(company_id, 2026, 1, None).unwrap();
    store.insert_period(first).await.unwrap();

    // Same company and month: conflict.
    let duplicate = PayrollPeriod::for_month(company_id, 2026, 1, None).unwrap();
    let err = store.insert_period(duplicate).await.unwrap_err();
    assert!(matches!(err, StoreError::Conflict { entity: "payroll_period", .. }));

    // Different month: fine.
    let february = PayrollPeriod::for_month(company_id, 2026, 2, None).unwrap();
    store.insert_period(february).await.unwrap();

    // Same month, different company: fine.
    let other = PayrollPeriod::for_month(CompanyId::new(), 2026, 1, None).unwrap();
    store.insert_period(other).await.unwrap();
}

#[tokio::test]
async fn transition_applies_only_from_expected_status() {
    let store = MemoryStore::new();
    let period = PayrollPeriod::for_month(CompanyId::new(), 2026, 3, None).unwrap();
    let id = period.id;
    store.insert_period(period).await.unwrap();

    let claim = PeriodService::begin_processing(PeriodStatus::Draft).unwrap();
    let updated = store
        .transition_period(id, PeriodStatus::Draft, claim)
        .await
        .unwrap();
    assert_eq!(updated.status, PeriodStatus::Processing);

    // A second claim with a stale expectation reports what it found.
    let stale = PeriodService::begin_processing(PeriodStatus::Draft).unwrap();
    let err = store
        .transition_period(id, PeriodStatus::Draft, stale)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        StoreError::StatusConflict {
            found: PeriodStatus::Processing
        }
    );
}

#[tokio::test]
async fn transition_stamps_audit_fields() {
    let store = MemoryStore::new();
    let period = PayrollPeriod::for_month(CompanyId::new(), 2026, 4, None).unwrap();
    let id = period.id;
    store.insert_period(period).await.unwrap();

    let claim = PeriodService::begin_processing(PeriodStatus::Draft).unwrap();
    store
        .transition_period(id, PeriodStatus::Draft, claim)
        .await
        .unwrap();

    let complete = PeriodService::complete(PeriodStatus::Processing).unwrap();
    let updated = store
        .transition_period(id, PeriodStatus::Processing, complete)
        .await
        .unwrap();
    assert_eq!(updated.status, PeriodStatus::Processed);
    assert!(updated.processed_at.is_some());

    let approver = payforge_shared::UserId::new();
    let approve = PeriodService::approve(PeriodStatus::Processed, approver).unwrap();
    let updated = store
        .transition_period(id, PeriodStatus::Processed, approve)
        .await
        .unwrap();
    assert_eq!(updated.status, PeriodStatus::Approved);
    assert_eq!(updated.approved_by, Some(approver));
    assert!(updated.approved_at.is_some());
}

#[tokio::test]
async fn reset_to_draft_clears_lifecycle_stamps() {
    let store = MemoryStore::new();
    let period = PayrollPeriod::for_month(CompanyId::new(), 2026, 5, None).unwrap();
    let id = period.id;
    store.insert_period(period).await.unwrap();

    let claim = PeriodService::begin_processing(PeriodStatus::Draft).unwrap();
    store
        .transition_period(id, PeriodStatus::Draft, claim)
        .await
        .unwrap();
    let complete = PeriodService::complete(PeriodStatus::Processing).unwrap();
    store
        .transition_period(id, PeriodStatus::Processing, complete)
        .await
        .unwrap();

    store.reset_period_to_draft(id).unwrap();
    let period = store.period(id).await.unwrap();
    assert_eq!(period.status, PeriodStatus::Draft);
    assert!(period.processed_at.is_none());
    assert!(period.approved_at.is_none());
    assert!(period.approved_by.is_none());
}

#[tokio::test]
async fn payslip_uniqueness_is_per_employee_period() {
    let store = MemoryStore::new();
    let company_id = CompanyId::new();
    let employee_id = EmployeeId::new();
    let period = PayrollPeriod::for_month(company_id, 2026, 1, None).unwrap();

    store
        .insert_payslip(payslip_for(company_id, employee_id, &period))
        .await
        .unwrap();

    let err = store
        .insert_payslip(payslip_for(company_id, employee_id, &period))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Conflict { entity: "payslip", .. }));

    // Another employee in the same period is fine.
    store
        .insert_payslip(payslip_for(company_id, EmployeeId::new(), &period))
        .await
        .unwrap();

    let slips = store.payslips_for_period(period.id).await.unwrap();
    assert_eq!(slips.len(), 2);
}

#[tokio::test]
async fn latest_rate_honors_cutoff_and_prefers_newest() {
    let store = MemoryStore::new();
    let now = Utc::now();
    let zar = code("ZAR");
    let usd = code("USD");

    let mut stale = ExchangeRate::new(zar.clone(), usd.clone(), dec!(0.050), RateSource::Api);
    stale.fetched_at = now - Duration::hours(30);
    let mut old = ExchangeRate::new(zar.clone(), usd.clone(), dec!(0.052), RateSource::Api);
    old.fetched_at = now - Duration::hours(20);
    let mut fresh = ExchangeRate::new(zar.clone(), usd.clone(), dec!(0.055), RateSource::Api);
    fresh.fetched_at = now - Duration::hours(1);

    store.append_rate(stale).await.unwrap();
    store.append_rate(fresh).await.unwrap();
    store.append_rate(old).await.unwrap();

    let cutoff = now - Duration::hours(24);
    let found = store
        .latest_rate(&zar, &usd, cutoff)
        .await
        .unwrap()
        .expect("a fresh rate exists");
    assert_eq!(found.rate, dec!(0.055));

    // With a cutoff beyond every observation, nothing qualifies.
    let none = store
        .latest_rate(&zar, &usd, now + Duration::hours(1))
        .await
        .unwrap();
    assert!(none.is_none());

    // Direction matters: no USD -> ZAR observation was ever appended.
    let reverse = store.latest_rate(&usd, &zar, cutoff).await.unwrap();
    assert!(reverse.is_none());
}

#[tokio::test]
async fn eligible_employees_filters_and_sorts() {
    let store = MemoryStore::new();
    let company_id = CompanyId::new();

    store
        .insert_employee(employee(company_id, "EMP-0002", EmploymentStatus::Active, true))
        .await
        .unwrap();
    store
        .insert_employee(employee(company_id, "EMP-0001", EmploymentStatus::Active, true))
        .await
        .unwrap();
    store
        .insert_employee(employee(company_id, "EMP-0003", EmploymentStatus::Suspended, true))
        .await
        .unwrap();
    store
        .insert_employee(employee(company_id, "EMP-0004", EmploymentStatus::Active, false))
        .await
        .unwrap();
    store
        .insert_employee(employee(CompanyId::new(), "EMP-0005", EmploymentStatus::Active, true))
        .await
        .unwrap();

    let eligible = store.eligible_employees(company_id).await.unwrap();
    let numbers: Vec<&str> = eligible
        .iter()
        .map(|e| e.employee_number.as_str())
        .collect();
    assert_eq!(numbers, vec!["EMP-0001", "EMP-0002"]);
}

#[tokio::test]
async fn policy_defaults_when_missing() {
    let store = MemoryStore::new();
    let company_id = CompanyId::new();

    let policy = store.policy(company_id).await.unwrap();
    assert!(policy.income_tax_enabled);
    assert!(policy.levy_enabled);
    assert!(policy.social_contribution_enabled);

    store
        .put_policy(
            company_id,
            CompanyPolicy {
                income_tax_enabled: false,
                ..CompanyPolicy::default()
            },
        )
        .await
        .unwrap();
    let policy = store.policy(company_id).await.unwrap();
    assert!(!policy.income_tax_enabled);
}

#[tokio::test]
async fn benefit_queries_apply_run_filters() {
    let store = MemoryStore::new();
    let company_id = CompanyId::new();
    let employee_id = EmployeeId::new();

    let basis = BenefitBasis::Fixed {
        amount: dec!(100),
        currency: code("USD"),
    };

    store
        .insert_allowance(Allowance {
            id: AllowanceId::new(),
            company_id,
            employee_id,
            name: "Housing".to_string(),
            basis: basis.clone(),
            is_recurring: true,
            is_active: true,
        })
        .await
        .unwrap();
    store
        .insert_allowance(Allowance {
            id: AllowanceId::new(),
            company_id,
            employee_id,
            name: "One-off".to_string(),
            basis: basis.clone(),
            is_recurring: false,
            is_active: true,
        })
        .await
        .unwrap();

    store
        .insert_deduction(Deduction {
            id: DeductionId::new(),
            company_id,
            employee_id,
            name: "Union dues".to_string(),
            basis: basis.clone(),
            is_statutory: false,
            is_recurring: true,
            is_active: true,
        })
        .await
        .unwrap();
    store
        .insert_deduction(Deduction {
            id: DeductionId::new(),
            company_id,
            employee_id,
            name: "Income tax row".to_string(),
            basis,
            is_statutory: true,
            is_recurring: true,
            is_active: true,
        })
        .await
        .unwrap();

    let allowances = store.recurring_allowances(employee_id).await.unwrap();
    assert_eq!(allowances.len(), 1);
    assert_eq!(allowances[0].name, "Housing");

    let deductions = store.recurring_deductions(employee_id).await.unwrap();
    assert_eq!(deductions.len(), 1);
    assert_eq!(deductions[0].name, "Union dues");
}
