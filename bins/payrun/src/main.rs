//! Payforge demo payroll run.
//!
//! Seeds an in-memory store with a demo company, runs a full payroll cycle
//! for one month (create, process, approve), and prints the run outcome and
//! the period summary as JSON.
//!
//! Usage: cargo run --bin payrun
//!
//! Rates come from a built-in offline table unless `PAYRUN_LIVE_RATES` is
//! set, in which case the configured HTTP provider is used.

use std::str::FromStr;
use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use payforge_core::calendar::WorkWeek;
use payforge_core::workforce::{
    Allowance, BenefitBasis, Company, Deduction, Employee, EmploymentStatus,
};
use payforge_engine::{
    CurrencyService, HttpRateProvider, PayrollProcessor, RateProvider, StaticRateProvider,
};
use payforge_shared::{
    AllowanceId, CompanyId, CurrencyCode, DeductionId, EmployeeId, EngineConfig, UserId,
};
use payforge_store::{BenefitStore, CompanyStore, EmployeeStore, MemoryStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "payforge=info,payrun=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = EngineConfig::load().expect("Failed to load configuration");

    let store = Arc::new(MemoryStore::new());
    let company = seed_demo_company(&store).await?;

    let provider: Arc<dyn RateProvider> = if std::env::var("PAYRUN_LIVE_RATES").is_ok() {
        info!(url = %config.rates.provider_url, "Using live exchange rates");
        Arc::new(HttpRateProvider::new(&config.rates)?)
    } else {
        info!("Using built-in offline exchange rates");
        Arc::new(demo_rates())
    };

    let currency = CurrencyService::new(Arc::clone(&store), provider, &config.rates);
    let processor = PayrollProcessor::new(Arc::clone(&store), currency);

    let period = processor
        .create_period(company.id, 2024, 1, Some("January 2024".to_string()))
        .await?;
    let outcome = processor.process(period.id).await?;
    processor.approve(period.id, UserId::new()).await?;
    let summary = processor.summary(period.id).await?;

    println!("{}", serde_json::to_string_pretty(&outcome)?);
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}

fn dec(value: &str) -> Decimal {
    Decimal::from_str(value).unwrap()
}

fn demo_rates() -> StaticRateProvider {
    let usd = CurrencyCode::usd();
    let zar = CurrencyCode::new("ZAR").unwrap();
    let eur = CurrencyCode::new("EUR").unwrap();

    StaticRateProvider::new()
        .with_quote(zar.clone(), usd.clone(), dec("0.055"))
        .with_quote(usd.clone(), zar, dec("18.18181818"))
        .with_quote(eur.clone(), usd.clone(), dec("1.08"))
        .with_quote(usd, eur, dec("0.92592593"))
}

async fn seed_demo_company(store: &MemoryStore) -> anyhow::Result<Company> {
    let company = Company {
        id: CompanyId::new(),
        name: "Acme Holdings".to_string(),
        code: "ACME".to_string(),
        base_currency: CurrencyCode::usd(),
        work_week: WorkWeek::FiveDay,
    };
    store.insert_company(company.clone()).await?;
    info!(company = %company.name, base_currency = %company.base_currency, "Seeded company");

    let thandi =
        seed_employee(store, &company, "EMP-0001", "Thandi", "Moyo", "ZAR", "10000").await?;
    seed_employee(store, &company, "EMP-0002", "Ava", "Collins", "USD", "5000").await?;
    seed_employee(store, &company, "EMP-0003", "Lena", "Fischer", "EUR", "4200").await?;

    store
        .insert_allowance(Allowance {
            id: AllowanceId::new(),
            company_id: company.id,
            employee_id: thandi,
            name: "Housing".to_string(),
            basis: BenefitBasis::PercentOfBasic { percent: dec("10") },
            is_recurring: true,
            is_active: true,
        })
        .await?;
    store
        .insert_allowance(Allowance {
            id: AllowanceId::new(),
            company_id: company.id,
            employee_id: thandi,
            name: "Travel".to_string(),
            basis: BenefitBasis::Fixed {
                amount: dec("50"),
                currency: CurrencyCode::usd(),
            },
            is_recurring: true,
            is_active: true,
        })
        .await?;
    store
        .insert_deduction(Deduction {
            id: DeductionId::new(),
            company_id: company.id,
            employee_id: thandi,
            name: "Union dues".to_string(),
            basis: BenefitBasis::Fixed {
                amount: dec("150"),
                currency: CurrencyCode::new("ZAR").unwrap(),
            },
            is_statutory: false,
            is_recurring: true,
            is_active: true,
        })
        .await?;
    info!("Seeded benefits for EMP-0001");

    Ok(company)
}

async fn seed_employee(
    store: &MemoryStore,
    company: &Company,
    number: &str,
    first_name: &str,
    last_name: &str,
    currency: &str,
    salary: &str,
) -> anyhow::Result<EmployeeId> {
    let employee = Employee {
        id: EmployeeId::new(),
        company_id: company.id,
        employee_number: number.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        pay_currency: CurrencyCode::new(currency)?,
        basic_salary: dec(salary),
        employment_status: EmploymentStatus::Active,
        is_active: true,
    };
    let id = employee.id;
    store.insert_employee(employee).await?;
    info!(employee_number = number, pay_currency = currency, "Seeded employee");
    Ok(id)
}
