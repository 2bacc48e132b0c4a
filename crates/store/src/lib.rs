//! Persistence contracts and in-memory backend for Payforge.
//!
//! The engine only ever talks to the traits in this crate. The traits
//! are deliberately narrow: each aggregate gets its own trait, and the
//! [`PayrollStore`] supertrait groups everything a full batch run needs.
//!
//! [`MemoryStore`] is the reference backend. It provides the atomicity
//! the engine relies on: compare-and-swap period transitions and real
//! uniqueness constraints for periods and payslips.

pub mod error;
pub mod memory;
pub mod traits;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use traits::{
    BenefitStore, CompanyStore, CurrencyStore, EmployeeStore, PayrollStore, PayslipStore,
    PeriodStore, PolicyStore, RateStore,
};
