//! Companies, payroll policies, employees, and benefits.

pub mod benefit;
pub mod company;
pub mod employee;

pub use benefit::{percent_of_basic, Allowance, BenefitBasis, Deduction};
pub use company::{Company, CompanyPolicy};
pub use employee::{Employee, EmploymentStatus};
