//! Statutory monthly income tax schedule and related rates.

pub mod schedule;

#[cfg(test)]
mod props;

pub use schedule::{
    income_tax_in_reference, levy_rate, monthly_brackets, reference_currency,
    social_contribution_rate, TaxBracket,
};
