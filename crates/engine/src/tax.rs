//! Statutory tax calculation in any pay currency.
//!
//! The bracket schedule is defined in the reference currency, so gross pay
//! is normalized through the currency service, taxed, and converted back.
//! The levy and the social contribution are flat rates with no brackets.

use rust_decimal::Decimal;

use payforge_core::currency::round_money;
use payforge_core::tax::{
    income_tax_in_reference, levy_rate, reference_currency, social_contribution_rate,
};
use payforge_shared::CurrencyCode;
use payforge_store::RateStore;

use crate::currency::{CurrencyError, CurrencyService};

/// Statutory deduction calculator.
pub struct TaxCalculator<S> {
    currency: CurrencyService<S>,
}

impl<S> Clone for TaxCalculator<S> {
    fn clone(&self) -> Self {
        Self {
            currency: self.currency.clone(),
        }
    }
}

impl<S> TaxCalculator<S> {
    /// Creates a tax calculator over a currency service.
    #[must_use]
    pub fn new(currency: CurrencyService<S>) -> Self {
        Self { currency }
    }
}

impl<S> TaxCalculator<S>
where
    S: RateStore + 'static,
{
    /// Computes the monthly income tax on a gross amount, returned in the
    /// gross amount's currency and rounded to money precision.
    ///
    /// Non-positive gross is zero tax without any rate lookup.
    ///
    /// # Errors
    ///
    /// Returns [`CurrencyError::RateUnavailable`] when the gross currency
    /// cannot be normalized to the reference currency or back.
    pub async fn monthly_income_tax(
        &self,
        gross: Decimal,
        currency: &CurrencyCode,
    ) -> Result<Decimal, CurrencyError> {
        if gross <= Decimal::ZERO {
            return Ok(Decimal::ZERO);
        }

        let reference = reference_currency();
        let gross_in_reference = self.currency.convert(gross, currency, &reference).await?;
        let tax_in_reference = income_tax_in_reference(gross_in_reference);
        let tax = self
            .currency
            .convert(tax_in_reference, &reference, currency)
            .await?;

        Ok(round_money(tax))
    }

    /// Computes the levy: a flat surcharge on the income tax amount, in the
    /// same currency as the tax.
    #[must_use]
    pub fn levy(&self, income_tax: Decimal) -> Decimal {
        round_money(income_tax * levy_rate())
    }

    /// Computes the social contribution: a flat rate on gross pay.
    ///
    /// The amount stays in whatever currency the gross arrives in. Unlike
    /// income tax there is no normalization through the reference currency,
    /// so no rate lookup happens here.
    #[must_use]
    pub fn social_contribution(&self, gross: Decimal) -> Decimal {
        round_money(gross * social_contribution_rate())
    }
}
