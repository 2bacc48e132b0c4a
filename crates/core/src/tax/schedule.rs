//! Monthly income tax schedule.
//!
//! The statutory table is defined on monthly gross income in the reference
//! currency. Each bracket carries a flat rate and a fixed deduction, so the
//! tax for a gross `g` falling in bracket `b` is `g * b.rate - b.deduction`,
//! clamped at zero. The deductions are chosen so the schedule is continuous
//! at every bracket boundary.

use payforge_shared::CurrencyCode;
use rust_decimal::Decimal;

/// One row of the statutory tax table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxBracket {
    /// Lower bound of the bracket, inclusive.
    pub min: Decimal,
    /// Upper bound of the bracket, inclusive. `None` means unbounded.
    pub max: Option<Decimal>,
    /// Flat rate applied to the whole gross amount.
    pub rate: Decimal,
    /// Fixed amount subtracted after applying the rate.
    pub deduction: Decimal,
}

impl TaxBracket {
    fn contains(&self, gross: Decimal) -> bool {
        gross >= self.min && self.max.is_none_or(|max| gross <= max)
    }
}

/// Currency the statutory tables are defined in.
#[must_use]
pub fn reference_currency() -> CurrencyCode {
    CurrencyCode::usd()
}

/// The statutory monthly bracket table, in reference currency.
#[must_use]
pub fn monthly_brackets() -> [TaxBracket; 6] {
    [
        TaxBracket {
            min: Decimal::ZERO,
            max: Some(Decimal::new(100_00, 2)),
            rate: Decimal::ZERO,
            deduction: Decimal::ZERO,
        },
        TaxBracket {
            min: Decimal::new(100_01, 2),
            max: Some(Decimal::new(300_00, 2)),
            rate: Decimal::new(20, 2),
            deduction: Decimal::new(20_00, 2),
        },
        TaxBracket {
            min: Decimal::new(300_01, 2),
            max: Some(Decimal::new(1000_00, 2)),
            rate: Decimal::new(25, 2),
            deduction: Decimal::new(35_00, 2),
        },
        TaxBracket {
            min: Decimal::new(1000_01, 2),
            max: Some(Decimal::new(2000_00, 2)),
            rate: Decimal::new(30, 2),
            deduction: Decimal::new(85_00, 2),
        },
        TaxBracket {
            min: Decimal::new(2000_01, 2),
            max: Some(Decimal::new(3000_00, 2)),
            rate: Decimal::new(35, 2),
            deduction: Decimal::new(185_00, 2),
        },
        TaxBracket {
            min: Decimal::new(3000_01, 2),
            max: None,
            rate: Decimal::new(40, 2),
            deduction: Decimal::new(335_00, 2),
        },
    ]
}

/// Monthly income tax on a gross amount in the reference currency.
///
/// Non-positive gross pays no tax. A gross matching no bracket (possible
/// for sub-cent values landing between a bracket's inclusive upper bound
/// and the next bracket's lower bound) also pays no tax, matching the
/// table's lookup semantics.
#[must_use]
pub fn income_tax_in_reference(gross: Decimal) -> Decimal {
    if gross <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let tax = monthly_brackets()
        .iter()
        .find(|bracket| bracket.contains(gross))
        .map_or(Decimal::ZERO, |bracket| {
            gross * bracket.rate - bracket.deduction
        });

    tax.max(Decimal::ZERO)
}

/// Levy rate applied to the computed income tax (3%).
#[must_use]
pub fn levy_rate() -> Decimal {
    Decimal::new(3, 2)
}

/// Social security contribution rate applied to gross earnings (3%).
#[must_use]
pub fn social_contribution_rate() -> Decimal {
    Decimal::new(3, 2)
}
