//! Currency reference data.

use payforge_shared::CurrencyCode;
use serde::{Deserialize, Serialize};

/// A currency known to the system.
///
/// Immutable once referenced by payslips: historical payslips must keep
/// resolving against the codes they were computed with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    /// ISO 4217 code, unique across the system.
    pub code: CurrencyCode,
    /// Human readable name (e.g. "South African Rand").
    pub name: String,
    /// Display symbol (e.g. "R").
    pub symbol: String,
    /// Inactive currencies are excluded from rate refreshes.
    pub is_active: bool,
    /// Marks the base currency used for consolidated reporting.
    pub is_base: bool,
}
