//! Common types used across the engine.

pub mod currency_code;
pub mod id;

pub use currency_code::{CurrencyCode, InvalidCurrencyCode};
pub use id::*;
