//! Money type with two-decimal precision.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for arbitrary precision.

use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of fractional digits kept for every amount.
pub const MONEY_SCALE: u32 = 2;

/// A monetary amount in the branch currency.
///
/// Single currency, so only the amount is stored. Parsing rounds to
/// cents with banker's rounding; the sign is kept so that validation of
/// non-positive amounts stays with the ledger rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

/// Errors produced when parsing user-entered amounts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyParseError {
    /// Input was empty after trimming.
    #[error("Amount is empty")]
    Empty,

    /// Input is not a decimal number.
    #[error("Amount is not a number: {0}")]
    NotANumber(String),
}

impl Money {
    /// Creates a new amount, rounded to cents.
    #[must_use]
    pub fn new(amount: Decimal) -> Self {
        Self(round_to_cents(amount))
    }

    /// Returns the inner decimal.
    #[must_use]
    pub const fn amount(self) -> Decimal {
        self.0
    }
}

/// Rounds to [`MONEY_SCALE`] places with banker's rounding (round half to even).
fn round_to_cents(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(MONEY_SCALE);
    rounded
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R$ {:.2}", self.0)
    }
}

impl FromStr for Money {
    type Err = MoneyParseError;

    /// Accepts `.` or `,` as the decimal separator.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        let normalized = trimmed.replace(',', ".");
        Decimal::from_str(&normalized)
            .map(Self::new)
            .map_err(|_| MoneyParseError::NotANumber(trimmed.to_string()))
    }
}
