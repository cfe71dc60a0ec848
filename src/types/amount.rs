//! Validated monetary amounts
//!
//! Deposits and withdrawals only ever see an [`Amount`]: a strictly positive
//! decimal with no sub-cent fraction, normalized to scale 2.

use super::error::LedgerError;
use crate::core::money;
use rust_decimal::Decimal;
use std::fmt;

/// A strictly positive, whole-cent amount of money
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Amount(Decimal);

impl Amount {
    /// The amount as a scale-2 decimal
    pub fn value(self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = LedgerError;

    /// Validate a raw decimal
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::InvalidAmount` if the value:
    /// - is zero or negative
    /// - carries a non-zero digit beyond the second decimal place
    /// - is too large to be held at exactly two decimal places
    ///
    /// Trailing zeros (`10.000`) are accepted and normalized away.
    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        if value <= Decimal::ZERO {
            return Err(LedgerError::invalid_amount(
                value,
                "amount must be greater than 0",
            ));
        }
        if !money::is_whole_cents(value) {
            return Err(LedgerError::invalid_amount(
                value,
                "amount must have at most 2 decimal places",
            ));
        }
        money::checked_quantize(value).map(Amount).ok_or_else(|| {
            LedgerError::invalid_amount(value, "amount is too large to hold 2 decimal places")
        })
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
