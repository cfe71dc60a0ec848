//! Guarded account state
//!
//! An [`Account`] owns its balance behind a mutex. Every read and every
//! mutation of the balance happens inside one critical section on that mutex,
//! so operations on the same account serialize while operations on different
//! accounts proceed in parallel.
//!
//! # Thread Safety
//!
//! Critical sections contain only in-memory arithmetic. Each operation takes
//! exactly one account guard and never a second, so there is no lock ordering
//! to get wrong.

use crate::core::money;
use crate::types::{AccountNumber, Amount, LedgerError};
use rust_decimal::Decimal;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A single ledger account: a balance plus its exclusive-access guard
#[derive(Debug)]
pub struct Account {
    /// Account number, fixed for the account's lifetime
    number: AccountNumber,

    /// Balance at scale 2, always >= 0
    ///
    /// Only touched through [`Account::guard`].
    balance: Mutex<Decimal>,
}

impl Account {
    /// Create an account holding `balance`, quantized to scale 2
    ///
    /// Callers are responsible for rejecting negative opening balances; see
    /// `Ledger::new`.
    pub(crate) fn new(number: impl Into<AccountNumber>, balance: Decimal) -> Self {
        Account {
            number: number.into(),
            balance: Mutex::new(money::quantize(balance)),
        }
    }

    /// The account number
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Acquire the balance guard
    ///
    /// A panic while holding the guard cannot leave a half-written decimal
    /// behind, so a poisoned mutex is recovered rather than propagated.
    fn guard(&self) -> MutexGuard<'_, Decimal> {
        self.balance.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Read the current balance under the guard
    pub fn read_balance(&self) -> Decimal {
        *self.guard()
    }

    /// Add `amount` to the balance and return the new balance
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::ArithmeticOverflow` if the sum is not exactly
    /// representable at scale 2. The balance is left untouched in that case.
    pub fn credit(&self, amount: Amount) -> Result<Decimal, LedgerError> {
        let mut balance = self.guard();
        let current = *balance;

        // checked_add rounds instead of failing once the sum outgrows the
        // mantissa, so the result must also be exact and still hold cents.
        let updated = current
            .checked_add(amount.value())
            .filter(|sum| *sum - current == amount.value())
            .and_then(money::checked_quantize)
            .ok_or_else(|| LedgerError::arithmetic_overflow("deposit", &self.number))?;

        *balance = updated;
        Ok(updated)
    }

    /// Subtract `amount` from the balance and return the new balance
    ///
    /// The sufficiency check and the subtraction run under the same guard;
    /// no other operation on this account can interleave between them.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::InsufficientFunds` if `amount` exceeds the balance.
    /// The balance is left untouched in that case.
    pub fn debit(&self, amount: Amount) -> Result<Decimal, LedgerError> {
        let mut balance = self.guard();

        if amount.value() > *balance {
            return Err(LedgerError::insufficient_funds(
                &self.number,
                *balance,
                amount.value(),
            ));
        }

        let updated = balance
            .checked_sub(amount.value())
            .and_then(money::checked_quantize)
            .ok_or_else(|| LedgerError::arithmetic_overflow("withdrawal", &self.number))?;

        *balance = updated;
        Ok(updated)
    }
}
