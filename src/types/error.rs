//! Error types for the account ledger
//!
//! This module defines all error types that can occur while serving ledger
//! operations. Errors are designed to be descriptive for logs and are mapped to
//! HTTP responses by the `api` module.
//!
//! # Error Categories
//!
//! - **Lookup Errors**: Unknown account numbers
//! - **Validation Errors**: Non-positive or sub-cent amounts, malformed request bodies
//! - **Balance Errors**: Insufficient funds, arithmetic overflow
//! - **Provisioning Errors**: Duplicate account numbers, negative opening balances
//! - **I/O Errors**: Socket binding and runtime startup failures

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the account ledger
///
/// Every variant except `IoError` is a local, recoverable condition: the
/// operation that produced it declined without mutating any balance.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// The referenced account number is not part of the ledger
    #[error("Account {account_number} not found")]
    AccountNotFound {
        /// The account number that was looked up
        account_number: String,
    },

    /// Amount failed validation (non-positive or finer than one cent)
    ///
    /// Raised at the boundary before any account is touched.
    #[error("Invalid amount '{amount}': {reason}")]
    InvalidAmount {
        /// The rejected amount as received
        amount: String,
        /// Why the amount was rejected
        reason: String,
    },

    /// Request body could not be decoded into an amount request
    #[error("Malformed request: {message}")]
    MalformedRequest {
        /// Decoder message
        message: String,
    },

    /// Debit amount exceeds the current balance
    ///
    /// The debit is declined and the balance remains unchanged.
    #[error(
        "Insufficient funds for account {account_number}: balance {balance}, requested {requested}"
    )]
    InsufficientFunds {
        /// Account number
        account_number: String,
        /// Balance observed under the account guard
        balance: Decimal,
        /// Requested debit amount
        requested: Decimal,
    },

    /// Arithmetic overflow would occur
    ///
    /// The operation is declined to maintain account integrity.
    #[error("Arithmetic overflow in {operation} for account {account_number}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account number
        account_number: String,
    },

    /// The same account number was provisioned twice
    #[error("Duplicate account number {account_number}")]
    DuplicateAccount {
        /// Account number that is duplicated
        account_number: String,
    },

    /// An account was provisioned with a negative balance
    #[error("Opening balance {balance} for account {account_number} must not be negative")]
    NegativeOpeningBalance {
        /// Account number
        account_number: String,
        /// The rejected opening balance
        balance: Decimal,
    },

    /// I/O error while binding or serving
    ///
    /// This is a fatal error for the server process.
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },
}

// Conversion from io::Error to LedgerError
impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::IoError {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create an AccountNotFound error
    pub fn account_not_found(account_number: &str) -> Self {
        LedgerError::AccountNotFound {
            account_number: account_number.to_string(),
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: impl ToString, reason: &str) -> Self {
        LedgerError::InvalidAmount {
            amount: amount.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create a MalformedRequest error
    pub fn malformed_request(message: impl Into<String>) -> Self {
        LedgerError::MalformedRequest {
            message: message.into(),
        }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(account_number: &str, balance: Decimal, requested: Decimal) -> Self {
        LedgerError::InsufficientFunds {
            account_number: account_number.to_string(),
            balance,
            requested,
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, account_number: &str) -> Self {
        LedgerError::ArithmeticOverflow {
            operation: operation.to_string(),
            account_number: account_number.to_string(),
        }
    }

    /// Create a DuplicateAccount error
    pub fn duplicate_account(account_number: &str) -> Self {
        LedgerError::DuplicateAccount {
            account_number: account_number.to_string(),
        }
    }

    /// Create a NegativeOpeningBalance error
    pub fn negative_opening_balance(account_number: &str, balance: Decimal) -> Self {
        LedgerError::NegativeOpeningBalance {
            account_number: account_number.to_string(),
            balance,
        }
    }
}
