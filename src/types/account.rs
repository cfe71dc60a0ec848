//! Account-related types for the account ledger
//!
//! This module defines the account identifier and the balance snapshot handed
//! back to callers after every ledger operation.

use rust_decimal::Decimal;
use serde::Serialize;

/// Account identifier
///
/// Opaque string key, unique within a ledger and fixed when the ledger is built.
pub type AccountNumber = String;

/// Balance of one account as observed under its guard
///
/// Serializes as `{"account_number": "...", "balance": "500.00"}`. The balance
/// is always emitted as a string with exactly two fractional digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountBalance {
    /// The account this snapshot belongs to
    pub account_number: AccountNumber,

    /// Balance at scale 2, never negative
    #[serde(with = "rust_decimal::serde::str")]
    pub balance: Decimal,
}

impl AccountBalance {
    pub fn new(account_number: impl Into<AccountNumber>, balance: Decimal) -> Self {
        AccountBalance {
            account_number: account_number.into(),
            balance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balance_serializes_as_two_place_string() {
        let snapshot = AccountBalance::new("2002", Decimal::new(125050, 2));

        let json = serde_json::to_value(&snapshot).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "account_number": "2002", "balance": "1250.50" })
        );
    }
}
