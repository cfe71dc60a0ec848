//! The account ledger
//!
//! A [`Ledger`] is a fixed mapping from account number to [`Account`], built
//! once and shared (usually behind an `Arc`) with every request handler.
//!
//! # Design
//!
//! The mapping itself is immutable after construction: there are no
//! operations that add or remove accounts. Lookups therefore need no lock, and
//! all synchronization lives in the per-account guards.

use crate::core::account::Account;
use crate::core::money;
use crate::types::{AccountBalance, AccountNumber, Amount, LedgerError};
use rust_decimal::Decimal;
use std::collections::HashMap;
use tracing::{debug, info};

/// Accounts provisioned by [`Ledger::seeded`], as (account number, balance in cents)
pub const SEED_ACCOUNTS: [(&str, i64); 2] = [("1001", 500_00), ("2002", 1250_50)];

/// In-memory account ledger
#[derive(Debug)]
pub struct Ledger {
    /// Accounts by account number, fixed at construction
    accounts: HashMap<AccountNumber, Account>,
}

impl Ledger {
    /// Build a ledger from `(account number, opening balance)` pairs
    ///
    /// Opening balances are quantized to scale 2.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An account number appears more than once
    /// - An opening balance is negative
    /// - An opening balance is too large to be held at scale 2
    pub fn new<I, N>(accounts: I) -> Result<Self, LedgerError>
    where
        I: IntoIterator<Item = (N, Decimal)>,
        N: Into<AccountNumber>,
    {
        let mut map = HashMap::new();

        for (number, balance) in accounts {
            let number = number.into();

            if balance < Decimal::ZERO {
                return Err(LedgerError::negative_opening_balance(&number, balance));
            }
            if money::checked_quantize(balance).is_none() {
                return Err(LedgerError::invalid_amount(
                    balance,
                    "opening balance is too large to hold 2 decimal places",
                ));
            }
            if map.contains_key(&number) {
                return Err(LedgerError::duplicate_account(&number));
            }

            map.insert(number.clone(), Account::new(number, balance));
        }

        Ok(Ledger { accounts: map })
    }

    /// Build the ledger with the standard seed accounts
    ///
    /// - `1001` with 500.00
    /// - `2002` with 1250.50
    pub fn seeded() -> Self {
        let accounts = SEED_ACCOUNTS
            .iter()
            .map(|&(number, cents)| {
                (
                    number.to_string(),
                    Account::new(number, Decimal::new(cents, 2)),
                )
            })
            .collect();

        Ledger { accounts }
    }

    /// Look up an account by its exact account number
    ///
    /// Never creates accounts.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::AccountNotFound` if no account has that number.
    pub fn get_account(&self, account_number: &str) -> Result<&Account, LedgerError> {
        self.accounts
            .get(account_number)
            .ok_or_else(|| LedgerError::account_not_found(account_number))
    }

    /// Number of accounts in the ledger
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the ledger has no accounts
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Balances of all accounts, ordered by account number
    ///
    /// Each balance is read under its own guard; the snapshot is not atomic
    /// across accounts.
    pub fn snapshot(&self) -> Vec<AccountBalance> {
        let mut balances: Vec<AccountBalance> = self
            .accounts
            .values()
            .map(|account| AccountBalance::new(account.number(), account.read_balance()))
            .collect();
        balances.sort_by(|a, b| a.account_number.cmp(&b.account_number));
        balances
    }

    /// Current balance of `account_number`
    pub fn balance(&self, account_number: &str) -> Result<AccountBalance, LedgerError> {
        let account = self.get_account(account_number)?;
        Ok(AccountBalance::new(account_number, account.read_balance()))
    }

    /// Credit `amount` to `account_number` and return the updated balance
    pub fn deposit(
        &self,
        account_number: &str,
        amount: Amount,
    ) -> Result<AccountBalance, LedgerError> {
        let account = self.get_account(account_number)?;
        let balance = account.credit(amount)?;

        debug!(account_number, %amount, %balance, "deposit applied");
        Ok(AccountBalance::new(account_number, balance))
    }

    /// Debit `amount` from `account_number` and return the updated balance
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The account does not exist
    /// - `amount` exceeds the current balance (the balance is unchanged)
    pub fn withdraw(
        &self,
        account_number: &str,
        amount: Amount,
    ) -> Result<AccountBalance, LedgerError> {
        let account = self.get_account(account_number)?;
        let balance = account.debit(amount).inspect_err(|e| {
            if let LedgerError::InsufficientFunds { balance, .. } = e {
                info!(account_number, %amount, %balance, "withdrawal declined: insufficient funds");
            }
        })?;

        debug!(account_number, %amount, %balance, "withdrawal applied");
        Ok(AccountBalance::new(account_number, balance))
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;
    use std::sync::Arc;
    use std::thread;

    fn amount(raw: &str) -> Amount {
        Amount::try_from(Decimal::from_str(raw).unwrap()).unwrap()
    }

    fn dec(raw: &str) -> Decimal {
        Decimal::from_str(raw).unwrap()
    }

    #[rstest]
    #[case::first_seed("1001", "500.00")]
    #[case::second_seed("2002", "1250.50")]
    fn test_seeded_balances(#[case] account_number: &str, #[case] expected: &str) {
        let ledger = Ledger::seeded();

        let snapshot = ledger.balance(account_number).unwrap();

        assert_eq!(snapshot.account_number, account_number);
        assert_eq!(snapshot.balance.to_string(), expected);
    }

    #[test]
    fn test_seeded_ledger_has_exactly_seed_accounts() {
        let ledger = Ledger::default();

        assert_eq!(ledger.len(), 2);
        assert_eq!(
            ledger.snapshot(),
            vec![
                AccountBalance::new("1001", dec("500.00")),
                AccountBalance::new("2002", dec("1250.50")),
            ]
        );
    }

    #[test]
    fn test_new_quantizes_opening_balances() {
        let ledger = Ledger::new([("a", dec("7")), ("b", dec("0"))]).unwrap();

        assert_eq!(ledger.balance("a").unwrap().balance.to_string(), "7.00");
        assert_eq!(ledger.balance("b").unwrap().balance.to_string(), "0.00");
    }

    #[test]
    fn test_new_rejects_duplicate_account_numbers() {
        let result = Ledger::new([("1001", dec("1.00")), ("1001", dec("2.00"))]);

        assert_eq!(result.unwrap_err(), LedgerError::duplicate_account("1001"));
    }

    #[test]
    fn test_new_rejects_negative_opening_balance() {
        let result = Ledger::new([("1001", dec("-0.01"))]);

        assert_eq!(
            result.unwrap_err(),
            LedgerError::negative_opening_balance("1001", dec("-0.01"))
        );
    }

    #[test]
    fn test_new_rejects_opening_balance_without_room_for_cents() {
        let result = Ledger::new([("1001", dec("1000000000000000000000000000"))]);

        assert_eq!(
            result.unwrap_err(),
            LedgerError::invalid_amount(
                "1000000000000000000000000000",
                "opening balance is too large to hold 2 decimal places"
            )
        );
    }

    #[test]
    fn test_empty_ledger() {
        let ledger = Ledger::new(Vec::<(String, Decimal)>::new()).unwrap();

        assert!(ledger.is_empty());
        assert!(ledger.snapshot().is_empty());
    }

    #[test]
    fn test_deposit_then_withdraw_scenario() {
        let ledger = Ledger::seeded();

        let after_deposit = ledger.deposit("1001", amount("10.00")).unwrap();
        assert_eq!(after_deposit.balance, dec("510.00"));

        let after_withdraw = ledger.withdraw("1001", amount("5.00")).unwrap();
        assert_eq!(after_withdraw.balance, dec("505.00"));
        assert_eq!(after_withdraw.balance.to_string(), "505.00");
    }

    #[test]
    fn test_withdraw_insufficient_funds_scenario() {
        let ledger = Ledger::seeded();

        let result = ledger.withdraw("1001", amount("999999.99"));

        assert!(matches!(result, Err(LedgerError::InsufficientFunds { .. })));
        assert_eq!(ledger.balance("1001").unwrap().balance, dec("500.00"));
    }

    #[test]
    fn test_operations_on_other_accounts_are_independent() {
        let ledger = Ledger::seeded();

        ledger.deposit("2002", amount("0.50")).unwrap();

        assert_eq!(ledger.balance("1001").unwrap().balance, dec("500.00"));
        assert_eq!(ledger.balance("2002").unwrap().balance, dec("1251.00"));
    }

    #[rstest]
    #[case::balance(|ledger: &Ledger| ledger.balance("9999"))]
    #[case::deposit(|ledger: &Ledger| ledger.deposit("9999", amount("1.00")))]
    #[case::withdraw(|ledger: &Ledger| ledger.withdraw("9999", amount("1.00")))]
    fn test_unknown_account_is_not_found(
        #[case] operation: fn(&Ledger) -> Result<AccountBalance, LedgerError>,
    ) {
        let ledger = Ledger::seeded();

        assert_eq!(
            operation(&ledger),
            Err(LedgerError::account_not_found("9999"))
        );
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_lookup_is_exact() {
        let ledger = Ledger::seeded();

        assert!(ledger.get_account("1001").is_ok());
        assert!(ledger.get_account(" 1001").is_err());
        assert!(ledger.get_account("01001").is_err());
    }

    #[test]
    fn test_balance_never_negative_over_operation_sequence() {
        let ledger = Ledger::seeded();
        let steps = ["300.00", "250.00", "0.01", "199.99", "0.01", "50.00"];

        for (i, raw) in steps.iter().enumerate() {
            let _ = if i % 3 == 2 {
                ledger.deposit("1001", amount(raw))
            } else {
                ledger.withdraw("1001", amount(raw))
            };
            assert!(ledger.balance("1001").unwrap().balance >= Decimal::ZERO);
        }
    }

    #[test]
    fn test_concurrent_deposits_across_accounts() {
        let ledger = Arc::new(Ledger::seeded());
        let mut handles = vec![];

        // 100 threads per account, each depositing 1.00
        for i in 0..200 {
            let ledger_clone = Arc::clone(&ledger);
            let handle = thread::spawn(move || {
                let account_number = if i % 2 == 0 { "1001" } else { "2002" };
                ledger_clone
                    .deposit(account_number, amount("1.00"))
                    .unwrap();
            });
            handles.push(handle);
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(ledger.balance("1001").unwrap().balance, dec("600.00"));
        assert_eq!(ledger.balance("2002").unwrap().balance, dec("1350.50"));
    }
}
