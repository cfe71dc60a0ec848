//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account identifiers and balance snapshots
//! - `amount`: Validated deposit/withdrawal amounts
//! - `error`: Error types for the ledger

pub mod account;
pub mod amount;
pub mod error;

pub use account::{AccountBalance, AccountNumber};
pub use amount::Amount;
pub use error::LedgerError;
