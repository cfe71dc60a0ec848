//! Core business logic module
//!
//! This module contains the balance-mutation components:
//! - `money` - Scale-2 quantization and the rounding mode
//! - `account` - A balance behind its per-account guard
//! - `ledger` - The fixed account mapping and by-number operations

pub mod account;
pub mod ledger;
pub mod money;

pub use account::Account;
pub use ledger::Ledger;
