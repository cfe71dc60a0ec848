//! Account Ledger Library
//! # Overview
//!
//! This library provides a minimal in-memory account ledger served over HTTP:
//! query a balance, deposit, withdraw. Money is exact `Decimal` arithmetic at
//! two fractional digits, and every account carries its own lock.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (account numbers, amounts, errors)
//! - [`core`] - Business logic components:
//!   - [`core::money`] - Scale-2 quantization
//!   - [`core::account`] - A balance behind its per-account guard
//!   - [`core::ledger`] - The fixed account mapping
//! - [`api`] - HTTP routes, request validation and error mapping
//! - [`server`] - Runtime, listener and graceful shutdown
//! - [`cli`] - CLI arguments parsing
//! - [`observability`] - Logging setup
//!
//! # Operations
//!
//! - **Balance**: Read an account's balance under its guard
//! - **Deposit**: Credit a positive, whole-cent amount
//! - **Withdraw**: Debit a positive, whole-cent amount (requires sufficient balance)
//!
//! # Invariants
//!
//! - Balances are always scale 2 and never negative
//! - Operations on the same account serialize through that account's guard;
//!   the sufficiency check and the debit happen in one critical section

// Module declarations
pub mod api;
pub mod cli;
pub mod core;
pub mod observability;
pub mod server;
pub mod types;

pub use api::router;
pub use core::{Account, Ledger};
pub use server::{serve, ServerConfig};
pub use types::{AccountBalance, AccountNumber, Amount, LedgerError};
