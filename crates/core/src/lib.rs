//! Core business logic for Bankbook.
//!
//! This crate contains pure business logic with ZERO terminal or storage
//! dependencies. All state lives in memory for the lifetime of a [`Ledger`].
//!
//! # Modules
//!
//! - `account` - Deposit/withdrawal engine, limits and transaction history
//! - `ledger` - Client registry and account numbering

pub mod account;
pub mod ledger;

pub use account::{
    Account, AccountLimits, AccountNumber, History, Statement, TransactionError,
    TransactionKind, TransactionRecord,
};
pub use ledger::{Client, Ledger, LedgerError, LedgerSettings, NewClient};
