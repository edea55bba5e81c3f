//! Account transaction engine.
//!
//! This module implements the account-level rules:
//! - Deposits and withdrawals (the only balance mutators)
//! - Per-transaction and daily withdrawal limits
//! - Lazy daily counter reset on calendar date change
//! - Append-only transaction history
//! - Side-effect-free statements

pub mod engine;
pub mod error;
pub mod history;
pub mod statement;
pub mod types;

#[cfg(test)]
mod engine_props;

pub use engine::Account;
pub use error::TransactionError;
pub use history::{History, HistoryTotals};
pub use statement::Statement;
pub use types::{AccountLimits, AccountNumber, TransactionKind, TransactionRecord};
