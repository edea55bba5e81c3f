//! Rejection reasons for deposits and withdrawals.

use rust_decimal::Decimal;
use thiserror::Error;

/// Why an account refused an operation.
///
/// Exactly one reason is reported per rejected call. Each variant carries the
/// values a front end needs to explain the refusal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransactionError {
    /// Amount is zero or negative.
    #[error("Amount must be positive, got {amount}")]
    InvalidAmount {
        /// The amount supplied.
        amount: Decimal,
    },

    /// Withdrawal exceeds the current balance.
    #[error("Insufficient funds: requested {requested}, balance {balance}")]
    InsufficientFunds {
        /// The amount requested.
        requested: Decimal,
        /// The balance at the time of the request.
        balance: Decimal,
    },

    /// Withdrawal exceeds the per-transaction ceiling.
    #[error("Withdrawal of {requested} exceeds the per-transaction limit of {limit}")]
    LimitExceeded {
        /// The amount requested.
        requested: Decimal,
        /// The account's per-transaction limit.
        limit: Decimal,
    },

    /// The daily number of withdrawals has been reached.
    #[error("Daily withdrawal limit of {limit} reached")]
    DailyLimitExceeded {
        /// Withdrawals allowed per day.
        limit: u32,
    },

    /// Deposit would take the balance past the largest representable amount.
    #[error("Deposit of {amount} would overflow the balance of {balance}")]
    BalanceOverflow {
        /// The amount supplied.
        amount: Decimal,
        /// The balance at the time of the request.
        balance: Decimal,
    },
}

impl TransactionError {
    /// Returns the error code for rendering and logs.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidAmount { .. } => "INVALID_AMOUNT",
            Self::InsufficientFunds { .. } => "INSUFFICIENT_FUNDS",
            Self::LimitExceeded { .. } => "LIMIT_EXCEEDED",
            Self::DailyLimitExceeded { .. } => "DAILY_LIMIT_EXCEEDED",
            Self::BalanceOverflow { .. } => "BALANCE_OVERFLOW",
        }
    }
}
