//! Account domain types: numbers, limits and transaction records.

use std::fmt;

use bankbook_shared::types::TransactionId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Sequential account number, unique within a ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountNumber(pub u64);

impl AccountNumber {
    /// The number given to the first account a ledger opens.
    pub const FIRST: Self = Self(1);

    /// Returns the number that follows this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Returns the inner value.
    #[must_use]
    pub const fn into_inner(self) -> u64 {
        self.0
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Withdrawal limits configured on an account at opening time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountLimits {
    /// Largest amount a single withdrawal may take.
    pub per_withdrawal: Decimal,
    /// Number of withdrawals accepted per calendar day.
    pub daily_withdrawals: u32,
}

impl AccountLimits {
    /// Default per-withdrawal ceiling.
    pub const DEFAULT_PER_WITHDRAWAL: Decimal = Decimal::from_parts(500, 0, 0, false, 0);
    /// Default number of withdrawals per day.
    pub const DEFAULT_DAILY_WITHDRAWALS: u32 = 3;

    /// Creates limits from explicit values.
    #[must_use]
    pub const fn new(per_withdrawal: Decimal, daily_withdrawals: u32) -> Self {
        Self {
            per_withdrawal,
            daily_withdrawals,
        }
    }
}

impl Default for AccountLimits {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PER_WITHDRAWAL, Self::DEFAULT_DAILY_WITHDRAWALS)
    }
}

/// Kind of a recorded transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money paid into the account.
    Deposit,
    /// Money taken out of the account.
    Withdrawal,
}

impl TransactionKind {
    /// Returns the string representation of the kind.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deposit => "deposit",
            Self::Withdrawal => "withdrawal",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable fact of one applied deposit or withdrawal.
///
/// Records are only created by [`Account`](super::Account) after an
/// operation has passed validation, so every record's amount is positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    id: TransactionId,
    kind: TransactionKind,
    amount: Decimal,
    timestamp: DateTime<Utc>,
}

impl TransactionRecord {
    pub(crate) fn new(kind: TransactionKind, amount: Decimal, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: TransactionId::new(),
            kind,
            amount,
            timestamp,
        }
    }

    /// Unique id of this record.
    #[must_use]
    pub const fn id(&self) -> TransactionId {
        self.id
    }

    /// Deposit or withdrawal.
    #[must_use]
    pub const fn kind(&self) -> TransactionKind {
        self.kind
    }

    /// Amount moved, always positive.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// Moment the operation was applied.
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}
