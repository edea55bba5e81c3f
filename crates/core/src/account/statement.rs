//! Account statements.

use rust_decimal::Decimal;

use super::engine::Account;
use super::history::HistoryTotals;
use super::types::{AccountNumber, TransactionRecord};

/// Borrowed snapshot of an account's history and balance.
///
/// Building a statement never changes the account. [`Statement::records`]
/// can be called any number of times and always yields the records in the
/// order they were applied.
#[derive(Debug, Clone, Copy)]
pub struct Statement<'a> {
    account: &'a Account,
}

impl<'a> Statement<'a> {
    pub(crate) fn new(account: &'a Account) -> Self {
        Self { account }
    }

    /// Account the statement belongs to.
    #[must_use]
    pub fn account_number(&self) -> AccountNumber {
        self.account.number()
    }

    /// Branch code of the account.
    #[must_use]
    pub fn branch(&self) -> &'a str {
        self.account.branch()
    }

    /// Balance at the time the statement was taken.
    #[must_use]
    pub fn balance(&self) -> Decimal {
        self.account.balance()
    }

    /// Records in insertion order.
    pub fn records(&self) -> std::slice::Iter<'a, TransactionRecord> {
        self.account.history().iter()
    }

    /// Returns true if the account has no movements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.account.history().is_empty()
    }

    /// Deposit and withdrawal sums.
    #[must_use]
    pub fn totals(&self) -> HistoryTotals {
        self.account.history().totals()
    }
}
