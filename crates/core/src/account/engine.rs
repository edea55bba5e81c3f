//! The account transaction engine.
//!
//! `deposit` and `withdraw` are the only mutators of balance and history.
//! Each call either applies completely and appends one record, or leaves the
//! balance and history untouched and reports a single [`TransactionError`].

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::error::TransactionError;
use super::history::History;
use super::statement::Statement;
use super::types::{AccountLimits, AccountNumber, TransactionKind, TransactionRecord};

/// A balance-bearing account owned by exactly one client.
#[derive(Debug, Clone)]
pub struct Account {
    number: AccountNumber,
    branch: String,
    owner: String,
    balance: Decimal,
    limits: AccountLimits,
    withdrawals_today: u32,
    last_withdrawal_date: Option<NaiveDate>,
    history: History,
}

impl Account {
    /// Opens an account with zero balance.
    ///
    /// Accounts are normally opened through
    /// [`Ledger::open_account`](crate::ledger::Ledger::open_account), which
    /// assigns the number and checks that the owner exists.
    #[must_use]
    pub fn new(
        number: AccountNumber,
        branch: impl Into<String>,
        owner: impl Into<String>,
        limits: AccountLimits,
    ) -> Self {
        Self {
            number,
            branch: branch.into(),
            owner: owner.into(),
            balance: Decimal::ZERO,
            limits,
            withdrawals_today: 0,
            last_withdrawal_date: None,
            history: History::default(),
        }
    }

    /// Account number.
    #[must_use]
    pub const fn number(&self) -> AccountNumber {
        self.number
    }

    /// Branch code.
    #[must_use]
    pub fn branch(&self) -> &str {
        &self.branch
    }

    /// Identity of the owning client.
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Current balance, never negative.
    #[must_use]
    pub const fn balance(&self) -> Decimal {
        self.balance
    }

    /// Per-transaction withdrawal ceiling.
    #[must_use]
    pub const fn limit(&self) -> Decimal {
        self.limits.per_withdrawal
    }

    /// Withdrawals allowed per calendar day.
    #[must_use]
    pub const fn daily_withdrawal_limit(&self) -> u32 {
        self.limits.daily_withdrawals
    }

    /// Withdrawals counted for [`last_withdrawal_date`](Self::last_withdrawal_date).
    #[must_use]
    pub const fn withdrawals_today(&self) -> u32 {
        self.withdrawals_today
    }

    /// Date of the most recent successful withdrawal.
    #[must_use]
    pub const fn last_withdrawal_date(&self) -> Option<NaiveDate> {
        self.last_withdrawal_date
    }

    /// Read-only view of the history.
    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// Pays `amount` into the account.
    ///
    /// # Errors
    ///
    /// Returns [`TransactionError::InvalidAmount`] if `amount` is not positive
    /// and [`TransactionError::BalanceOverflow`] if the new balance is not
    /// representable.
    pub fn deposit(&mut self, amount: Decimal) -> Result<&TransactionRecord, TransactionError> {
        let balance = match self.check_deposit(amount) {
            Ok(balance) => balance,
            Err(err) => {
                warn!(account = %self.number, %amount, code = err.error_code(), "Deposit rejected");
                return Err(err);
            }
        };

        self.balance = balance;
        let record = TransactionRecord::new(TransactionKind::Deposit, amount, Utc::now());
        debug!(
            account = %self.number,
            id = %record.id(),
            %amount,
            balance = %self.balance,
            "Deposit applied"
        );
        Ok(self.history.append(record))
    }

    /// Returns the balance after depositing `amount`.
    fn check_deposit(&self, amount: Decimal) -> Result<Decimal, TransactionError> {
        if amount <= Decimal::ZERO {
            return Err(TransactionError::InvalidAmount { amount });
        }

        self.balance
            .checked_add(amount)
            .ok_or(TransactionError::BalanceOverflow {
                amount,
                balance: self.balance,
            })
    }

    /// Takes `amount` out of the account.
    ///
    /// `today` is the caller's calendar date. Rules are evaluated in order and
    /// the first failure is reported:
    ///
    /// 1. `amount` above the balance: [`TransactionError::InsufficientFunds`]
    /// 2. `amount` above the per-transaction limit: [`TransactionError::LimitExceeded`]
    /// 3. if `today` differs from the last withdrawal date the daily counter restarts at zero
    /// 4. counter at the daily limit: [`TransactionError::DailyLimitExceeded`]
    /// 5. `amount` not positive: [`TransactionError::InvalidAmount`]
    ///
    /// # Errors
    ///
    /// Returns the first rule that rejects the withdrawal.
    pub fn withdraw(
        &mut self,
        amount: Decimal,
        today: NaiveDate,
    ) -> Result<&TransactionRecord, TransactionError> {
        if let Err(err) = self.check_withdrawal(amount, today) {
            warn!(
                account = %self.number,
                %amount,
                %today,
                code = err.error_code(),
                "Withdrawal rejected"
            );
            return Err(err);
        }

        // check_withdrawal guarantees 0 < amount <= balance
        self.balance -= amount;
        self.withdrawals_today += 1;
        self.last_withdrawal_date = Some(today);
        let record = TransactionRecord::new(TransactionKind::Withdrawal, amount, Utc::now());
        debug!(
            account = %self.number,
            id = %record.id(),
            %amount,
            balance = %self.balance,
            withdrawals_today = self.withdrawals_today,
            "Withdrawal applied"
        );
        Ok(self.history.append(record))
    }

    /// Runs the withdrawal rules. Only the day rollover may touch state here.
    fn check_withdrawal(&mut self, amount: Decimal, today: NaiveDate) -> Result<(), TransactionError> {
        if amount > self.balance {
            return Err(TransactionError::InsufficientFunds {
                requested: amount,
                balance: self.balance,
            });
        }

        if amount > self.limits.per_withdrawal {
            return Err(TransactionError::LimitExceeded {
                requested: amount,
                limit: self.limits.per_withdrawal,
            });
        }

        if self.last_withdrawal_date != Some(today) {
            self.withdrawals_today = 0;
        }

        if self.withdrawals_today >= self.limits.daily_withdrawals {
            return Err(TransactionError::DailyLimitExceeded {
                limit: self.limits.daily_withdrawals,
            });
        }

        if amount <= Decimal::ZERO {
            return Err(TransactionError::InvalidAmount { amount });
        }

        Ok(())
    }

    /// Side-effect-free projection of history and balance.
    #[must_use]
    pub fn statement(&self) -> Statement<'_> {
        Statement::new(self)
    }
}
