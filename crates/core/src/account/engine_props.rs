//! Property-based tests for the account transaction engine.
//!
//! - Balance never goes negative
//! - Rejected operations leave balance and history untouched
//! - Deposit followed by an equal withdrawal is neutral
//! - Statements are repeatable and side-effect free

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::engine::Account;
use super::error::TransactionError;
use super::types::{AccountLimits, AccountNumber, TransactionRecord};

/// One step of a generated scenario.
#[derive(Debug, Clone)]
enum Op {
    Deposit(Decimal),
    Withdraw(Decimal, u64),
}

/// Strategy to generate amounts from -10.00 to 1,000.00, zero included.
fn any_amount() -> impl Strategy<Value = Decimal> {
    (-1_000i64..100_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate a valid positive amount within the default limit.
fn withdrawable_amount() -> impl Strategy<Value = Decimal> {
    (1i64..=50_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate an operation; withdrawals land on one of five days.
fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        any_amount().prop_map(Op::Deposit),
        (any_amount(), 0u64..5).prop_map(|(amount, day)| Op::Withdraw(amount, day)),
    ]
}

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
}

fn new_account() -> Account {
    Account::new(AccountNumber(1), "0001", "00000000000", AccountLimits::default())
}

fn apply(account: &mut Account, op: &Op) -> Result<(), TransactionError> {
    match op {
        Op::Deposit(amount) => account.deposit(*amount).map(|_| ()),
        Op::Withdraw(amount, day) => {
            let today = base_date() + Days::new(*day);
            account.withdraw(*amount, today).map(|_| ())
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// *For any* sequence of operations the balance stays non-negative and
    /// equals the net of the recorded history.
    #[test]
    fn prop_balance_never_negative(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let mut account = new_account();
        for op in &ops {
            let _ = apply(&mut account, op);
            prop_assert!(account.balance() >= Decimal::ZERO);
            prop_assert!(account.withdrawals_today() <= account.daily_withdrawal_limit());
        }
        prop_assert_eq!(account.balance(), account.history().totals().net());
        prop_assert!(account.history().iter().all(|r| r.amount() > Decimal::ZERO));
    }

    /// *For any* rejected operation, balance and history are unchanged and
    /// exactly one record is added per accepted operation.
    #[test]
    fn prop_rejection_leaves_state_unchanged(ops in prop::collection::vec(op_strategy(), 1..60)) {
        let mut account = new_account();
        for op in &ops {
            let balance = account.balance();
            let len = account.history().len();
            match apply(&mut account, op) {
                Ok(()) => {
                    prop_assert_eq!(account.history().len(), len + 1);
                }
                Err(_) => {
                    prop_assert_eq!(account.balance(), balance);
                    prop_assert_eq!(account.history().len(), len);
                }
            }
        }
    }

    /// *For any* positive amount within the limit, deposit then withdraw on a
    /// fresh day returns the balance to where it was and adds two records.
    #[test]
    fn prop_deposit_withdraw_round_trip(
        opening in withdrawable_amount(),
        amount in withdrawable_amount(),
    ) {
        let mut account = new_account();
        account.deposit(opening).unwrap();
        let len = account.history().len();

        account.deposit(amount).unwrap();
        account.withdraw(amount, base_date()).unwrap();

        prop_assert_eq!(account.balance(), opening);
        prop_assert_eq!(account.history().len(), len + 2);
    }

    /// *For any* withdrawal above the balance, InsufficientFunds is reported
    /// regardless of limits.
    #[test]
    fn prop_overdraw_rejected(
        balance in withdrawable_amount(),
        excess in withdrawable_amount(),
    ) {
        let mut account = new_account();
        account.deposit(balance).unwrap();
        let requested = balance + excess;

        let result = account.withdraw(requested, base_date());
        prop_assert_eq!(
            result.unwrap_err(),
            TransactionError::InsufficientFunds { requested, balance }
        );
        prop_assert_eq!(account.balance(), balance);
        prop_assert_eq!(account.history().len(), 1);
    }

    /// *For any* account state, taking a statement twice yields identical
    /// output and changes nothing.
    #[test]
    fn prop_statement_idempotent(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let mut account = new_account();
        for op in &ops {
            let _ = apply(&mut account, op);
        }
        let balance = account.balance();
        let len = account.history().len();

        let first: Vec<TransactionRecord> = account.statement().records().cloned().collect();
        let second: Vec<TransactionRecord> = account.statement().records().cloned().collect();

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.len(), len);
        prop_assert_eq!(account.statement().balance(), balance);
        prop_assert_eq!(account.balance(), balance);
        prop_assert_eq!(account.history().len(), len);
    }
}
