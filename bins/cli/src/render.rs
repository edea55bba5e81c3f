//! Human-readable text for ledger results.

use std::fmt::Write as _;

use bankbook_core::{LedgerError, Statement, TransactionError, TransactionKind};
use bankbook_shared::types::Money;
use chrono::Local;

const RULE: &str = "==========================================";

/// Message shown when the ledger refuses a command.
pub fn rejection(err: &LedgerError) -> String {
    match err {
        LedgerError::DuplicateIdentity(identity) => {
            format!("Error: a client with identity {identity} already exists.")
        }
        LedgerError::UnknownClient(identity) => {
            format!("Error: no client found with identity {identity}.")
        }
        LedgerError::AccountNotFound(number) => format!("Invalid account: {number}."),
        LedgerError::Transaction(err) => match err {
            TransactionError::InvalidAmount { .. } => {
                "Operation failed! The amount entered is invalid.".to_string()
            }
            TransactionError::InsufficientFunds { requested, balance } => format!(
                "Operation failed! Insufficient balance: requested {}, available {}.",
                Money::new(*requested),
                Money::new(*balance)
            ),
            TransactionError::LimitExceeded { limit, .. } => format!(
                "Operation failed! The amount exceeds the withdrawal limit of {}.",
                Money::new(*limit)
            ),
            TransactionError::DailyLimitExceeded { limit } => format!(
                "Operation failed! Maximum of {limit} withdrawals per day reached."
            ),
            TransactionError::BalanceOverflow { .. } => {
                "Operation failed! The resulting balance is too large to record.".to_string()
            }
        },
    }
}

/// Full statement block: one line per record, then totals and the balance.
pub fn statement(statement: &Statement<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "\n================ STATEMENT ================\nBranch: {}  Account: {}",
        statement.branch(),
        statement.account_number()
    );

    if statement.is_empty() {
        out.push_str("No transactions.\n");
    }
    for record in statement.records() {
        let label = match record.kind() {
            TransactionKind::Deposit => "Deposit:",
            TransactionKind::Withdrawal => "Withdrawal:",
        };
        let _ = writeln!(
            out,
            "{label:<12}{:>14}  {}  #{}",
            Money::new(record.amount()).to_string(),
            record
                .timestamp()
                .with_timezone(&Local)
                .format("%d-%m-%Y %H:%M:%S"),
            record.id().short()
        );
    }

    if !statement.is_empty() {
        let totals = statement.totals();
        let _ = writeln!(
            out,
            "\nDeposits: {}  Withdrawals: {}",
            Money::new(totals.deposited),
            Money::new(totals.withdrawn)
        );
    }
    let _ = writeln!(out, "\nBalance: {}", Money::new(statement.balance()));
    out.push_str(RULE);
    out
}
