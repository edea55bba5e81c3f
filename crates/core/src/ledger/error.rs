//! Ledger error types for registry and account lookups.
//!
//! Account-level rejections are wrapped unchanged so callers see exactly one
//! reason per failed operation.

use bankbook_shared::AppError;
use thiserror::Error;

use crate::account::{AccountNumber, TransactionError};

/// Errors that can occur during ledger operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    // ========== Registry Errors ==========
    /// A client with this identity is already registered.
    #[error("A client with identity {0} already exists")]
    DuplicateIdentity(String),

    /// No client with this identity is registered.
    #[error("Client not found: {0}")]
    UnknownClient(String),

    /// No account with this number exists.
    #[error("Account not found: {0}")]
    AccountNotFound(AccountNumber),

    // ========== Account Errors ==========
    /// The account rejected the operation.
    #[error(transparent)]
    Transaction(#[from] TransactionError),
}

impl LedgerError {
    /// Returns the error code for rendering and logs.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateIdentity(_) => "DUPLICATE_IDENTITY",
            Self::UnknownClient(_) => "UNKNOWN_CLIENT",
            Self::AccountNotFound(_) => "ACCOUNT_NOT_FOUND",
            Self::Transaction(err) => err.error_code(),
        }
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        let message = err.to_string();
        match err {
            LedgerError::DuplicateIdentity(_) => Self::Conflict(message),
            LedgerError::UnknownClient(_) | LedgerError::AccountNotFound(_) => {
                Self::NotFound(message)
            }
            LedgerError::Transaction(TransactionError::InvalidAmount { .. }) => {
                Self::Validation(message)
            }
            LedgerError::Transaction(_) => Self::BusinessRule(message),
        }
    }
}
