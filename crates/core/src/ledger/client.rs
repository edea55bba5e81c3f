//! Client records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::account::AccountNumber;

/// Input for registering a client.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewClient {
    /// National identity number, unique across the ledger.
    pub identity: String,
    /// Full name.
    pub name: String,
    /// Date of birth.
    pub date_of_birth: NaiveDate,
    /// Free-text address.
    pub address: String,
}

/// A natural person holding accounts.
///
/// Fixed after registration except for the list of owned accounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Client {
    identity: String,
    name: String,
    date_of_birth: NaiveDate,
    address: String,
    accounts: Vec<AccountNumber>,
}

impl Client {
    pub(crate) fn new(input: NewClient) -> Self {
        Self {
            identity: input.identity,
            name: input.name,
            date_of_birth: input.date_of_birth,
            address: input.address,
            accounts: Vec::new(),
        }
    }

    pub(crate) fn add_account(&mut self, number: AccountNumber) {
        self.accounts.push(number);
    }

    /// National identity number.
    #[must_use]
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Full name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Date of birth.
    #[must_use]
    pub const fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }

    /// Address.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Owned accounts in opening order.
    #[must_use]
    pub fn accounts(&self) -> &[AccountNumber] {
        &self.accounts
    }
}
