//! Identity and account registry.
//!
//! The ledger owns every client and account for the lifetime of the process.
//! Nothing is ever removed, so account numbers and client identities stay
//! unique without any reuse bookkeeping.

use std::collections::{BTreeMap, HashMap};

use bankbook_shared::config::BankConfig;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{info, warn};

use super::client::{Client, NewClient};
use super::error::LedgerError;
use crate::account::{Account, AccountLimits, AccountNumber, Statement, TransactionRecord};

/// Settings applied to every account the ledger opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerSettings {
    /// Branch code stamped on new accounts.
    pub branch_code: String,
    /// Limits used by [`Ledger::open_account`].
    pub default_limits: AccountLimits,
}

impl LedgerSettings {
    /// Default branch code.
    pub const DEFAULT_BRANCH: &'static str = "0001";
}

impl Default for LedgerSettings {
    fn default() -> Self {
        Self {
            branch_code: Self::DEFAULT_BRANCH.to_string(),
            default_limits: AccountLimits::default(),
        }
    }
}

impl From<&BankConfig> for LedgerSettings {
    fn from(config: &BankConfig) -> Self {
        Self {
            branch_code: config.branch_code.clone(),
            default_limits: AccountLimits::new(
                config.default_withdrawal_limit,
                config.default_daily_withdrawals,
            ),
        }
    }
}

/// Registry of clients and accounts.
#[derive(Debug, Default)]
pub struct Ledger {
    settings: LedgerSettings,
    clients: Vec<Client>,
    client_index: HashMap<String, usize>,
    accounts: BTreeMap<AccountNumber, Account>,
    next_number: Option<AccountNumber>,
}

impl Ledger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new(settings: LedgerSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    // ========== Clients ==========

    /// Registers a new client.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::DuplicateIdentity`] if the identity is already
    /// registered. The existing client is left untouched.
    pub fn register_client(&mut self, input: NewClient) -> Result<&Client, LedgerError> {
        if self.client_index.contains_key(&input.identity) {
            warn!(identity = %input.identity, "Duplicate client registration rejected");
            return Err(LedgerError::DuplicateIdentity(input.identity));
        }

        let position = self.clients.len();
        self.client_index.insert(input.identity.clone(), position);
        self.clients.push(Client::new(input));

        let client = &self.clients[position];
        info!(identity = %client.identity(), "Client registered");
        Ok(client)
    }

    /// Looks up a client by identity.
    #[must_use]
    pub fn find_client(&self, identity: &str) -> Option<&Client> {
        self.client_index
            .get(identity)
            .map(|&position| &self.clients[position])
    }

    /// Clients in registration order.
    pub fn clients(&self) -> impl Iterator<Item = &Client> {
        self.clients.iter()
    }

    // ========== Accounts ==========

    /// Opens an account with the default limits.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::UnknownClient`] if no client has this identity.
    pub fn open_account(&mut self, identity: &str) -> Result<&Account, LedgerError> {
        let limits = self.settings.default_limits;
        self.open_account_with_limits(identity, limits)
    }

    /// Opens an account with explicit limits.
    ///
    /// The number is assigned only when the account is actually created, so a
    /// rejected request never leaves a gap in the numbering.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::UnknownClient`] if no client has this identity.
    pub fn open_account_with_limits(
        &mut self,
        identity: &str,
        limits: AccountLimits,
    ) -> Result<&Account, LedgerError> {
        let Some(&position) = self.client_index.get(identity) else {
            warn!(%identity, "Account opening rejected, unknown client");
            return Err(LedgerError::UnknownClient(identity.to_string()));
        };

        let number = self.next_number.unwrap_or(AccountNumber::FIRST);
        self.next_number = Some(number.next());

        self.clients[position].add_account(number);
        let account = Account::new(number, self.settings.branch_code.clone(), identity, limits);
        info!(
            account = %number,
            %identity,
            limit = %limits.per_withdrawal,
            daily_withdrawals = limits.daily_withdrawals,
            "Account opened"
        );

        let account: &Account = self.accounts.entry(number).or_insert(account);
        Ok(account)
    }

    /// Looks up an account by number.
    #[must_use]
    pub fn find_account(&self, number: AccountNumber) -> Option<&Account> {
        self.accounts.get(&number)
    }

    /// Accounts in number order.
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    /// Accounts owned by a client, in opening order.
    ///
    /// Empty when the identity is unknown.
    pub fn accounts_of<'a>(
        &'a self,
        identity: &str,
    ) -> impl Iterator<Item = &'a Account> + use<'a> {
        self.find_client(identity)
            .map(Client::accounts)
            .unwrap_or_default()
            .iter()
            .filter_map(|number| self.accounts.get(number))
    }

    /// Client owning an account.
    #[must_use]
    pub fn owner_of(&self, number: AccountNumber) -> Option<&Client> {
        self.find_account(number)
            .and_then(|account| self.find_client(account.owner()))
    }

    // ========== Operations ==========

    /// Deposits into an account.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::AccountNotFound`] before looking at the amount,
    /// otherwise whatever [`Account::deposit`] reports.
    pub fn deposit(
        &mut self,
        number: AccountNumber,
        amount: Decimal,
    ) -> Result<&TransactionRecord, LedgerError> {
        let account = self.account_mut(number)?;
        Ok(account.deposit(amount)?)
    }

    /// Withdraws from an account.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::AccountNotFound`] before looking at the amount,
    /// otherwise whatever [`Account::withdraw`] reports.
    pub fn withdraw(
        &mut self,
        number: AccountNumber,
        amount: Decimal,
        today: NaiveDate,
    ) -> Result<&TransactionRecord, LedgerError> {
        let account = self.account_mut(number)?;
        Ok(account.withdraw(amount, today)?)
    }

    /// Statement of an account.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::AccountNotFound`] for an unknown number.
    pub fn statement(&self, number: AccountNumber) -> Result<Statement<'_>, LedgerError> {
        self.find_account(number)
            .map(Account::statement)
            .ok_or(LedgerError::AccountNotFound(number))
    }

    fn account_mut(&mut self, number: AccountNumber) -> Result<&mut Account, LedgerError> {
        self.accounts.get_mut(&number).ok_or_else(|| {
            warn!(account = %number, "Operation on unknown account rejected");
            LedgerError::AccountNotFound(number)
        })
    }
}
