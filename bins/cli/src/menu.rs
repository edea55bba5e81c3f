//! Interactive menu loop.
//!
//! Reads one command per line, prompts for the arguments it needs, calls the
//! ledger and prints the outcome. Generic over the reader, the writer and the
//! date source so whole sessions can be scripted in tests.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use bankbook_core::{AccountNumber, Ledger, LedgerError, NewClient};
use bankbook_shared::types::Money;
use chrono::NaiveDate;
use thiserror::Error;
use tracing::debug;

use crate::render;

const MENU: &str = "
[nu] New client
[nc] New account
[lc] List accounts
[d]  Deposit
[s]  Withdraw
[e]  Statement
[q]  Quit
=> ";

const DATE_FORMAT: &str = "%d-%m-%Y";

/// Why a single command did not complete.
#[derive(Debug, Error)]
enum CommandError {
    /// The user typed something that could not be parsed.
    #[error("{0}")]
    Input(String),

    /// The ledger refused the operation.
    #[error(transparent)]
    Rejected(#[from] LedgerError),

    /// Input ended in the middle of a command.
    #[error("input closed")]
    Eof,

    /// Reading or writing the console failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Console session over a ledger.
pub struct Menu<'l, R, W, D> {
    ledger: &'l mut Ledger,
    input: R,
    output: W,
    today: D,
}

impl<'l, R, W, D> Menu<'l, R, W, D>
where
    R: BufRead,
    W: Write,
    D: Fn() -> NaiveDate,
{
    /// Creates a session; `today` supplies the calendar date for withdrawals.
    pub fn new(ledger: &'l mut Ledger, input: R, output: W, today: D) -> Self {
        Self {
            ledger,
            input,
            output,
            today,
        }
    }

    /// Runs until `q` or end of input.
    ///
    /// # Errors
    ///
    /// Only console I/O failures end the loop with an error.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            write!(self.output, "{MENU}")?;
            self.output.flush()?;

            let Some(choice) = self.read_line()? else {
                break;
            };

            let result = match choice.as_str() {
                "nu" => self.register_client(),
                "nc" => self.open_account(),
                "lc" => self.list_accounts(),
                "d" => self.deposit(),
                "s" => self.withdraw(),
                "e" => self.statement(),
                "q" => break,
                _ => Err(CommandError::Input(
                    "Invalid operation, please try again.".to_string(),
                )),
            };

            match result {
                Ok(()) => {}
                Err(CommandError::Input(message)) => writeln!(self.output, "{message}")?,
                Err(CommandError::Rejected(err)) => {
                    debug!(code = err.error_code(), "Command rejected");
                    writeln!(self.output, "{}", render::rejection(&err))?;
                }
                Err(CommandError::Eof) => break,
                Err(CommandError::Io(err)) => return Err(err),
            }
        }

        self.output.flush()
    }

    fn register_client(&mut self) -> Result<(), CommandError> {
        let identity = self.prompt("Identity number (digits only): ")?;
        if identity.is_empty() || !identity.chars().all(|c| c.is_ascii_digit()) {
            return Err(CommandError::Input(
                "Invalid identity: use digits only.".to_string(),
            ));
        }
        if self.ledger.find_client(&identity).is_some() {
            return Err(LedgerError::DuplicateIdentity(identity).into());
        }

        let name = self.prompt("Full name: ")?;
        let date_of_birth = self.prompt("Date of birth (dd-mm-yyyy): ")?;
        let date_of_birth = NaiveDate::parse_from_str(&date_of_birth, DATE_FORMAT).map_err(|_| {
            CommandError::Input("Invalid date, expected dd-mm-yyyy.".to_string())
        })?;
        let address = self.prompt("Address (street, number - district - city/state): ")?;

        self.ledger.register_client(NewClient {
            identity,
            name,
            date_of_birth,
            address,
        })?;
        writeln!(self.output, "Client registered successfully!")?;
        Ok(())
    }

    fn open_account(&mut self) -> Result<(), CommandError> {
        let identity = self.prompt("Client identity number: ")?;
        let number = self.ledger.open_account(&identity)?.number();
        writeln!(self.output, "Account {number} opened successfully!")?;
        Ok(())
    }

    fn list_accounts(&mut self) -> Result<(), CommandError> {
        let mut listed = false;
        for account in self.ledger.accounts() {
            let holder = self
                .ledger
                .find_client(account.owner())
                .map_or(account.owner(), |client| client.name());
            writeln!(
                self.output,
                "Branch: {}  Account: {}  Holder: {}",
                account.branch(),
                account.number(),
                holder
            )?;
            listed = true;
        }
        if !listed {
            writeln!(self.output, "No accounts registered.")?;
        }
        Ok(())
    }

    fn deposit(&mut self) -> Result<(), CommandError> {
        let number = self.prompt_account_number()?;
        let amount = self.prompt_amount("Deposit amount: ")?;
        self.ledger.deposit(number, amount.amount())?;
        writeln!(self.output, "Deposit of {amount} completed successfully.")?;
        Ok(())
    }

    fn withdraw(&mut self) -> Result<(), CommandError> {
        let number = self.prompt_account_number()?;
        let amount = self.prompt_amount("Withdrawal amount: ")?;
        let today = (self.today)();
        self.ledger.withdraw(number, amount.amount(), today)?;
        writeln!(self.output, "Withdrawal of {amount} completed successfully.")?;
        Ok(())
    }

    fn statement(&mut self) -> Result<(), CommandError> {
        let number = self.prompt_account_number()?;
        let text = render::statement(&self.ledger.statement(number)?);
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    fn prompt_account_number(&mut self) -> Result<AccountNumber, CommandError> {
        let raw = self.prompt("Account number: ")?;
        raw.parse::<u64>()
            .map(AccountNumber)
            .map_err(|_| CommandError::Input(format!("Invalid account number: {raw}")))
    }

    fn prompt_amount(&mut self, label: &str) -> Result<Money, CommandError> {
        let raw = self.prompt(label)?;
        Money::from_str(&raw).map_err(|err| CommandError::Input(err.to_string()))
    }

    fn prompt(&mut self, label: &str) -> Result<String, CommandError> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        self.read_line()?.ok_or(CommandError::Eof)
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
