//! Bankbook console
//!
//! Text-menu front end for the in-memory ledger. All state is discarded when
//! the process exits.

mod menu;
mod render;

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use bankbook_core::{Ledger, LedgerSettings};
use bankbook_shared::{AppConfig, AppError};
use chrono::Local;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::menu::Menu;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("bankbook: {err:#}");
            let code = err
                .downcast_ref::<AppError>()
                .map_or(1, AppError::exit_code);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

fn run() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;

    // Logs go to stderr so they never interleave with the menu
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let mut ledger = Ledger::new(LedgerSettings::from(&config.bank));
    info!(
        branch = %config.bank.branch_code,
        limit = %config.bank.default_withdrawal_limit,
        daily_withdrawals = config.bank.default_daily_withdrawals,
        "Ledger ready"
    );

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    Menu::new(&mut ledger, stdin, stdout, || Local::now().date_naive())
        .run()
        .map_err(|err| AppError::Internal(format!("console I/O failed: {err}")))
        .context("menu session aborted")?;

    info!(
        clients = ledger.clients().count(),
        accounts = ledger.accounts().count(),
        "Session closed"
    );
    Ok(())
}
