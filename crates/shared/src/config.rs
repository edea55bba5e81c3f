//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Branch and account defaults.
    #[serde(default)]
    pub bank: BankConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Branch and account defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct BankConfig {
    /// Branch code stamped on every account.
    #[serde(default = "default_branch_code")]
    pub branch_code: String,
    /// Per-transaction withdrawal ceiling for new accounts.
    #[serde(default = "default_withdrawal_limit")]
    pub default_withdrawal_limit: Decimal,
    /// Withdrawals allowed per calendar day for new accounts.
    #[serde(default = "default_daily_withdrawals")]
    pub default_daily_withdrawals: u32,
}

fn default_branch_code() -> String {
    "0001".to_string()
}

fn default_withdrawal_limit() -> Decimal {
    Decimal::new(50000, 2)
}

fn default_daily_withdrawals() -> u32 {
    3
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            branch_code: default_branch_code(),
            default_withdrawal_limit: default_withdrawal_limit(),
            default_daily_withdrawals: default_daily_withdrawals(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "bankbook=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones overriding earlier ones:
    /// `config/default`, `config/{RUN_MODE}`, then `BANKBOOK__*` variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or fails validation.
    pub fn load() -> AppResult<Self> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("BANKBOOK").separator("__"))
            .build()?;

        let config: Self = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values that deserialize fine but make no sense for a branch.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` describing the first invalid value.
    pub fn validate(&self) -> AppResult<()> {
        if self.bank.branch_code.trim().is_empty() {
            return Err(AppError::Config("bank.branch_code must not be empty".into()));
        }
        if self.bank.default_withdrawal_limit <= Decimal::ZERO {
            return Err(AppError::Config(format!(
                "bank.default_withdrawal_limit must be positive, got {}",
                self.bank.default_withdrawal_limit
            )));
        }
        Ok(())
    }
}
