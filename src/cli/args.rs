use clap::{Parser, ValueEnum};
use rust_decimal::Decimal;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

use crate::types::BatchConfig;

/// Run the daily account batch and print its report
#[derive(Parser, Debug)]
#[command(name = "bank-batch")]
#[command(
    about = "Apply a daily transaction batch to bank accounts and print the report",
    long_about = None
)]
pub struct CliArgs {
    /// Accounts CSV (type,id,owner,balance,overdraft_limit,interest_rate)
    #[arg(
        long = "accounts",
        value_name = "CSV",
        requires = "transactions",
        help = "Accounts CSV file; the built-in sample batch is used when omitted"
    )]
    pub accounts: Option<PathBuf>,

    /// Transactions CSV (account_id,kind,amount,memo)
    #[arg(
        long = "transactions",
        value_name = "CSV",
        requires = "accounts",
        help = "Transactions CSV file; must be given together with --accounts"
    )]
    pub transactions: Option<PathBuf>,

    /// Keep zero-amount transactions instead of filtering them out
    #[arg(long = "include-zero")]
    pub include_zero: bool,

    /// Absolute amount at or above which the account is flagged
    #[arg(long = "flag-threshold", value_name = "AMOUNT")]
    pub flag_threshold: Option<Decimal>,

    /// Post-transaction balance at or above which a VIP note is written
    #[arg(long = "vip-threshold", value_name = "AMOUNT")]
    pub vip_threshold: Option<Decimal>,

    /// Write [dbg] lines into the report
    #[arg(long = "debug")]
    pub debug: bool,

    /// Currency label printed after amounts
    #[arg(long = "currency", value_name = "CODE")]
    pub currency: Option<String>,

    /// Fractional digits when rounding is enabled
    #[arg(long = "digits", value_name = "N")]
    pub digits: Option<u32>,

    /// Print amounts unrounded
    #[arg(long = "no-rounding")]
    pub no_rounding: bool,

    /// Print batch statistics to stderr after the report
    #[arg(long = "stats")]
    pub stats: bool,

    /// Diagnostic log level (written to stderr)
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    pub log_level: LogLevel,
}

/// Log levels accepted by `--log-level`
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

impl CliArgs {
    /// Create a BatchConfig from CLI arguments
    ///
    /// Starts from `BatchConfig::default()` and overrides only the settings
    /// given on the command line. The result is not validated here.
    ///
    /// # Returns
    ///
    /// A `BatchConfig` with values from CLI arguments or defaults.
    pub fn to_batch_config(&self) -> BatchConfig {
        let mut config = BatchConfig::default()
            .with_include_zero_amount_txns(self.include_zero)
            .with_debug(self.debug)
            .with_rounding(!self.no_rounding);

        if let Some(threshold) = self.flag_threshold {
            config = config.with_flag_large_txn_threshold(threshold);
        }
        if let Some(threshold) = self.vip_threshold {
            config = config.with_vip_balance_threshold(threshold);
        }
        if let Some(currency) = &self.currency {
            config = config.with_currency(currency.clone());
        }
        if let Some(digits) = self.digits {
            config = config.with_decimal_digits(digits);
        }

        config
    }
}
