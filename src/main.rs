//! Bank Batch CLI
//!
//! Command-line interface for running the daily account batch.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --accounts accounts.csv --transactions transactions.csv
//! cargo run -- --accounts accounts.csv --transactions transactions.csv --debug --stats
//! cargo run -- --no-rounding --log-level info
//! ```
//!
//! Without file arguments the built-in sample batch is processed. The report
//! goes to stdout; diagnostics and `--stats` go to stderr.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, malformed CSV row, invalid configuration, etc.)

use bank_batch_engine::cli::{self, CliArgs};
use bank_batch_engine::io;
use bank_batch_engine::{BatchError, BatchProcessor, BatchStats};
use std::io::{stderr, stdout, Write};
use std::process;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

fn main() {
    let args = cli::parse_args();

    setup_logging(args.log_level.into());

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Logging goes to stderr so stdout carries only the report
fn setup_logging(level: LevelFilter) {
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry().with(terminal_log).init();
}

fn run(args: &CliArgs) -> Result<(), BatchError> {
    let config = args.to_batch_config();
    config.validate()?;

    let (mut accounts, transactions) = match (&args.accounts, &args.transactions) {
        (Some(accounts), Some(transactions)) => (
            io::load_accounts(accounts)?,
            io::load_transactions(transactions)?,
        ),
        _ => (io::sample_accounts(), io::sample_transactions()),
    };

    let processor = BatchProcessor::new(config);
    let report = processor.process(&mut accounts, &transactions);

    let mut output = stdout().lock();
    output.write_all(report.text.as_bytes())?;
    output.flush()?;

    if args.stats {
        write_stats(&report.stats, &processor.config().currency)?;
    }

    Ok(())
}

fn write_stats(stats: &BatchStats, currency: &str) -> Result<(), BatchError> {
    let mut err = stderr().lock();
    writeln!(err, "applied={}", stats.applied_count)?;
    writeln!(err, "declined={}", stats.declined_count)?;
    writeln!(err, "unknown_account={}", stats.unknown_account_count)?;
    writeln!(err, "unknown_kind={}", stats.unknown_kind_count)?;
    writeln!(err, "flagged_large={}", stats.flagged_large_count)?;
    writeln!(err, "post_check_violations={}", stats.post_check_violations)?;
    writeln!(
        err,
        "abs_applied_total={} {}",
        stats.absolute_applied_total, currency
    )?;
    writeln!(
        err,
        "projected_annual_interest={} {}",
        stats.projected_annual_interest_total, currency
    )?;
    Ok(())
}
