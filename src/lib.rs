//! Bank Batch Engine Library
//! # Overview
//!
//! This library applies a day's pending transactions to a set of bank
//! accounts and renders a plain-text batch report.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, Transaction, BatchConfig, etc.)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::indexer`] - Account lookup by id
//!   - [`core::filter`] - Zero-amount filtering
//!   - [`core::applier`] - Deposit and withdrawal rules, flags and notes
//!   - [`core::post_check`] - Post-batch withdrawal-floor sweep
//!   - [`core::engine`] - Batch orchestration
//! - [`report`] - Amount formatting and report text assembly
//! - [`io`] - CSV loading and the built-in sample batch
//!
//! # Account Types
//!
//! - **Checking**: may overdraw down to `-overdraft_limit`
//! - **Savings**: may not go below zero; carries an interest rate used only
//!   for the projected interest statistic
//!
//! # Transaction Outcomes
//!
//! Each transaction that survives the filter reaches exactly one outcome:
//!
//! - **Applied**: the balance changed
//! - **Declined**: a withdrawal would cross the account's floor
//! - **SkippedUnknownAccount**: no account with that id
//! - **SkippedUnknownKind**: neither a deposit nor a withdrawal
//!
//! # Example
//!
//! ```
//! use bank_batch_engine::{process_batch, Account, BatchConfig, Transaction};
//! use rust_decimal::Decimal;
//!
//! let mut accounts = vec![Account::checking(
//!     "C-1",
//!     "A. Chen",
//!     Decimal::new(100, 0),
//!     Decimal::ZERO,
//! )];
//! let transactions = vec![Transaction::withdraw("C-1", Decimal::new(40, 0), "ATM")];
//!
//! let report = process_batch(&mut accounts, &transactions, &BatchConfig::default());
//!
//! assert_eq!(accounts[0].balance, Decimal::new(60, 0));
//! assert!(report.text.contains("  newBal=60.00\n"));
//! ```

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod report;
pub mod types;

pub use core::{process_batch, BatchProcessor, BatchReport};
pub use io::{load_accounts, load_transactions, sample_accounts, sample_transactions};
pub use report::{AmountFormatter, ReportWriter};
pub use types::{
    Account, AccountId, AccountKind, BatchConfig, BatchError, BatchStats, DeclineReason,
    Transaction, TransactionKind, TransactionOutcome,
};
