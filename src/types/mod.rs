//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account and its closed set of variants
//! - `transaction`: Transactions, kinds and per-transaction outcomes
//! - `config`: Batch configuration
//! - `stats`: Aggregate batch statistics
//! - `error`: Error types for the I/O and configuration boundary

pub mod account;
pub mod config;
pub mod error;
pub mod stats;
pub mod transaction;

pub use account::{Account, AccountId, AccountKind};
pub use config::{BatchConfig, MAX_DECIMAL_DIGITS};
pub use error::BatchError;
pub use stats::BatchStats;
pub use transaction::{DeclineReason, Transaction, TransactionKind, TransactionOutcome};
