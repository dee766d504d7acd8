//! I/O module
//!
//! Handles the CSV boundary around the batch core.
//!
//! # Components
//!
//! - `csv_format` - Row structures and conversion to domain types
//! - `reader` - File and stream loaders for accounts and transactions
//! - `sample` - Built-in sample batch used when no files are given

pub mod csv_format;
pub mod reader;
pub mod sample;

pub use csv_format::{
    convert_account_record, convert_transaction_record, AccountCsvRecord, TransactionCsvRecord,
};
pub use reader::{load_accounts, load_transactions, read_accounts, read_transactions};
pub use sample::{sample_accounts, sample_transactions};
