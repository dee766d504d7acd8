//! CSV format handling for account and transaction files
//!
//! This module centralizes all CSV format concerns, providing:
//! - Record structures for deserialization
//! - Conversion from CSV records to domain types
//!
//! All functions are pure (no I/O) for easy testing.
//!
//! # Formats
//!
//! ```text
//! type,id,owner,balance,overdraft_limit,interest_rate
//! checking,C-100,A. Chen,250.00,100.00,
//! savings,S-200,B. Patel,1200.00,,0.02
//!
//! account_id,kind,amount,memo
//! C-100,WITHDRAW,75.00,ATM withdrawal
//! ```

use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

use crate::types::{Account, BatchError, Transaction, TransactionKind};

/// Account row
///
/// The variant-specific columns are optional because each row only needs the
/// one that matches its type.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AccountCsvRecord {
    #[serde(rename = "type")]
    pub account_type: String,
    pub id: String,
    pub owner: String,
    pub balance: String,
    pub overdraft_limit: Option<String>,
    pub interest_rate: Option<String>,
}

/// Transaction row
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TransactionCsvRecord {
    pub account_id: String,
    pub kind: String,
    pub amount: String,
    #[serde(default)]
    pub memo: Option<String>,
}

/// Parse a required decimal column
fn parse_decimal(field: &str, raw: &str, subject: &str) -> Result<Decimal, BatchError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(BatchError::missing_field(field, subject));
    }
    Decimal::from_str(trimmed).map_err(|_| BatchError::invalid_amount(field, raw, subject))
}

/// Parse an optional decimal column that the row's type requires
fn parse_required(field: &str, raw: Option<&str>, subject: &str) -> Result<Decimal, BatchError> {
    match raw {
        Some(value) => parse_decimal(field, value, subject),
        None => Err(BatchError::missing_field(field, subject)),
    }
}

/// Convert an AccountCsvRecord to an Account
///
/// This function:
/// - Matches the type column case-insensitively against `checking`/`savings`
/// - Parses the balance and the column the type requires
/// - Ignores the column that belongs to the other type
///
/// # Arguments
///
/// * `record` - The deserialized CSV record
///
/// # Errors
///
/// `InvalidAccountType`, `MissingField` or `InvalidAmount`, without a line
/// number; the reader attaches one.
pub fn convert_account_record(record: AccountCsvRecord) -> Result<Account, BatchError> {
    let subject = format!("account {}", record.id);
    let balance = parse_decimal("balance", &record.balance, &subject)?;

    match record.account_type.trim().to_lowercase().as_str() {
        "checking" => {
            let limit = parse_required(
                "overdraft_limit",
                record.overdraft_limit.as_deref(),
                &subject,
            )?;
            Ok(Account::checking(record.id, record.owner, balance, limit))
        }
        "savings" => {
            let rate = parse_required("interest_rate", record.interest_rate.as_deref(), &subject)?;
            Ok(Account::savings(record.id, record.owner, balance, rate))
        }
        _ => Err(BatchError::invalid_account_type(&record.account_type, &record.id)),
    }
}

/// Convert a TransactionCsvRecord to a Transaction
///
/// Unrecognized kinds are kept as `TransactionKind::Other`; the batch skips
/// them later instead of failing the load.
///
/// # Errors
///
/// `MissingField` or `InvalidAmount` when the amount does not parse
pub fn convert_transaction_record(record: TransactionCsvRecord) -> Result<Transaction, BatchError> {
    let subject = format!("transaction for {}", record.account_id);
    let amount = parse_decimal("amount", &record.amount, &subject)?;
    let kind = match TransactionKind::from_str(&record.kind) {
        Ok(kind) => kind,
        Err(never) => match never {},
    };

    Ok(Transaction::new(
        record.account_id,
        kind,
        amount,
        record.memo.unwrap_or_default(),
    ))
}
