//! CSV loaders for the account set and the pending transactions
//!
//! Both files are read completely before the batch starts. Delegates CSV
//! format concerns to the csv_format module.
//!
//! # Error Handling
//!
//! - A missing file is reported as `FileNotFound`
//! - Any malformed row aborts the load with a `ParseError` carrying the line
//!   number (the header is line 1)

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;
use tracing::debug;

use crate::io::csv_format::{
    convert_account_record, convert_transaction_record, AccountCsvRecord, TransactionCsvRecord,
};
use crate::types::{Account, BatchError, Transaction};

fn open(path: &Path) -> Result<File, BatchError> {
    File::open(path).map_err(|error| match error.kind() {
        ErrorKind::NotFound => BatchError::file_not_found(&path.display().to_string()),
        _ => BatchError::from(error),
    })
}

/// Deserialize and convert every row of a CSV source
///
/// The reader is configured to:
/// - Trim whitespace from all fields
/// - Allow flexible field counts (so a trailing optional column may be left off)
fn read_rows<R, C, T, F>(source: R, convert: F) -> Result<Vec<T>, BatchError>
where
    R: Read,
    C: DeserializeOwned,
    F: Fn(C) -> Result<T, BatchError>,
{
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    let mut rows = Vec::new();
    let mut record = StringRecord::new();

    while reader.read_record(&mut record)? {
        let line = record.position().map(|position| position.line());
        let parsed: C = record
            .deserialize(Some(&headers))
            .map_err(|error| BatchError::from(error).at_line(line))?;
        rows.push(convert(parsed).map_err(|error| error.at_line(line))?);
    }

    Ok(rows)
}

/// Read accounts from any CSV source
///
/// # Errors
///
/// `ParseError` for the first malformed row
pub fn read_accounts<R: Read>(source: R) -> Result<Vec<Account>, BatchError> {
    read_rows::<_, AccountCsvRecord, _, _>(source, convert_account_record)
}

/// Read transactions from any CSV source
///
/// # Errors
///
/// `ParseError` for the first malformed row
pub fn read_transactions<R: Read>(source: R) -> Result<Vec<Transaction>, BatchError> {
    read_rows::<_, TransactionCsvRecord, _, _>(source, convert_transaction_record)
}

/// Load the account set from a CSV file
///
/// # Arguments
///
/// * `path` - Path to a `type,id,owner,balance,overdraft_limit,interest_rate` file
///
/// # Returns
///
/// * `Ok(Vec<Account>)` in file order, all unflagged
/// * `Err(BatchError)` if the file is missing or any row is malformed
pub fn load_accounts(path: &Path) -> Result<Vec<Account>, BatchError> {
    let accounts = read_accounts(open(path)?)?;
    debug!(path = %path.display(), count = accounts.len(), "Loaded accounts");
    Ok(accounts)
}

/// Load pending transactions from a CSV file
///
/// # Arguments
///
/// * `path` - Path to an `account_id,kind,amount,memo` file
///
/// # Returns
///
/// * `Ok(Vec<Transaction>)` in file order
/// * `Err(BatchError)` if the file is missing or any row is malformed
pub fn load_transactions(path: &Path) -> Result<Vec<Transaction>, BatchError> {
    let transactions = read_transactions(open(path)?)?;
    debug!(path = %path.display(), count = transactions.len(), "Loaded transactions");
    Ok(transactions)
}
