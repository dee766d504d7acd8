//! Zero-amount transaction filter

use crate::types::{BatchConfig, Transaction};

/// Transactions that survived filtering, plus the debug lines for the rest
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilteredBatch<'a> {
    /// Surviving transactions, in original order
    pub retained: Vec<&'a Transaction>,

    /// One `filtered zero txn for <id>` message per dropped transaction when
    /// debug is enabled, in original order
    pub debug_lines: Vec<String>,
}

/// Drop zero-amount transactions unless the configuration keeps them
///
/// A transaction survives iff `include_zero_amount_txns` is set or its
/// amount is non-zero. The filter is stable and idempotent.
pub fn filter_transactions<'a>(
    transactions: &'a [Transaction],
    config: &BatchConfig,
) -> FilteredBatch<'a> {
    let mut batch = FilteredBatch::default();

    for transaction in transactions {
        if config.include_zero_amount_txns || !transaction.amount.is_zero() {
            batch.retained.push(transaction);
        } else if config.debug {
            batch
                .debug_lines
                .push(format!("filtered zero txn for {}", transaction.account_id));
        }
    }

    batch
}
