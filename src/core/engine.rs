//! Batch processing engine
//!
//! This module provides the `BatchProcessor`. It runs the four batch stages
//! in order over one account set:
//!
//! 1. Index accounts by id
//! 2. Filter zero-amount transactions
//! 3. Apply the surviving transactions, then sweep all accounts for floor
//!    violations
//! 4. Render the summaries and totals
//!
//! The processor borrows the account slice mutably for one call. Balances
//! and flags are updated in place and stay with the caller afterwards.

use tracing::info;

use crate::core::applier::Applier;
use crate::core::filter::filter_transactions;
use crate::core::indexer::AccountIndex;
use crate::core::post_check::run_post_checks;
use crate::report::ReportWriter;
use crate::types::{Account, BatchConfig, BatchStats, Transaction, TransactionOutcome};

/// Everything a batch run produces besides the mutated accounts
#[derive(Debug, Clone, PartialEq)]
pub struct BatchReport {
    /// Rendered report text
    pub text: String,

    /// Aggregate counters, including the projected interest total that the
    /// text never shows
    pub stats: BatchStats,

    /// Outcome of each transaction that survived the filter, in order
    pub outcomes: Vec<TransactionOutcome>,
}

/// Batch processor
///
/// Holds the configuration so the same settings can be reused across
/// independent batches.
#[derive(Debug, Clone, Default)]
pub struct BatchProcessor {
    config: BatchConfig,
}

impl BatchProcessor {
    /// Create a processor with the given configuration
    pub fn new(config: BatchConfig) -> Self {
        BatchProcessor { config }
    }

    /// Configuration this processor runs with
    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Run one batch
    ///
    /// # Arguments
    ///
    /// * `accounts` - Account set, mutated in place
    /// * `transactions` - Pending transactions in processing order
    ///
    /// # Returns
    ///
    /// The report text, statistics and per-transaction outcomes. Unknown
    /// accounts and kinds are outcomes, so this never fails.
    pub fn process(&self, accounts: &mut [Account], transactions: &[Transaction]) -> BatchReport {
        let config = &self.config;

        info!(
            accounts = accounts.len(),
            transactions = transactions.len(),
            "Starting batch"
        );

        let mut report = ReportWriter::new(config);
        let mut stats = BatchStats::new();

        let index = AccountIndex::build(accounts);

        let filtered = filter_transactions(transactions, config);
        for line in &filtered.debug_lines {
            report.debug(line);
        }

        report.begin_apply();
        let applier = Applier::new(config, &index);
        let outcomes: Vec<TransactionOutcome> = filtered
            .retained
            .iter()
            .map(|transaction| applier.apply(accounts, transaction, &mut stats, &mut report))
            .collect();

        run_post_checks(accounts, &mut stats, &mut report);

        report.summary_a(accounts);
        report.totals(&stats);
        report.summary_b(accounts);

        info!(
            applied = stats.applied_count,
            skipped = stats.skipped_count,
            filtered_out = transactions.len() - filtered.retained.len(),
            post_check_violations = stats.post_check_violations,
            "Batch complete"
        );

        BatchReport {
            text: report.finish(),
            stats,
            outcomes,
        }
    }
}

/// Run one batch with `config`
///
/// Convenience wrapper around [`BatchProcessor::process`].
pub fn process_batch(
    accounts: &mut [Account],
    transactions: &[Transaction],
    config: &BatchConfig,
) -> BatchReport {
    BatchProcessor::new(config.clone()).process(accounts, transactions)
}
