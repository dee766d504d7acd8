//! Aggregate statistics for one batch

use rust_decimal::Decimal;

/// Counters and totals accumulated while a batch is applied
///
/// Created fresh for every batch. `skipped_count` always equals
/// `declined_count + unknown_account_count + unknown_kind_count`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchStats {
    /// Transactions that mutated a balance
    pub applied_count: usize,

    /// Declined, unknown-account and unknown-kind transactions
    pub skipped_count: usize,

    /// Transactions rejected by the floor rule or by overflow
    pub declined_count: usize,

    /// Transactions whose account id matched nothing
    pub unknown_account_count: usize,

    /// Transactions whose kind was not understood
    pub unknown_kind_count: usize,

    /// Transactions at or above the large-transaction threshold
    pub flagged_large_count: usize,

    /// Accounts flagged by the post-check sweep
    pub post_check_violations: usize,

    /// Sum of `|amount|` over applied transactions
    pub absolute_applied_total: Decimal,

    /// Change in projected annual interest caused by applied savings
    /// transactions. Never printed in the report.
    pub projected_annual_interest_total: Decimal,
}

impl BatchStats {
    /// Create zeroed statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Count an applied transaction of `amount`
    ///
    /// The total saturates at `Decimal::MAX` instead of overflowing.
    pub fn record_applied(&mut self, amount: Decimal) {
        self.applied_count += 1;
        self.absolute_applied_total = self.absolute_applied_total.saturating_add(amount.abs());
    }

    /// Count a declined transaction
    pub fn record_declined(&mut self) {
        self.skipped_count += 1;
        self.declined_count += 1;
    }

    /// Count a transaction for an account that does not exist
    pub fn record_unknown_account(&mut self) {
        self.skipped_count += 1;
        self.unknown_account_count += 1;
    }

    /// Count a transaction of an unknown kind
    pub fn record_unknown_kind(&mut self) {
        self.skipped_count += 1;
        self.unknown_kind_count += 1;
    }

    /// Add `balance_delta * interest_rate` to the projected interest total
    pub fn record_projected_interest(&mut self, balance_delta: Decimal, interest_rate: Decimal) {
        let interest = balance_delta.saturating_mul(interest_rate);
        self.projected_annual_interest_total = self
            .projected_annual_interest_total
            .saturating_add(interest);
    }

    /// Count a transaction that tripped the large-transaction rule
    pub fn record_large_transaction(&mut self) {
        self.flagged_large_count += 1;
    }

    /// Count an account flagged by the post-check sweep
    pub fn record_post_check_violation(&mut self) {
        self.post_check_violations += 1;
    }

    /// Number of transactions that reached a terminal outcome
    pub fn processed_count(&self) -> usize {
        self.applied_count + self.skipped_count
    }
}
