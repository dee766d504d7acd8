//! Transaction applier
//!
//! Applies filtered transactions to their accounts one at a time and writes
//! the apply log as it goes.
//!
//! Each transaction makes exactly one transition:
//! `Pending → {Applied, Declined, SkippedUnknownAccount, SkippedUnknownKind}`.
//! After the transition, two rules run no matter which outcome was reached:
//! - `|amount| >= flag_large_txn_threshold` flags the account
//! - `balance >= vip_balance_threshold` adds a VIP note
//!
//! Both rules look at the balance as it stands after the transition, so a
//! declined withdrawal can still flag its account.

use rust_decimal::Decimal;
use tracing::debug;

use crate::core::indexer::AccountIndex;
use crate::report::ReportWriter;
use crate::types::{
    Account, BatchConfig, BatchStats, DeclineReason, Transaction, TransactionKind,
    TransactionOutcome,
};

/// Applies transactions against an indexed account slice
pub struct Applier<'a> {
    config: &'a BatchConfig,
    index: &'a AccountIndex,
}

impl<'a> Applier<'a> {
    /// Create an applier for one batch
    ///
    /// # Arguments
    ///
    /// * `config` - Thresholds and debug settings
    /// * `index` - Lookup built from the same slice later passed to `apply`
    pub fn new(config: &'a BatchConfig, index: &'a AccountIndex) -> Self {
        Applier { config, index }
    }

    /// Apply a single transaction
    ///
    /// Resolves the target account, applies the deposit or withdrawal rule,
    /// updates `stats`, and writes the transaction's block to `report`.
    /// Unknown accounts produce at most one `[dbg]` line and no block.
    ///
    /// # Returns
    ///
    /// The terminal outcome of the transaction
    pub fn apply(
        &self,
        accounts: &mut [Account],
        transaction: &Transaction,
        stats: &mut BatchStats,
        report: &mut ReportWriter,
    ) -> TransactionOutcome {
        let Some(account) = self
            .index
            .get(&transaction.account_id)
            .and_then(|position| accounts.get_mut(position))
        else {
            stats.record_unknown_account();
            debug!(account = %transaction.account_id, "Skipping transaction for unknown account");
            if self.config.debug {
                report.debug(&format!("unknown {}", transaction.account_id));
            }
            return TransactionOutcome::SkippedUnknownAccount;
        };

        report.transaction_header(transaction, account);

        let outcome = match &transaction.kind {
            TransactionKind::Deposit => credit(account, transaction.amount, stats),
            TransactionKind::Withdraw => debit(account, transaction.amount, stats),
            TransactionKind::Other(_) => {
                stats.record_unknown_kind();
                TransactionOutcome::SkippedUnknownKind
            }
        };

        match &outcome {
            TransactionOutcome::Applied { new_balance } => report.new_balance(*new_balance),
            TransactionOutcome::Declined { reason } => report.declined(*reason),
            TransactionOutcome::SkippedUnknownKind => report.unknown_kind(),
            TransactionOutcome::SkippedUnknownAccount => {}
        }

        debug!(
            account = %account.id,
            kind = %transaction.kind,
            amount = %transaction.amount,
            outcome = ?outcome,
            "Transaction resolved"
        );

        if transaction.amount.abs() >= self.config.flag_large_txn_threshold {
            account.flagged = true;
            stats.record_large_transaction();
            report.large_transaction_flag();
        }

        if account.balance >= self.config.vip_balance_threshold {
            report.vip_note();
        }

        report.end_transaction();

        outcome
    }
}

/// Deposit: succeeds unless the exact balance does not fit
fn credit(account: &mut Account, amount: Decimal, stats: &mut BatchStats) -> TransactionOutcome {
    match account.balance_after_deposit(amount) {
        Ok(new_balance) => settle(account, new_balance, amount, amount, stats),
        Err(reason) => decline(reason, stats),
    }
}

/// Withdrawal: succeeds iff the balance stays at or above the floor
fn debit(account: &mut Account, amount: Decimal, stats: &mut BatchStats) -> TransactionOutcome {
    match account.balance_after_withdrawal(amount) {
        Ok(new_balance) => settle(account, new_balance, amount, -amount, stats),
        Err(reason) => decline(reason, stats),
    }
}

fn decline(reason: DeclineReason, stats: &mut BatchStats) -> TransactionOutcome {
    stats.record_declined();
    TransactionOutcome::Declined { reason }
}

fn settle(
    account: &mut Account,
    new_balance: Decimal,
    amount: Decimal,
    balance_delta: Decimal,
    stats: &mut BatchStats,
) -> TransactionOutcome {
    account.balance = new_balance;
    stats.record_applied(amount);
    if let Some(rate) = account.kind.interest_rate() {
        stats.record_projected_interest(balance_delta, rate);
    }
    TransactionOutcome::Applied { new_balance }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::sample_accounts;

    struct Fixture {
        accounts: Vec<Account>,
        config: BatchConfig,
    }

    impl Fixture {
        fn new(config: BatchConfig) -> Self {
            Fixture {
                accounts: sample_accounts(),
                config,
            }
        }

        /// Apply one transaction; returns outcome, stats and the apply-log text
        fn run(&mut self, transaction: Transaction) -> (TransactionOutcome, BatchStats, String) {
            let index = AccountIndex::build(&self.accounts);
            let applier = Applier::new(&self.config, &index);
            let mut stats = BatchStats::new();
            let mut report = ReportWriter::new(&self.config);

            let outcome = applier.apply(&mut self.accounts, &transaction, &mut stats, &mut report);

            let text = report.finish();
            let log = text
                .strip_prefix("=== BANK BATCH REPORT ===\n")
                .unwrap_or(&text)
                .to_string();
            (outcome, stats, log)
        }

        fn account(&self, id: &str) -> &Account {
            self.accounts.iter().find(|a| a.id == id).unwrap()
        }
    }

    #[test]
    fn test_deposit_increases_balance() {
        let mut fixture = Fixture::new(BatchConfig::default());

        let (outcome, stats, log) =
            fixture.run(Transaction::deposit("C-100", Decimal::new(50, 0), "cash"));

        assert_eq!(
            outcome,
            TransactionOutcome::Applied {
                new_balance: Decimal::new(300, 0)
            }
        );
        assert_eq!(fixture.account("C-100").balance, Decimal::new(300, 0));
        assert_eq!(stats.applied_count, 1);
        assert_eq!(stats.absolute_applied_total, Decimal::new(50, 0));
        assert_eq!(
            log,
            "DEPOSIT acct=C-100 owner=A. Chen amt=50.00 USD memo=cash\n  newBal=300.00\n\n"
        );
    }

    #[test]
    fn test_checking_withdrawal_within_overdraft_succeeds() {
        let mut fixture = Fixture::new(BatchConfig::default());

        let (outcome, _, _) =
            fixture.run(Transaction::withdraw("C-100", Decimal::new(300, 0), "rent"));

        assert!(outcome.is_applied());
        assert_eq!(fixture.account("C-100").balance, Decimal::new(-50, 0));
    }

    #[test]
    fn test_checking_withdrawal_beyond_overdraft_declined() {
        let mut fixture = Fixture::new(BatchConfig::default());

        let (outcome, stats, log) =
            fixture.run(Transaction::withdraw("C-300", Decimal::new(120, 0), "billpay"));

        assert_eq!(
            outcome,
            TransactionOutcome::Declined {
                reason: DeclineReason::ExceedsOverdraft
            }
        );
        assert_eq!(fixture.account("C-300").balance, Decimal::new(40, 0));
        assert_eq!(stats.skipped_count, 1);
        assert_eq!(stats.declined_count, 1);
        assert!(log.contains("  DECLINED (exceeds overdraft)\n"));
        assert!(!log.contains("newBal"));
    }

    #[test]
    fn test_savings_withdrawal_that_would_go_negative_declined_but_flagged() {
        let mut fixture = Fixture::new(BatchConfig::default());

        let (outcome, stats, log) =
            fixture.run(Transaction::withdraw("S-200", Decimal::new(1300, 0), "transfer"));

        assert_eq!(
            outcome,
            TransactionOutcome::Declined {
                reason: DeclineReason::InsufficientFunds
            }
        );
        let account = fixture.account("S-200");
        assert_eq!(account.balance, Decimal::new(1200, 0));
        assert!(account.flagged);
        assert_eq!(stats.flagged_large_count, 1);
        assert!(log.contains("  DECLINED (insufficient funds)\n  ** FLAG large txn **\n"));
    }

    #[test]
    fn test_large_deposit_flags_and_adds_vip_note() {
        let mut fixture = Fixture::new(BatchConfig::default());

        let (_, stats, log) =
            fixture.run(Transaction::deposit("S-400", Decimal::new(1500, 0), "bonus"));

        let account = fixture.account("S-400");
        assert_eq!(account.balance, Decimal::new(10500, 0));
        assert!(account.flagged);
        assert_eq!(
            log,
            "DEPOSIT acct=S-400 owner=D. Smith amt=1500.00 USD memo=bonus\n  \
             newBal=10500.00\n  \
             ** FLAG large txn **\n  \
             VIP NOTE\n\n"
        );
        // 1500 * 0.03
        assert_eq!(stats.projected_annual_interest_total, Decimal::new(45, 0));
    }

    #[test]
    fn test_unknown_kind_skipped_without_mutation() {
        let mut fixture = Fixture::new(BatchConfig::default());
        let transfer = Transaction::new(
            "C-100",
            TransactionKind::Other("TRANSFER".to_string()),
            Decimal::new(10, 0),
            "move",
        );

        let (outcome, stats, log) = fixture.run(transfer);

        assert_eq!(outcome, TransactionOutcome::SkippedUnknownKind);
        assert_eq!(fixture.account("C-100").balance, Decimal::new(250, 0));
        assert_eq!(stats.skipped_count, 1);
        assert_eq!(stats.unknown_kind_count, 1);
        assert_eq!(
            log,
            "TRANSFER acct=C-100 owner=A. Chen amt=10.00 USD memo=move\n  SKIP unknown kind\n\n"
        );
    }

    #[test]
    fn test_unknown_kind_still_runs_flag_and_vip_rules() {
        let mut fixture = Fixture::new(BatchConfig::default());
        let transfer = Transaction::new(
            "S-400",
            TransactionKind::Other("TRANSFER".to_string()),
            Decimal::new(2000, 0),
            "",
        );

        let (_, _, log) = fixture.run(transfer);

        assert!(fixture.account("S-400").flagged);
        assert!(log.ends_with("  SKIP unknown kind\n  ** FLAG large txn **\n  VIP NOTE\n\n"));
    }

    #[test]
    fn test_unknown_account_without_debug_writes_nothing() {
        let mut fixture = Fixture::new(BatchConfig::default());

        let (outcome, stats, log) =
            fixture.run(Transaction::deposit("X-999", Decimal::new(10, 0), "ghost"));

        assert_eq!(outcome, TransactionOutcome::SkippedUnknownAccount);
        assert_eq!(stats.unknown_account_count, 1);
        assert_eq!(stats.skipped_count, 1);
        assert_eq!(log, "");
    }

    #[test]
    fn test_unknown_account_with_debug_writes_debug_line_only() {
        let mut fixture = Fixture::new(BatchConfig::default().with_debug(true));

        let (_, _, log) = fixture.run(Transaction::deposit("X-999", Decimal::new(10, 0), "ghost"));

        assert_eq!(log, "[dbg] unknown X-999\n");
    }

    #[test]
    fn test_zero_amount_withdrawal_succeeds() {
        let mut fixture = Fixture::new(BatchConfig::default());

        let (outcome, stats, _) =
            fixture.run(Transaction::withdraw("C-300", Decimal::ZERO, "noop"));

        assert!(outcome.is_applied());
        assert_eq!(stats.applied_count, 1);
        assert_eq!(fixture.account("C-300").balance, Decimal::new(40, 0));
    }

    #[test]
    fn test_negative_withdrawal_counts_absolute_amount() {
        let mut fixture = Fixture::new(BatchConfig::default());

        let (outcome, stats, _) =
            fixture.run(Transaction::withdraw("C-100", Decimal::new(-20, 0), "reversal"));

        assert!(outcome.is_applied());
        assert_eq!(fixture.account("C-100").balance, Decimal::new(270, 0));
        assert_eq!(stats.absolute_applied_total, Decimal::new(20, 0));
    }

    #[test]
    fn test_savings_withdrawal_reduces_projected_interest() {
        let mut fixture = Fixture::new(BatchConfig::default());

        let (_, stats, _) =
            fixture.run(Transaction::withdraw("S-200", Decimal::new(100, 0), "atm"));

        // -100 * 0.02
        assert_eq!(stats.projected_annual_interest_total, Decimal::new(-2, 0));
    }

    #[test]
    fn test_checking_transactions_leave_projected_interest_untouched() {
        let mut fixture = Fixture::new(BatchConfig::default());

        let (_, stats, _) =
            fixture.run(Transaction::deposit("C-100", Decimal::new(100, 0), "cash"));

        assert_eq!(stats.projected_annual_interest_total, Decimal::ZERO);
    }

    #[test]
    fn test_overflowing_deposit_is_declined() {
        let mut fixture = Fixture::new(BatchConfig::default());
        fixture.accounts[0].balance = Decimal::MAX;

        let (outcome, stats, log) =
            fixture.run(Transaction::deposit("C-100", Decimal::ONE, "overflow"));

        assert_eq!(
            outcome,
            TransactionOutcome::Declined {
                reason: DeclineReason::ArithmeticOverflow
            }
        );
        assert_eq!(fixture.account("C-100").balance, Decimal::MAX);
        assert_eq!(stats.declined_count, 1);
        assert!(log.contains("  DECLINED (arithmetic overflow)\n"));
    }

    #[test]
    fn test_deposit_that_would_lose_precision_is_declined() {
        let mut fixture = Fixture::new(BatchConfig::default());
        let balance = Decimal::from_i128_with_scale(10_i128.pow(25), 0);
        fixture.accounts[0].balance = balance;

        let (outcome, stats, _) =
            fixture.run(Transaction::deposit("C-100", Decimal::new(1, 4), "tiny"));

        assert_eq!(
            outcome,
            TransactionOutcome::Declined {
                reason: DeclineReason::ArithmeticOverflow
            }
        );
        let delta = fixture.account("C-100").balance - balance;
        assert_eq!(delta, stats.absolute_applied_total);
        assert_eq!(stats.applied_count, 0);
    }

    #[test]
    fn test_rounded_deposit_at_max_is_declined() {
        let mut fixture = Fixture::new(BatchConfig::default());
        fixture.accounts[1].balance = Decimal::MAX;

        let (outcome, stats, _) =
            fixture.run(Transaction::deposit("S-200", Decimal::new(4, 1), "rounding"));

        assert!(!outcome.is_applied());
        assert_eq!(fixture.account("S-200").balance, Decimal::MAX);
        assert_eq!(stats.absolute_applied_total, Decimal::ZERO);
        assert_eq!(stats.projected_annual_interest_total, Decimal::ZERO);
    }
}
