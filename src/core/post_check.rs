//! Post-batch floor sweep
//!
//! Runs once after every transaction has been applied and checks all
//! accounts, touched or not. Accounts that entered the batch already below
//! their floor are flagged as well.

use tracing::warn;

use crate::report::ReportWriter;
use crate::types::{Account, BatchStats};

/// Flag every account whose balance sits below its withdrawal floor
///
/// Writes the post-check section header and one line per violating account
/// in original account order.
///
/// # Returns
///
/// The number of accounts flagged by this sweep
pub fn run_post_checks(
    accounts: &mut [Account],
    stats: &mut BatchStats,
    report: &mut ReportWriter,
) -> usize {
    report.begin_post_checks();

    let mut violations = 0;
    for account in accounts.iter_mut() {
        if account.is_within_floor() {
            continue;
        }

        account.flagged = true;
        stats.record_post_check_violation();
        report.post_check_violation(account);
        warn!(
            account = %account.id,
            balance = %account.balance,
            floor = %account.withdrawal_floor(),
            "Account below withdrawal floor after batch"
        );
        violations += 1;
    }

    violations
}
