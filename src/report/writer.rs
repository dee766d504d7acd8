//! Text report assembly
//!
//! The report is built front to back while the batch runs. Section order is
//! fixed: title, filter debug lines, apply log, post-checks, summary A,
//! totals, summary B.

use rust_decimal::Decimal;

use super::format::AmountFormatter;
use crate::types::{Account, AccountKind, BatchConfig, BatchStats, DeclineReason, Transaction};

pub const TITLE: &str = "=== BANK BATCH REPORT ===";
pub const APPLY_HEADER: &str = "-- APPLY --";
pub const POST_CHECKS_HEADER: &str = "-- POST-CHECKS --";
pub const SUMMARY_A_HEADER: &str = "-- SUMMARY A --";
pub const TOTALS_HEADER: &str = "-- TOTALS --";
pub const SUMMARY_B_HEADER: &str = "-- SUMMARY B --";

/// Line-oriented builder for the batch report
#[derive(Debug)]
pub struct ReportWriter {
    buf: String,
    formatter: AmountFormatter,
    currency: String,
}

impl ReportWriter {
    /// Start a report with its title line
    pub fn new(config: &BatchConfig) -> Self {
        let mut writer = ReportWriter {
            buf: String::new(),
            formatter: AmountFormatter::from_config(config),
            currency: config.currency.clone(),
        };
        writer.line(TITLE);
        writer
    }

    fn line(&mut self, text: &str) {
        self.buf.push_str(text);
        self.buf.push('\n');
    }

    fn blank(&mut self) {
        self.buf.push('\n');
    }

    fn section(&mut self, header: &str) {
        self.blank();
        self.line(header);
    }

    fn fmt(&self, value: Decimal) -> String {
        self.formatter.format(value)
    }

    /// Write a `[dbg]` line
    pub fn debug(&mut self, message: &str) {
        self.line(&format!("[dbg] {}", message));
    }

    /// Open the apply-log section
    pub fn begin_apply(&mut self) {
        self.section(APPLY_HEADER);
    }

    /// Header line for a transaction against a known account
    pub fn transaction_header(&mut self, transaction: &Transaction, account: &Account) {
        let line = format!(
            "{} acct={} owner={} amt={} {} memo={}",
            transaction.kind,
            account.id,
            account.owner,
            self.fmt(transaction.amount),
            self.currency,
            transaction.memo
        );
        self.line(&line);
    }

    /// Balance after an applied transaction
    pub fn new_balance(&mut self, balance: Decimal) {
        let line = format!("  newBal={}", self.fmt(balance));
        self.line(&line);
    }

    /// Declined withdrawal
    pub fn declined(&mut self, reason: DeclineReason) {
        self.line(&format!("  DECLINED ({})", reason));
    }

    /// Transaction kind that is neither deposit nor withdraw
    pub fn unknown_kind(&mut self) {
        self.line("  SKIP unknown kind");
    }

    /// Large-transaction flag notice
    pub fn large_transaction_flag(&mut self) {
        self.line("  ** FLAG large txn **");
    }

    /// VIP balance notice
    pub fn vip_note(&mut self) {
        self.line("  VIP NOTE");
    }

    /// Close one transaction block
    pub fn end_transaction(&mut self) {
        self.blank();
    }

    /// Open the post-check section
    ///
    /// Follows the last transaction block directly; that block already ends
    /// with a blank line.
    pub fn begin_post_checks(&mut self) {
        self.line(POST_CHECKS_HEADER);
    }

    /// Account found below its withdrawal floor by the post-check sweep
    pub fn post_check_violation(&mut self, account: &Account) {
        let problem = match account.kind {
            AccountKind::Checking { .. } => "beyond overdraft",
            AccountKind::Savings { .. } => "negative savings",
        };
        self.line(&format!("Flag {} {}", account.id, problem));
    }

    /// Summary A: accounts in original order, `[FLAG]` suffix
    pub fn summary_a(&mut self, accounts: &[Account]) {
        self.section(SUMMARY_A_HEADER);
        for account in accounts {
            let line = format!(
                "{} {} {} bal={}{}",
                account.id,
                account.type_label(),
                account.owner,
                self.fmt(account.balance),
                if account.flagged { " [FLAG]" } else { "" }
            );
            self.line(&line);
        }
    }

    /// Totals: applied and skipped counts, absolute applied total
    pub fn totals(&mut self, stats: &BatchStats) {
        self.section(TOTALS_HEADER);
        let line = format!(
            "applied={} skipped={} absTotal={} {}",
            stats.applied_count,
            stats.skipped_count,
            self.fmt(stats.absolute_applied_total),
            self.currency
        );
        self.line(&line);
    }

    /// Summary B: accounts in reverse order, `*` suffix
    pub fn summary_b(&mut self, accounts: &[Account]) {
        self.section(SUMMARY_B_HEADER);
        for account in accounts.iter().rev() {
            let line = format!(
                "[{}] {} id={} bal={}{}",
                account.type_label(),
                account.owner,
                account.id,
                self.fmt(account.balance),
                if account.flagged { " *" } else { "" }
            );
            self.line(&line);
        }
    }

    /// Finish the report and return its text
    pub fn finish(self) -> String {
        self.buf
    }
}
