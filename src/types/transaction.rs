//! Transaction-related types for the Bank Batch Engine
//!
//! This module defines pending transactions, their kinds, and the terminal
//! outcome each one reaches once the batch has been applied.

use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

use super::account::AccountId;

/// Transaction kinds understood by the batch engine
///
/// Anything other than a deposit or withdrawal is kept verbatim in `Other`,
/// so an unknown kind is an ordinary, exhaustively handled case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionKind {
    /// Credit funds to an account; always succeeds
    Deposit,

    /// Debit funds from an account, subject to the withdrawal floor
    Withdraw,

    /// Unrecognized kind, carried as written
    Other(String),
}

impl TransactionKind {
    /// Label printed in the apply-log header
    pub fn label(&self) -> &str {
        match self {
            TransactionKind::Deposit => "DEPOSIT",
            TransactionKind::Withdraw => "WITHDRAW",
            TransactionKind::Other(raw) => raw,
        }
    }
}

impl FromStr for TransactionKind {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let kind = match value.trim().to_lowercase().as_str() {
            "deposit" => TransactionKind::Deposit,
            "withdraw" => TransactionKind::Withdraw,
            _ => TransactionKind::Other(value.trim().to_string()),
        };
        Ok(kind)
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Pending transaction against a single account
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// Target account identifier
    pub account_id: AccountId,

    /// What the transaction does
    pub kind: TransactionKind,

    /// Signed amount; zero and negative values are not rejected here
    pub amount: Decimal,

    /// Free text, only ever printed
    pub memo: String,
}

impl Transaction {
    /// Create a transaction of any kind
    pub fn new(
        account_id: impl Into<AccountId>,
        kind: TransactionKind,
        amount: Decimal,
        memo: impl Into<String>,
    ) -> Self {
        Transaction {
            account_id: account_id.into(),
            kind,
            amount,
            memo: memo.into(),
        }
    }

    /// Create a deposit
    pub fn deposit(
        account_id: impl Into<AccountId>,
        amount: Decimal,
        memo: impl Into<String>,
    ) -> Self {
        Self::new(account_id, TransactionKind::Deposit, amount, memo)
    }

    /// Create a withdrawal
    pub fn withdraw(
        account_id: impl Into<AccountId>,
        amount: Decimal,
        memo: impl Into<String>,
    ) -> Self {
        Self::new(account_id, TransactionKind::Withdraw, amount, memo)
    }
}

/// Why a withdrawal was declined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclineReason {
    /// Checking withdrawal would pass the overdraft limit
    ExceedsOverdraft,

    /// Savings withdrawal would take the balance below zero
    InsufficientFunds,

    /// The new balance does not fit in a `Decimal`
    ArithmeticOverflow,
}

impl DeclineReason {
    /// Text printed after `DECLINED` in the apply log
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclineReason::ExceedsOverdraft => "exceeds overdraft",
            DeclineReason::InsufficientFunds => "insufficient funds",
            DeclineReason::ArithmeticOverflow => "arithmetic overflow",
        }
    }
}

impl fmt::Display for DeclineReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terminal state of one filtered transaction
///
/// Every transaction makes exactly one transition out of pending; there are
/// no retries and nothing is rolled back.
#[derive(Debug, Clone, PartialEq)]
pub enum TransactionOutcome {
    /// Balance was mutated
    Applied {
        /// Balance after the mutation
        new_balance: Decimal,
    },

    /// Rejected by the floor rule or by overflow; balance untouched
    Declined {
        /// Why the transaction was rejected
        reason: DeclineReason,
    },

    /// No account with the transaction's id exists in the batch
    SkippedUnknownAccount,

    /// The account exists but the kind is not a deposit or withdrawal
    SkippedUnknownKind,
}

impl TransactionOutcome {
    /// Whether the outcome mutated a balance
    pub fn is_applied(&self) -> bool {
        matches!(self, TransactionOutcome::Applied { .. })
    }
}
