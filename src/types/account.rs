//! Account-related types for the Bank Batch Engine
//!
//! This module defines the Account structure and the closed set of account
//! variants. Each variant decides how far its balance may fall through a
//! withdrawal (its withdrawal floor).

use rust_decimal::Decimal;

use super::transaction::DeclineReason;

/// Account identifier
///
/// Free-form string key, unique within a batch.
pub type AccountId = String;

/// Account variant and its type-specific terms
#[derive(Debug, Clone, PartialEq)]
pub enum AccountKind {
    /// Checking account that may overdraw down to `-overdraft_limit`
    Checking {
        /// Non-negative overdraft allowance
        overdraft_limit: Decimal,
    },

    /// Savings account that must not go below zero
    Savings {
        /// Non-negative annual interest rate (0.02 = 2%)
        ///
        /// Only feeds the projected interest statistic; it never influences
        /// a decision or a printed value.
        interest_rate: Decimal,
    },
}

impl AccountKind {
    /// Lowest balance a withdrawal may leave behind
    pub fn withdrawal_floor(&self) -> Decimal {
        match self {
            AccountKind::Checking { overdraft_limit } => -*overdraft_limit,
            AccountKind::Savings { .. } => Decimal::ZERO,
        }
    }

    /// Upper-case label used in report summaries
    pub fn label(&self) -> &'static str {
        match self {
            AccountKind::Checking { .. } => "CHECKING",
            AccountKind::Savings { .. } => "SAVINGS",
        }
    }

    /// Why a withdrawal that would cross the floor is declined
    pub fn floor_decline_reason(&self) -> DeclineReason {
        match self {
            AccountKind::Checking { .. } => DeclineReason::ExceedsOverdraft,
            AccountKind::Savings { .. } => DeclineReason::InsufficientFunds,
        }
    }

    /// Interest rate for variants that carry one
    pub fn interest_rate(&self) -> Option<Decimal> {
        match self {
            AccountKind::Checking { .. } => None,
            AccountKind::Savings { interest_rate } => Some(*interest_rate),
        }
    }
}

/// Bank account state
///
/// Owned by the caller; the batch processor only borrows it mutably for the
/// duration of one batch.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// Unique identifier within a batch
    pub id: AccountId,

    /// Display name of the account holder
    pub owner: String,

    /// Current signed balance
    pub balance: Decimal,

    /// Sticky attention marker
    ///
    /// Starts false; set by the large-transaction rule or the post-check
    /// sweep and never cleared by the engine.
    pub flagged: bool,

    /// Variant-specific terms
    pub kind: AccountKind,
}

impl Account {
    /// Create a checking account
    ///
    /// # Arguments
    ///
    /// * `id` - Account identifier
    /// * `owner` - Account holder display name
    /// * `balance` - Opening balance
    /// * `overdraft_limit` - How far below zero the balance may go
    pub fn checking(
        id: impl Into<AccountId>,
        owner: impl Into<String>,
        balance: Decimal,
        overdraft_limit: Decimal,
    ) -> Self {
        Account {
            id: id.into(),
            owner: owner.into(),
            balance,
            flagged: false,
            kind: AccountKind::Checking { overdraft_limit },
        }
    }

    /// Create a savings account
    ///
    /// # Arguments
    ///
    /// * `id` - Account identifier
    /// * `owner` - Account holder display name
    /// * `balance` - Opening balance
    /// * `interest_rate` - Annual rate used for projected interest
    pub fn savings(
        id: impl Into<AccountId>,
        owner: impl Into<String>,
        balance: Decimal,
        interest_rate: Decimal,
    ) -> Self {
        Account {
            id: id.into(),
            owner: owner.into(),
            balance,
            flagged: false,
            kind: AccountKind::Savings { interest_rate },
        }
    }

    /// Lowest balance this account may reach through a withdrawal
    pub fn withdrawal_floor(&self) -> Decimal {
        self.kind.withdrawal_floor()
    }

    /// Balance after crediting `amount`
    ///
    /// # Errors
    ///
    /// `ArithmeticOverflow` if the exact sum does not fit in a `Decimal`
    pub fn balance_after_deposit(&self, amount: Decimal) -> Result<Decimal, DeclineReason> {
        exact_add(self.balance, amount)
            .ok_or(DeclineReason::ArithmeticOverflow)
    }

    /// Balance after debiting `amount`, checked against the withdrawal floor
    ///
    /// # Errors
    ///
    /// - `ArithmeticOverflow` if the exact difference does not fit
    /// - The variant's floor reason if the balance would end below the floor
    pub fn balance_after_withdrawal(&self, amount: Decimal) -> Result<Decimal, DeclineReason> {
        let remaining = exact_add(self.balance, -amount)
            .ok_or(DeclineReason::ArithmeticOverflow)?;
        if remaining < self.withdrawal_floor() {
            return Err(self.kind.floor_decline_reason());
        }
        Ok(remaining)
    }

    /// Whether the current balance satisfies the floor
    pub fn is_within_floor(&self) -> bool {
        self.balance >= self.withdrawal_floor()
    }

    /// Report label for the account variant
    pub fn type_label(&self) -> &'static str {
        self.kind.label()
    }
}

/// `balance + delta`, or `None` if the sum overflows or loses precision
///
/// `Decimal` rounds results that need more than 28 significant digits, so a
/// sum that does not reproduce `delta` was not exact.
fn exact_add(balance: Decimal, delta: Decimal) -> Option<Decimal> {
    let sum = balance.checked_add(delta)?;
    (sum.checked_sub(balance)? == delta).then_some(sum)
}
