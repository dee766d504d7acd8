//! Batch configuration
//!
//! All knobs that shape one batch run: zero-amount filtering, flagging and
//! VIP thresholds, in-report debug lines, and number formatting.

use rust_decimal::Decimal;

use super::error::BatchError;

/// Largest number of fractional digits a `Decimal` can carry
pub const MAX_DECIMAL_DIGITS: u32 = 28;

/// Configuration for a single batch run
#[derive(Debug, Clone, PartialEq)]
pub struct BatchConfig {
    /// Keep transactions whose amount is exactly zero
    pub include_zero_amount_txns: bool,

    /// `|amount|` at or above this flags the account
    pub flag_large_txn_threshold: Decimal,

    /// Balance at or above this adds a VIP note to the apply log
    pub vip_balance_threshold: Decimal,

    /// Emit `[dbg]` lines into the report
    pub debug: bool,

    /// Currency label printed next to amounts
    pub currency: String,

    /// Fractional digits used when rounding is enabled
    pub decimal_digits: u32,

    /// Round half-up to `decimal_digits`; otherwise print raw values
    pub rounding_enabled: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        BatchConfig {
            include_zero_amount_txns: false,
            flag_large_txn_threshold: Decimal::new(1000, 0),
            vip_balance_threshold: Decimal::new(5000, 0),
            debug: false,
            currency: "USD".to_string(),
            decimal_digits: 2,
            rounding_enabled: true,
        }
    }
}

impl BatchConfig {
    /// Keep or drop zero-amount transactions
    pub fn with_include_zero_amount_txns(mut self, include: bool) -> Self {
        self.include_zero_amount_txns = include;
        self
    }

    /// Set the large-transaction flag threshold
    pub fn with_flag_large_txn_threshold(mut self, threshold: Decimal) -> Self {
        self.flag_large_txn_threshold = threshold;
        self
    }

    /// Set the VIP balance threshold
    pub fn with_vip_balance_threshold(mut self, threshold: Decimal) -> Self {
        self.vip_balance_threshold = threshold;
        self
    }

    /// Toggle `[dbg]` report lines
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Set the currency label
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Set the number of fractional digits
    pub fn with_decimal_digits(mut self, digits: u32) -> Self {
        self.decimal_digits = digits;
        self
    }

    /// Toggle rounding
    pub fn with_rounding(mut self, enabled: bool) -> Self {
        self.rounding_enabled = enabled;
        self
    }

    /// Check the configuration before running a batch
    ///
    /// # Errors
    ///
    /// Returns `BatchError::InvalidConfig` if:
    /// - `decimal_digits` exceeds [`MAX_DECIMAL_DIGITS`]
    /// - either threshold is negative
    /// - the currency label is blank
    pub fn validate(&self) -> Result<(), BatchError> {
        if self.decimal_digits > MAX_DECIMAL_DIGITS {
            return Err(BatchError::invalid_config(format!(
                "decimal digits must be at most {}, got {}",
                MAX_DECIMAL_DIGITS, self.decimal_digits
            )));
        }

        if self.flag_large_txn_threshold.is_sign_negative() {
            return Err(BatchError::invalid_config(format!(
                "large transaction threshold must be non-negative, got {}",
                self.flag_large_txn_threshold
            )));
        }

        if self.vip_balance_threshold.is_sign_negative() {
            return Err(BatchError::invalid_config(format!(
                "VIP balance threshold must be non-negative, got {}",
                self.vip_balance_threshold
            )));
        }

        if self.currency.trim().is_empty() {
            return Err(BatchError::invalid_config("currency label must not be empty"));
        }

        Ok(())
    }
}
