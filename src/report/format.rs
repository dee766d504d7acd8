//! Number formatting for the batch report
//!
//! Every amount and balance in the report goes through [`AmountFormatter`],
//! so a single rounding rule applies everywhere.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::types::{BatchConfig, MAX_DECIMAL_DIGITS};

/// Formats decimals according to the batch configuration
///
/// - Rounding disabled: the value's natural representation. Trailing zeros
///   are dropped and whole numbers keep one fractional digit (`250.0`).
/// - Rounding enabled: round half-up (ties go toward positive infinity) to
///   `digits` and print exactly that many fractional digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmountFormatter {
    digits: u32,
    rounding: bool,
}

impl AmountFormatter {
    /// Create a formatter
    ///
    /// `digits` is clamped to [`MAX_DECIMAL_DIGITS`].
    pub fn new(digits: u32, rounding: bool) -> Self {
        AmountFormatter {
            digits: digits.min(MAX_DECIMAL_DIGITS),
            rounding,
        }
    }

    /// Create a formatter from the batch configuration
    pub fn from_config(config: &BatchConfig) -> Self {
        Self::new(config.decimal_digits, config.rounding_enabled)
    }

    /// Render a value
    pub fn format(&self, value: Decimal) -> String {
        if !self.rounding {
            return natural(value);
        }

        let rounded = round_half_up(value, self.digits);
        format!("{:.*}", self.digits as usize, rounded)
    }
}

fn round_half_up(value: Decimal, digits: u32) -> Decimal {
    // Ties on negative values move toward zero, which is toward +inf.
    let strategy = if value.is_sign_negative() {
        RoundingStrategy::MidpointTowardZero
    } else {
        RoundingStrategy::MidpointAwayFromZero
    };
    let rounded = value.round_dp_with_strategy(digits, strategy);
    if rounded.is_zero() {
        Decimal::ZERO
    } else {
        rounded
    }
}

fn natural(value: Decimal) -> String {
    let normalized = value.normalize();
    if normalized.scale() == 0 {
        format!("{}.0", normalized)
    } else {
        normalized.to_string()
    }
}
