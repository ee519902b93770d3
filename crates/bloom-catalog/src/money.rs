//! Money type for representing monetary values.
//!
//! Uses cents-based integer representation to avoid floating-point
//! precision issues. The shop trades in a single currency, so no
//! currency discriminant is carried.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A monetary value in cents.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct Money {
    /// Amount in cents.
    pub amount_cents: i64,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64) -> Self {
        Self { amount_cents }
    }

    /// Create a Money value from a decimal amount.
    ///
    /// ```
    /// use bloom_catalog::money::Money;
    /// let price = Money::from_decimal(49.99);
    /// assert_eq!(price.amount_cents, 4999);
    /// ```
    pub fn from_decimal(amount: f64) -> Self {
        Self::new((amount * 100.0).round() as i64)
    }

    /// Parse a decimal string (e.g. a filter bound typed by a user).
    ///
    /// Returns `None` for anything that does not parse as a finite
    /// number; callers treat that as "no bound" rather than an error.
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }
        let amount: f64 = trimmed.parse().ok()?;
        if !amount.is_finite() {
            return None;
        }
        Some(Self::from_decimal(amount))
    }

    /// Create a zero amount.
    pub fn zero() -> Self {
        Self::new(0)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Multiply by a quantity, checking for overflow.
    pub fn try_multiply(&self, quantity: i64) -> Option<Self> {
        self.amount_cents.checked_mul(quantity).map(Self::new)
    }

    /// Add another amount, checking for overflow.
    pub fn try_add(&self, other: &Self) -> Option<Self> {
        self.amount_cents
            .checked_add(other.amount_cents)
            .map(Self::new)
    }

    /// The amount as a decimal (for comparisons against parsed bounds).
    pub fn as_decimal(&self) -> f64 {
        self.amount_cents as f64 / 100.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.amount_cents < 0 { "-" } else { "" };
        let abs = self.amount_cents.abs();
        write!(f, "{}${}.{:02}", sign, abs / 100, abs % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_decimal() {
        assert_eq!(Money::from_decimal(20.0).amount_cents, 2000);
        assert_eq!(Money::from_decimal(19.99).amount_cents, 1999);
    }

    #[test]
    fn test_parse_valid() {
        assert_eq!(Money::parse("15"), Some(Money::new(1500)));
        assert_eq!(Money::parse(" 9.50 "), Some(Money::new(950)));
    }

    #[test]
    fn test_parse_garbage() {
        assert_eq!(Money::parse(""), None);
        assert_eq!(Money::parse("abc"), None);
        assert_eq!(Money::parse("NaN"), None);
        assert_eq!(Money::parse("inf"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::new(2050).to_string(), "$20.50");
        assert_eq!(Money::new(5).to_string(), "$0.05");
        assert_eq!(Money::new(-150).to_string(), "-$1.50");
    }

    #[test]
    fn test_try_multiply() {
        assert_eq!(Money::new(1000).try_multiply(3), Some(Money::new(3000)));
        assert_eq!(Money::new(i64::MAX).try_multiply(2), None);
    }
}
