//! Money type for representing expense amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. Provides parsing from user-entered decimal text and fixed
//! two-decimal formatting.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A monetary amount stored as cents (hundredths of the currency unit)
///
/// The type itself is signed so that parsing can distinguish a negative
/// amount (syntactically valid, semantically rejected at validation time)
/// from unparsable text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Parse a money amount from decimal text
    ///
    /// Accepts formats: "10.50", "-10.50", "10", ".5". A third fraction
    /// digit rounds half-up, so "3.555" parses to 356 cents.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        let cents = match digits.split_once('.') {
            Some((whole, frac)) => {
                if whole.is_empty() && frac.is_empty() {
                    return Err(MoneyParseError::InvalidFormat(s.to_string()));
                }

                let units: i64 = if whole.is_empty() {
                    0
                } else {
                    whole
                        .parse()
                        .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                };

                let mut cents: i64 = match frac.len() {
                    0 => 0,
                    1 => {
                        frac.parse::<i64>()
                            .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                            * 10
                    }
                    _ => frac[..2]
                        .parse()
                        .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?,
                };

                if frac.len() > 2 {
                    let rest = &frac[2..];
                    if !rest.bytes().all(|b| b.is_ascii_digit()) {
                        return Err(MoneyParseError::InvalidFormat(s.to_string()));
                    }
                    if rest.as_bytes()[0] >= b'5' {
                        cents += 1;
                    }
                }

                units
                    .checked_mul(100)
                    .and_then(|v| v.checked_add(cents))
                    .ok_or_else(|| MoneyParseError::InvalidFormat(s.to_string()))?
            }
            None => {
                digits
                    .parse::<i64>()
                    .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                    .checked_mul(100)
                    .ok_or_else(|| MoneyParseError::InvalidFormat(s.to_string()))?
            }
        };

        Ok(Self(if negative { -cents } else { cents }))
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}.{:02}", self.dollars().abs(), self.cents_part())
        } else {
            write!(f, "{}.{:02}", self.dollars(), self.cents_part())
        }
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
