//! Claim identifiers
//!
//! Claims are numbered by the store starting at 1. The newtype keeps raw
//! integers from being mistaken for identifiers and owns the lenient parsing
//! rule applied to identifiers taken from request paths.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned claim identifier, always positive
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimId(u64);

impl ClaimId {
    /// Creates an identifier, rejecting zero
    pub fn new(value: u64) -> Option<Self> {
        (value > 0).then_some(Self(value))
    }

    /// The identifier issued to the first claim of an empty store
    pub fn first() -> Self {
        Self(1)
    }

    /// The identifier following this one, or `None` at `u64::MAX`
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }

    /// Returns the raw value
    pub fn value(self) -> u64 {
        self.0
    }

    /// Parses an identifier from a path segment using integer-prefix rules.
    ///
    /// Leading whitespace and an optional sign are skipped, then the longest
    /// run of ASCII digits is read and anything after it is ignored, so
    /// `"1.5"` reads as 1 and `"12abc"` as 12. Returns `None` when there are
    /// no digits, the value is zero or negative, or it overflows.
    pub fn parse_lenient(segment: &str) -> Option<Self> {
        let trimmed = segment.trim_start();
        let (negative, rest) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        let digits_end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        let digits = &rest[..digits_end];
        if digits.is_empty() {
            return None;
        }

        let value: u64 = digits.parse().ok()?;
        if negative {
            return None;
        }
        Self::new(value)
    }
}

impl fmt::Display for ClaimId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
