//! Core identifier types for roster.
//!
//! Employee IDs are plain unsigned integers assigned by the store. They travel
//! as JSON numbers and are encoded as fixed-width big-endian keys so that the
//! storage order matches numeric order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A numeric employee identifier.
///
/// IDs are assigned on creation and never change afterwards. The textual form
/// accepted from clients is a run of ASCII digits and nothing else.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(u64);

impl EmployeeId {
    /// The identifier handed out when the table is empty.
    pub const FIRST: Self = Self(1);

    /// Create an `EmployeeId` from its numeric value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Return the numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// The identifier following this one, or `None` on overflow.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    /// Encode as an 8-byte big-endian key.
    #[must_use]
    pub const fn to_be_bytes(self) -> [u8; 8] {
        self.0.to_be_bytes()
    }

    /// Decode from an 8-byte big-endian key.
    #[must_use]
    pub const fn from_be_bytes(bytes: [u8; 8]) -> Self {
        Self(u64::from_be_bytes(bytes))
    }
}

impl FromStr for EmployeeId {
    type Err = IdError;

    /// Parse an `EmployeeId` from its external text form.
    ///
    /// Signs, whitespace and separators are rejected even where `u64::from_str`
    /// would accept them.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(IdError::Empty);
        }
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(IdError::NotDigits(s.to_string()));
        }
        s.parse::<u64>()
            .map(Self)
            .map_err(|_| IdError::OutOfRange(s.to_string()))
    }
}

impl fmt::Debug for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EmployeeId({})", self.0)
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for EmployeeId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<EmployeeId> for u64 {
    fn from(id: EmployeeId) -> Self {
        id.0
    }
}

/// Errors that can occur when parsing identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    /// No identifier was supplied.
    #[error("employee id must not be empty")]
    Empty,

    /// The input contains something other than ASCII digits.
    #[error("employee id must contain only digits, got {0:?}")]
    NotDigits(String),

    /// The input is all digits but does not fit in 64 bits.
    #[error("employee id {0} is out of range")]
    OutOfRange(String),
}
