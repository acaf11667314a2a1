//! Typed record identifier backed by a positive integer.
//!
//! Identifiers are assigned by the storage backend. Callers hand them back as
//! raw, possibly absent integers; [`RecordId::parse`] is the only way in.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Identity of a stored student or professor. Always `> 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct RecordId(i64);

impl RecordId {
    /// Validate a raw, possibly absent identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidId`] when `raw` is `None`, zero, or
    /// negative.
    pub fn parse(raw: Option<i64>) -> Result<Self, ValidationError> {
        match raw {
            Some(value) if value > 0 => Ok(Self(value)),
            _ => Err(ValidationError::InvalidId),
        }
    }

    /// Access the inner integer.
    #[must_use]
    pub fn get(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for RecordId {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::parse(Some(value))
    }
}

impl From<RecordId> for i64 {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for RecordId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s.parse().ok())
    }
}
