//! Drafts and records — the path from raw input to a validated record.

use crate::error::ValidationError;
use crate::id::RecordId;
use crate::schema::{self, FieldSpec};

/// A stored (or about to be stored) record with an optional identity.
pub trait Identified {
    /// The identity, `None` until the repository assigns one.
    fn id(&self) -> Option<RecordId>;

    /// Return the record with its identity replaced.
    #[must_use]
    fn with_id(self, id: RecordId) -> Self;
}

/// Raw, unvalidated field values for one record kind.
///
/// Implementors describe their fields once in [`FIELDS`](Self::FIELDS) and
/// expose their raw values in the same order; [`validate`](Self::validate)
/// then applies the shared rules from [`schema::check`].
pub trait RecordDraft: Sized {
    /// The record produced once validation succeeds.
    type Record: Identified;

    /// Record kind, for logs.
    const KIND: &'static str;

    /// Field rules, in declaration order.
    const FIELDS: &'static [FieldSpec];

    /// Raw values, one per entry in [`FIELDS`](Self::FIELDS).
    fn raw_values(&self) -> Vec<Option<&str>>;

    /// Trim the values into a record. Only called after the schema check.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Required`] if a required value is absent.
    fn build(self, id: Option<RecordId>) -> Result<Self::Record, ValidationError>;

    /// Check every field rule, then build the trimmed record.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] of the first violated rule.
    fn validate(self, id: Option<RecordId>) -> Result<Self::Record, ValidationError> {
        schema::check(Self::FIELDS, &self.raw_values())?;
        self.build(id)
    }
}

/// Trim a required value.
///
/// # Errors
///
/// Returns [`ValidationError::Required`] for `spec` when `value` is absent.
pub fn required(value: Option<String>, spec: &FieldSpec) -> Result<String, ValidationError> {
    value
        .map(|v| v.trim().to_owned())
        .ok_or(ValidationError::Required { field: spec.label })
}

/// Trim an optional value, keeping absence as `None`.
#[must_use]
pub fn optional(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned())
}
