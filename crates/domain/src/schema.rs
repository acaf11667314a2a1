//! Field schemas — per-record validation rules expressed as data.
//!
//! A record kind lists its fields once, in declaration order, as a slice of
//! [`FieldSpec`]. [`check`] walks that slice and reports the first rule
//! violated, in this order:
//!
//! 1. required fields that are absent or blank, in declaration order
//! 2. format constraints, for present and non-blank values
//! 3. length bounds of optional fields
//! 4. length bounds of required fields, in declaration order
//!
//! Identifier checks happen before any of these, in [`RecordId::parse`].
//!
//! Format and length rules look at the value exactly as received; trimming
//! happens afterwards, when the record is built.
//!
//! [`RecordId::parse`]: crate::id::RecordId::parse

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ValidationError;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+$").expect("email pattern is a valid regex")
});

/// A format constraint a field value must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// `local@domain`, letters, digits and `+_.-` on the left, letters,
    /// digits and `.-` on the right.
    Email,
}

impl Format {
    /// Whether `value` satisfies this format.
    #[must_use]
    pub fn matches(self, value: &str) -> bool {
        match self {
            Self::Email => EMAIL_PATTERN.is_match(value),
        }
    }
}

/// Validation rules for one string field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Human-readable label used in error messages (e.g. `Nome`).
    pub label: &'static str,
    /// Whether the field must be present and non-blank.
    pub required: bool,
    /// Maximum length in characters.
    pub max_len: usize,
    /// Optional format constraint.
    pub format: Option<Format>,
}

impl FieldSpec {
    /// A field that must be present and non-blank.
    #[must_use]
    pub const fn required(label: &'static str, max_len: usize) -> Self {
        Self {
            label,
            required: true,
            max_len,
            format: None,
        }
    }

    /// A field that may be absent.
    #[must_use]
    pub const fn optional(label: &'static str, max_len: usize) -> Self {
        Self {
            label,
            required: false,
            max_len,
            format: None,
        }
    }

    /// Attach a format constraint.
    #[must_use]
    pub const fn with_format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }

    fn exceeds(&self, value: &str) -> bool {
        value.chars().count() > self.max_len
    }

    fn too_long(&self) -> ValidationError {
        ValidationError::TooLong {
            field: self.label,
            max: self.max_len,
        }
    }
}

/// Whether a value is empty or only whitespace.
#[must_use]
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Check raw `values` against `fields`, pairwise and in order.
///
/// # Errors
///
/// Returns the [`ValidationError`] of the first violated rule.
pub fn check(fields: &[FieldSpec], values: &[Option<&str>]) -> Result<(), ValidationError> {
    debug_assert_eq!(fields.len(), values.len(), "one value per field");
    let pairs = || fields.iter().zip(values.iter().copied());

    for (spec, value) in pairs() {
        if spec.required && value.is_none_or(is_blank) {
            return Err(ValidationError::Required { field: spec.label });
        }
    }

    for (spec, value) in pairs() {
        let (Some(format), Some(value)) = (spec.format, value) else {
            continue;
        };
        if !is_blank(value) && !format.matches(value) {
            return Err(ValidationError::InvalidFormat { field: spec.label });
        }
    }

    for (spec, value) in pairs().filter(|(spec, _)| !spec.required) {
        if value.is_some_and(|v| spec.exceeds(v)) {
            return Err(spec.too_long());
        }
    }

    for (spec, value) in pairs().filter(|(spec, _)| spec.required) {
        if value.is_some_and(|v| spec.exceeds(v)) {
            return Err(spec.too_long());
        }
    }

    Ok(())
}
