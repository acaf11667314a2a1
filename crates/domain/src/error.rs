//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`CampusError`]
//! via `#[from]`.

/// A field value or identifier rejected before reaching storage.
///
/// The display strings are part of the public contract: HTTP clients receive
/// them verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The identifier was missing, zero, or negative.
    #[error("Id inválido")]
    InvalidId,

    /// A required field was missing or blank.
    #[error("{field} é obrigatório")]
    Required { field: &'static str },

    /// A field did not match its format constraint.
    #[error("{field} inválido")]
    InvalidFormat { field: &'static str },

    /// A field exceeded its maximum length.
    #[error("{field} excede {max} caracteres")]
    TooLong { field: &'static str, max: usize },
}

/// Top-level error returned by application services.
#[derive(Debug, thiserror::Error)]
pub enum CampusError {
    /// Input was rejected before any repository call.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The storage backend failed; the source is kept as-is.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_render_invalid_id_message() {
        assert_eq!(ValidationError::InvalidId.to_string(), "Id inválido");
    }

    #[test]
    fn should_render_required_message_with_field_label() {
        let err = ValidationError::Required { field: "Curso" };
        assert_eq!(err.to_string(), "Curso é obrigatório");
    }

    #[test]
    fn should_render_format_message_with_field_label() {
        let err = ValidationError::InvalidFormat { field: "Email" };
        assert_eq!(err.to_string(), "Email inválido");
    }

    #[test]
    fn should_render_length_message_with_bound() {
        let err = ValidationError::TooLong {
            field: "Titulação",
            max: 80,
        };
        assert_eq!(err.to_string(), "Titulação excede 80 caracteres");
    }

    #[test]
    fn should_keep_validation_message_when_wrapped() {
        let err: CampusError = ValidationError::InvalidId.into();
        assert!(matches!(
            err,
            CampusError::Validation(ValidationError::InvalidId)
        ));
        assert_eq!(err.to_string(), "Id inválido");
    }
}
