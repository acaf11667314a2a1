//! Storage-specific error type wrapping sqlx errors.

use campus_domain::error::{CampusError, ValidationError};

/// Errors originating from the `SQLite` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query or connection failed.
    #[error("database error")]
    Database(#[from] sqlx::Error),

    /// Failed to run migrations.
    #[error("migration error")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// The database handed back a row id that is not a valid record id.
    #[error("invalid row id {0}")]
    InvalidRowId(i64, #[source] ValidationError),
}

impl From<StorageError> for CampusError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
