//! # campus-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `campus-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Assign record ids (`INTEGER PRIMARY KEY AUTOINCREMENT`)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `campus-app` (for port traits) and `campus-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod error;
mod pool;
mod professor_repo;
mod student_repo;

pub use error::StorageError;
pub use pool::{Config, Database};
pub use professor_repo::SqliteProfessorRepository;
pub use student_repo::SqliteStudentRepository;
