//! Storage port — repository traits for persistence.
//!
//! One generic trait covers every record kind. Identity is the repository's
//! job: records arrive from `add` without an id and leave with one.
//! "Not found" is a normal outcome here, never an error.

use std::future::Future;

use campus_domain::error::CampusError;
use campus_domain::id::RecordId;
use campus_domain::professor::Professor;
use campus_domain::student::Student;

/// CRUD storage for records of type `T`.
///
/// All methods return `Send` futures so implementations can be shared across
/// tasks of a multi-threaded runtime. Each call is expected to be atomic on
/// its own; nothing spans several calls.
pub trait RecordRepository<T> {
    /// Persist a new record and return it with its assigned id.
    fn add(&self, record: T) -> impl Future<Output = Result<T, CampusError>> + Send;

    /// Fetch a record by id.
    fn get_by_id(
        &self,
        id: RecordId,
    ) -> impl Future<Output = Result<Option<T>, CampusError>> + Send;

    /// Fetch every record, in storage order.
    fn list(&self) -> impl Future<Output = Result<Vec<T>, CampusError>> + Send;

    /// Replace the record stored under `id`. Returns `None` when there is none.
    fn update(
        &self,
        id: RecordId,
        record: T,
    ) -> impl Future<Output = Result<Option<T>, CampusError>> + Send;

    /// Remove the record stored under `id`. Returns whether one existed.
    fn delete(&self, id: RecordId) -> impl Future<Output = Result<bool, CampusError>> + Send;
}

/// Storage for [`Student`] records.
pub trait StudentRepository: RecordRepository<Student> {}

impl<T: RecordRepository<Student>> StudentRepository for T {}

/// Storage for [`Professor`] records.
pub trait ProfessorRepository: RecordRepository<Professor> {}

impl<T: RecordRepository<Professor>> ProfessorRepository for T {}
