//! `SQLite` implementation of [`RecordRepository`] for students.

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use campus_app::ports::RecordRepository;
use campus_domain::error::CampusError;
use campus_domain::id::RecordId;
use campus_domain::record::Identified;
use campus_domain::student::Student;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Student`].
struct Wrapper(Student);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let id = RecordId::try_from(id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Student {
            id: Some(id),
            name: row.try_get("name")?,
            course: row.try_get("course")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO students (name, course) VALUES (?, ?)";
const SELECT_BY_ID: &str = "SELECT id, name, course FROM students WHERE id = ?";
const SELECT_ALL: &str = "SELECT id, name, course FROM students ORDER BY id";
const UPDATE: &str = "UPDATE students SET name = ?, course = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM students WHERE id = ?";

/// `SQLite`-backed student repository.
pub struct SqliteStudentRepository {
    pool: SqlitePool,
}

impl SqliteStudentRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl RecordRepository<Student> for SqliteStudentRepository {
    fn add(&self, student: Student) -> impl Future<Output = Result<Student, CampusError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rowid = sqlx::query(INSERT)
                .bind(&student.name)
                .bind(&student.course)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?
                .last_insert_rowid();

            let id = RecordId::try_from(rowid)
                .map_err(|err| StorageError::InvalidRowId(rowid, err))?;
            Ok(student.with_id(id))
        }
    }

    fn get_by_id(
        &self,
        id: RecordId,
    ) -> impl Future<Output = Result<Option<Student>, CampusError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.get())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.map(|w| w.0))
        }
    }

    fn list(&self) -> impl Future<Output = Result<Vec<Student>, CampusError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(
        &self,
        id: RecordId,
        student: Student,
    ) -> impl Future<Output = Result<Option<Student>, CampusError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(UPDATE)
                .bind(&student.name)
                .bind(&student.course)
                .bind(id.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok((result.rows_affected() > 0).then(|| student.with_id(id)))
        }
    }

    fn delete(&self, id: RecordId) -> impl Future<Output = Result<bool, CampusError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(DELETE_BY_ID)
                .bind(id.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected() > 0)
        }
    }
}
