//! `SQLite` implementation of [`RecordRepository`] for professors.

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use campus_app::ports::RecordRepository;
use campus_domain::error::CampusError;
use campus_domain::id::RecordId;
use campus_domain::professor::Professor;
use campus_domain::record::Identified;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Professor`].
struct Wrapper(Professor);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let id = RecordId::try_from(id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Professor {
            id: Some(id),
            name: row.try_get("name")?,
            department: row.try_get("department")?,
            email: row.try_get("email")?,
            title: row.try_get("title")?,
        }))
    }
}

const INSERT: &str =
    "INSERT INTO professors (name, department, email, title) VALUES (?, ?, ?, ?)";
const SELECT_BY_ID: &str =
    "SELECT id, name, department, email, title FROM professors WHERE id = ?";
const SELECT_ALL: &str = "SELECT id, name, department, email, title FROM professors ORDER BY id";
const UPDATE: &str =
    "UPDATE professors SET name = ?, department = ?, email = ?, title = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM professors WHERE id = ?";

/// `SQLite`-backed professor repository.
///
/// An absent title is stored as `NULL` and read back as `None`.
pub struct SqliteProfessorRepository {
    pool: SqlitePool,
}

impl SqliteProfessorRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl RecordRepository<Professor> for SqliteProfessorRepository {
    fn add(
        &self,
        professor: Professor,
    ) -> impl Future<Output = Result<Professor, CampusError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rowid = sqlx::query(INSERT)
                .bind(&professor.name)
                .bind(&professor.department)
                .bind(&professor.email)
                .bind(professor.title.as_deref())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?
                .last_insert_rowid();

            let id = RecordId::try_from(rowid)
                .map_err(|err| StorageError::InvalidRowId(rowid, err))?;
            Ok(professor.with_id(id))
        }
    }

    fn get_by_id(
        &self,
        id: RecordId,
    ) -> impl Future<Output = Result<Option<Professor>, CampusError>> + Send {
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

    fn list(&self) -> impl Future<Output = Result<Vec<Professor>, CampusError>> + Send {
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
        professor: Professor,
    ) -> impl Future<Output = Result<Option<Professor>, CampusError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(UPDATE)
                .bind(&professor.name)
                .bind(&professor.department)
                .bind(&professor.email)
                .bind(professor.title.as_deref())
                .bind(id.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok((result.rows_affected() > 0).then(|| professor.with_id(id)))
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
