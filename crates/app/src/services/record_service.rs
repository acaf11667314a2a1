//! Record service — validation and orchestration shared by every record kind.
//!
//! Each operation validates its input first and then makes exactly one
//! repository call. Nothing reaches the repository when validation fails.

use std::marker::PhantomData;

use campus_domain::error::{CampusError, ValidationError};
use campus_domain::id::RecordId;
use campus_domain::record::RecordDraft;

use crate::ports::RecordRepository;

/// Application service for CRUD on the records produced by draft type `D`.
pub struct RecordService<D, R> {
    repo: R,
    draft: PhantomData<fn(D)>,
}

impl<D, R> RecordService<D, R>
where
    D: RecordDraft,
    R: RecordRepository<D::Record>,
{
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            draft: PhantomData,
        }
    }

    /// Validate a draft and store it as a new record.
    ///
    /// The record handed to the repository never carries an id; the stored
    /// record is returned as the repository gives it back.
    ///
    /// # Errors
    ///
    /// Returns [`CampusError::Validation`] if a field rule fails, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip_all, fields(kind = D::KIND))]
    pub async fn create(&self, draft: D) -> Result<D::Record, CampusError> {
        let record = draft.validate(None).map_err(rejected)?;
        self.repo.add(record).await
    }

    /// Look up a record by id. A missing record is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`CampusError::Validation`] when `id` is absent or not
    /// positive, or a storage error from the repository.
    #[tracing::instrument(skip(self), fields(kind = D::KIND))]
    pub async fn get_by_id(&self, id: Option<i64>) -> Result<Option<D::Record>, CampusError> {
        let id = RecordId::parse(id).map_err(rejected)?;
        let found = self.repo.get_by_id(id).await?;
        tracing::debug!(found = found.is_some(), "looked up record");
        Ok(found)
    }

    /// List all records, in the order the repository returns them.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self), fields(kind = D::KIND))]
    pub async fn list(&self) -> Result<Vec<D::Record>, CampusError> {
        self.repo.list().await
    }

    /// Validate and replace the record stored under `id`.
    ///
    /// Returns `Ok(None)` when the repository has nothing stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`CampusError::Validation`] if the id or a field rule fails,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self, draft), fields(kind = D::KIND))]
    pub async fn update(
        &self,
        id: Option<i64>,
        draft: D,
    ) -> Result<Option<D::Record>, CampusError> {
        let id = RecordId::parse(id).map_err(rejected)?;
        let record = draft.validate(Some(id)).map_err(rejected)?;
        let updated = self.repo.update(id, record).await?;
        tracing::debug!(found = updated.is_some(), "updated record");
        Ok(updated)
    }

    /// Delete the record stored under `id`, returning whether it existed.
    ///
    /// # Errors
    ///
    /// Returns [`CampusError::Validation`] when `id` is absent or not
    /// positive, or a storage error from the repository.
    #[tracing::instrument(skip(self), fields(kind = D::KIND))]
    pub async fn delete(&self, id: Option<i64>) -> Result<bool, CampusError> {
        let id = RecordId::parse(id).map_err(rejected)?;
        let deleted = self.repo.delete(id).await?;
        tracing::debug!(deleted, "deleted record");
        Ok(deleted)
    }
}

fn rejected(err: ValidationError) -> CampusError {
    tracing::warn!(reason = %err, "rejected invalid input");
    err.into()
}
