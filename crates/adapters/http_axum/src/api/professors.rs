//! JSON REST handlers for professors.

use axum::Json;
use axum::extract::{Path, State};

use campus_app::ports::{ProfessorRepository, StudentRepository};
use campus_domain::professor::{Professor, ProfessorDraft};

use super::{CreateResponse, DeleteResponse, FoundResponse, ListResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// `GET /api/professors`
pub async fn list<SR, PR>(
    State(state): State<AppState<SR, PR>>,
) -> Result<ListResponse<Professor>, ApiError>
where
    SR: StudentRepository + Send + Sync + 'static,
    PR: ProfessorRepository + Send + Sync + 'static,
{
    let professors = state.professor_service.list().await?;
    Ok(ListResponse::Ok(Json(professors)))
}

/// `GET /api/professors/{id}`
pub async fn get<SR, PR>(
    State(state): State<AppState<SR, PR>>,
    Path(id): Path<i64>,
) -> Result<FoundResponse<Professor>, ApiError>
where
    SR: StudentRepository + Send + Sync + 'static,
    PR: ProfessorRepository + Send + Sync + 'static,
{
    let professor = state.professor_service.get_by_id(Some(id)).await?;
    Ok(professor.into())
}

/// `POST /api/professors`
pub async fn create<SR, PR>(
    State(state): State<AppState<SR, PR>>,
    Json(draft): Json<ProfessorDraft>,
) -> Result<CreateResponse<Professor>, ApiError>
where
    SR: StudentRepository + Send + Sync + 'static,
    PR: ProfessorRepository + Send + Sync + 'static,
{
    let created = state.professor_service.create(draft).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /api/professors/{id}`
pub async fn update<SR, PR>(
    State(state): State<AppState<SR, PR>>,
    Path(id): Path<i64>,
    Json(draft): Json<ProfessorDraft>,
) -> Result<FoundResponse<Professor>, ApiError>
where
    SR: StudentRepository + Send + Sync + 'static,
    PR: ProfessorRepository + Send + Sync + 'static,
{
    let updated = state.professor_service.update(Some(id), draft).await?;
    Ok(updated.into())
}

/// `DELETE /api/professors/{id}`
pub async fn delete<SR, PR>(
    State(state): State<AppState<SR, PR>>,
    Path(id): Path<i64>,
) -> Result<DeleteResponse, ApiError>
where
    SR: StudentRepository + Send + Sync + 'static,
    PR: ProfessorRepository + Send + Sync + 'static,
{
    let deleted = state.professor_service.delete(Some(id)).await?;
    Ok(deleted.into())
}
