//! JSON REST handlers for students.

use axum::Json;
use axum::extract::{Path, State};

use campus_app::ports::{ProfessorRepository, StudentRepository};
use campus_domain::student::{Student, StudentDraft};

use super::{CreateResponse, DeleteResponse, FoundResponse, ListResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// `GET /api/students`
pub async fn list<SR, PR>(
    State(state): State<AppState<SR, PR>>,
) -> Result<ListResponse<Student>, ApiError>
where
    SR: StudentRepository + Send + Sync + 'static,
    PR: ProfessorRepository + Send + Sync + 'static,
{
    let students = state.student_service.list().await?;
    Ok(ListResponse::Ok(Json(students)))
}

/// `GET /api/students/{id}`
pub async fn get<SR, PR>(
    State(state): State<AppState<SR, PR>>,
    Path(id): Path<i64>,
) -> Result<FoundResponse<Student>, ApiError>
where
    SR: StudentRepository + Send + Sync + 'static,
    PR: ProfessorRepository + Send + Sync + 'static,
{
    let student = state.student_service.get_by_id(Some(id)).await?;
    Ok(student.into())
}

/// `POST /api/students`
pub async fn create<SR, PR>(
    State(state): State<AppState<SR, PR>>,
    Json(draft): Json<StudentDraft>,
) -> Result<CreateResponse<Student>, ApiError>
where
    SR: StudentRepository + Send + Sync + 'static,
    PR: ProfessorRepository + Send + Sync + 'static,
{
    let created = state.student_service.create(draft).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /api/students/{id}`
pub async fn update<SR, PR>(
    State(state): State<AppState<SR, PR>>,
    Path(id): Path<i64>,
    Json(draft): Json<StudentDraft>,
) -> Result<FoundResponse<Student>, ApiError>
where
    SR: StudentRepository + Send + Sync + 'static,
    PR: ProfessorRepository + Send + Sync + 'static,
{
    let updated = state.student_service.update(Some(id), draft).await?;
    Ok(updated.into())
}

/// `DELETE /api/students/{id}`
pub async fn delete<SR, PR>(
    State(state): State<AppState<SR, PR>>,
    Path(id): Path<i64>,
) -> Result<DeleteResponse, ApiError>
where
    SR: StudentRepository + Send + Sync + 'static,
    PR: ProfessorRepository + Send + Sync + 'static,
{
    let deleted = state.student_service.delete(Some(id)).await?;
    Ok(deleted.into())
}
