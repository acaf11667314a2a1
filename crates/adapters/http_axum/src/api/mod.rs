//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod professors;
#[allow(clippy::missing_errors_doc)]
pub mod students;

use axum::Json;
use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use serde::Serialize;

use campus_app::ports::{ProfessorRepository, StudentRepository};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<SR, PR>() -> Router<AppState<SR, PR>>
where
    SR: StudentRepository + Send + Sync + 'static,
    PR: ProfessorRepository + Send + Sync + 'static,
{
    Router::new()
        // Students
        .route(
            "/students",
            get(students::list::<SR, PR>).post(students::create::<SR, PR>),
        )
        .route(
            "/students/{id}",
            get(students::get::<SR, PR>)
                .put(students::update::<SR, PR>)
                .delete(students::delete::<SR, PR>),
        )
        // Professors
        .route(
            "/professors",
            get(professors::list::<SR, PR>).post(professors::create::<SR, PR>),
        )
        .route(
            "/professors/{id}",
            get(professors::get::<SR, PR>)
                .put(professors::update::<SR, PR>)
                .delete(professors::delete::<SR, PR>),
        )
}

/// Possible responses from a list endpoint.
pub enum ListResponse<T> {
    Ok(Json<Vec<T>>),
}

impl<T: Serialize> IntoResponse for ListResponse<T> {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from a get or update endpoint.
pub enum FoundResponse<T> {
    Ok(Json<T>),
    NotFound,
}

impl<T: Serialize> IntoResponse for FoundResponse<T> {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
            Self::NotFound => StatusCode::NOT_FOUND.into_response(),
        }
    }
}

impl<T> From<Option<T>> for FoundResponse<T> {
    fn from(record: Option<T>) -> Self {
        record.map_or(Self::NotFound, |record| Self::Ok(Json(record)))
    }
}

/// Possible responses from a create endpoint.
pub enum CreateResponse<T> {
    Created(Json<T>),
}

impl<T: Serialize> IntoResponse for CreateResponse<T> {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from a delete endpoint.
pub enum DeleteResponse {
    NoContent,
    NotFound,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
            Self::NotFound => StatusCode::NOT_FOUND.into_response(),
        }
    }
}

impl From<bool> for DeleteResponse {
    fn from(deleted: bool) -> Self {
        if deleted { Self::NoContent } else { Self::NotFound }
    }
}
