//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use campus_app::ports::{ProfessorRepository, StudentRepository};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests API routes under `/api` and exposes `/health`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<SR, PR>(state: AppState<SR, PR>) -> Router
where
    SR: StudentRepository + Send + Sync + 'static,
    PR: ProfessorRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use campus_app::ports::RecordRepository;
    use campus_app::services::professor_service::ProfessorService;
    use campus_app::services::student_service::StudentService;
    use campus_domain::error::CampusError;
    use campus_domain::id::RecordId;
    use campus_domain::professor::Professor;
    use campus_domain::record::Identified;
    use campus_domain::student::Student;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    /// Accepts every write, stores nothing.
    struct StubStudentRepo;
    /// Fails every call, as a broken database would.
    struct BrokenProfessorRepo;

    fn first_id() -> RecordId {
        RecordId::parse(Some(1)).unwrap()
    }

    impl RecordRepository<Student> for StubStudentRepo {
        async fn add(&self, student: Student) -> Result<Student, CampusError> {
            Ok(student.with_id(first_id()))
        }
        async fn get_by_id(&self, _id: RecordId) -> Result<Option<Student>, CampusError> {
            Ok(None)
        }
        async fn list(&self) -> Result<Vec<Student>, CampusError> {
            Ok(vec![])
        }
        async fn update(
            &self,
            _id: RecordId,
            _student: Student,
        ) -> Result<Option<Student>, CampusError> {
            Ok(None)
        }
        async fn delete(&self, _id: RecordId) -> Result<bool, CampusError> {
            Ok(false)
        }
    }

    fn broken() -> CampusError {
        CampusError::Storage(Box::new(std::io::Error::other("disk unavailable")))
    }

    impl RecordRepository<Professor> for BrokenProfessorRepo {
        async fn add(&self, _professor: Professor) -> Result<Professor, CampusError> {
            Err(broken())
        }
        async fn get_by_id(&self, _id: RecordId) -> Result<Option<Professor>, CampusError> {
            Err(broken())
        }
        async fn list(&self) -> Result<Vec<Professor>, CampusError> {
            Err(broken())
        }
        async fn update(
            &self,
            _id: RecordId,
            _professor: Professor,
        ) -> Result<Option<Professor>, CampusError> {
            Err(broken())
        }
        async fn delete(&self, _id: RecordId) -> Result<bool, CampusError> {
            Err(broken())
        }
    }

    fn app() -> Router {
        build(AppState::new(
            StudentService::new(StubStudentRepo),
            ProfessorService::new(BrokenProfessorRepo),
        ))
    }

    fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn empty_request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let response = app()
            .oneshot(empty_request("GET", "/health"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_list_students_as_json_array() {
        let response = app()
            .oneshot(empty_request("GET", "/api/students"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!([]));
    }

    #[tokio::test]
    async fn should_return_created_with_assigned_id() {
        let response = app()
            .oneshot(json_request(
                "POST",
                "/api/students",
                r#"{"name":" Ana ","course":"Direito"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"id": 1, "name": "Ana", "course": "Direito"})
        );
    }

    #[tokio::test]
    async fn should_return_bad_request_with_reason_when_field_missing() {
        let response = app()
            .oneshot(json_request("POST", "/api/students", r#"{"course":"Direito"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "Nome é obrigatório"})
        );
    }

    #[tokio::test]
    async fn should_return_bad_request_when_id_not_positive() {
        let response = app()
            .oneshot(empty_request("GET", "/api/students/0"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "Id inválido"})
        );
    }

    #[tokio::test]
    async fn should_return_not_found_when_student_missing() {
        let app = app();

        let get = app
            .clone()
            .oneshot(empty_request("GET", "/api/students/7"))
            .await
            .unwrap();
        let put = app
            .clone()
            .oneshot(json_request(
                "PUT",
                "/api/students/7",
                r#"{"name":"Ana","course":"Direito"}"#,
            ))
            .await
            .unwrap();
        let delete = app
            .oneshot(empty_request("DELETE", "/api/students/7"))
            .await
            .unwrap();

        assert_eq!(get.status(), StatusCode::NOT_FOUND);
        assert_eq!(put.status(), StatusCode::NOT_FOUND);
        assert_eq!(delete.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_validate_professor_before_reaching_storage() {
        let response = app()
            .oneshot(json_request(
                "POST",
                "/api/professors",
                r#"{"name":"Maria","department":"Computação","email":"invalido"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "Email inválido"})
        );
    }

    #[tokio::test]
    async fn should_hide_storage_errors_behind_internal_error() {
        let response = app()
            .oneshot(empty_request("GET", "/api/professors"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "internal server error"})
        );
    }
}
