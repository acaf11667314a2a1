//! Shared application state for axum handlers.

use std::sync::Arc;

use campus_app::ports::{ProfessorRepository, StudentRepository};
use campus_app::services::professor_service::ProfessorService;
use campus_app::services::student_service::StudentService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repositories themselves do not
/// need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<SR, PR> {
    /// Student CRUD service.
    pub student_service: Arc<StudentService<SR>>,
    /// Professor CRUD service.
    pub professor_service: Arc<ProfessorService<PR>>,
}

impl<SR, PR> Clone for AppState<SR, PR> {
    fn clone(&self) -> Self {
        Self {
            student_service: Arc::clone(&self.student_service),
            professor_service: Arc::clone(&self.professor_service),
        }
    }
}

impl<SR, PR> AppState<SR, PR>
where
    SR: StudentRepository + Send + Sync + 'static,
    PR: ProfessorRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        student_service: StudentService<SR>,
        professor_service: ProfessorService<PR>,
    ) -> Self {
        Self {
            student_service: Arc::new(student_service),
            professor_service: Arc::new(professor_service),
        }
    }
}
