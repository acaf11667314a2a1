//! Student service — use-cases for managing students.

use campus_domain::student::StudentDraft;

use super::record_service::RecordService;

/// Application service for student CRUD operations.
pub type StudentService<R> = RecordService<StudentDraft, R>;
