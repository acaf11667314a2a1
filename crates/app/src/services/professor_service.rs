//! Professor service — use-cases for managing professors.

use campus_domain::professor::ProfessorDraft;

use super::record_service::RecordService;

/// Application service for professor CRUD operations.
pub type ProfessorService<R> = RecordService<ProfessorDraft, R>;
