//! Professor — a faculty member attached to a department.
//!
//! `title` (academic title, e.g. "Doutor") is optional. When absent it stays
//! `None` all the way to storage; it is never replaced by an empty string.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::RecordId;
use crate::record::{self, Identified, RecordDraft};
use crate::schema::{FieldSpec, Format};

const NAME: FieldSpec = FieldSpec::required("Nome", 150);
const DEPARTMENT: FieldSpec = FieldSpec::required("Departamento", 100);
const EMAIL: FieldSpec = FieldSpec::required("Email", 150).with_format(Format::Email);
const TITLE: FieldSpec = FieldSpec::optional("Titulação", 80);

/// A validated professor record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Professor {
    pub id: Option<RecordId>,
    pub name: String,
    pub department: String,
    pub email: String,
    pub title: Option<String>,
}

impl Identified for Professor {
    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn with_id(self, id: RecordId) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }
}

/// Raw professor input as received from a caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProfessorDraft {
    pub name: Option<String>,
    pub department: Option<String>,
    pub email: Option<String>,
    pub title: Option<String>,
}

impl ProfessorDraft {
    /// Build a draft from raw values.
    #[must_use]
    pub fn new(
        name: impl Into<Option<String>>,
        department: impl Into<Option<String>>,
        email: impl Into<Option<String>>,
        title: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            department: department.into(),
            email: email.into(),
            title,
        }
    }
}

impl RecordDraft for ProfessorDraft {
    type Record = Professor;

    const KIND: &'static str = "professor";
    const FIELDS: &'static [FieldSpec] = &[NAME, DEPARTMENT, EMAIL, TITLE];

    fn raw_values(&self) -> Vec<Option<&str>> {
        vec![
            self.name.as_deref(),
            self.department.as_deref(),
            self.email.as_deref(),
            self.title.as_deref(),
        ]
    }

    fn build(self, id: Option<RecordId>) -> Result<Professor, ValidationError> {
        Ok(Professor {
            id,
            name: record::required(self.name, &NAME)?,
            department: record::required(self.department, &DEPARTMENT)?,
            email: record::required(self.email, &EMAIL)?,
            title: record::optional(self.title),
        })
    }
}
