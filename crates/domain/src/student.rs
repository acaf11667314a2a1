//! Student — a learner enrolled in a course.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::RecordId;
use crate::record::{self, Identified, RecordDraft};
use crate::schema::FieldSpec;

const NAME: FieldSpec = FieldSpec::required("Nome", 150);
const COURSE: FieldSpec = FieldSpec::required("Curso", 150);

/// A validated student record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: Option<RecordId>,
    pub name: String,
    pub course: String,
}

impl Identified for Student {
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

/// Raw student input as received from a caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StudentDraft {
    pub name: Option<String>,
    pub course: Option<String>,
}

impl StudentDraft {
    /// Build a draft from raw values.
    #[must_use]
    pub fn new(name: impl Into<Option<String>>, course: impl Into<Option<String>>) -> Self {
        Self {
            name: name.into(),
            course: course.into(),
        }
    }
}

impl RecordDraft for StudentDraft {
    type Record = Student;

    const KIND: &'static str = "student";
    const FIELDS: &'static [FieldSpec] = &[NAME, COURSE];

    fn raw_values(&self) -> Vec<Option<&str>> {
        vec![self.name.as_deref(), self.course.as_deref()]
    }

    fn build(self, id: Option<RecordId>) -> Result<Student, ValidationError> {
        Ok(Student {
            id,
            name: record::required(self.name, &NAME)?,
            course: record::required(self.course, &COURSE)?,
        })
    }
}
