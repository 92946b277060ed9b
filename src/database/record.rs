use serde::{Deserialize, Serialize};

/// Text fields every student record must carry, in form order
pub const REQUIRED_FIELDS: [&str; 5] = [
    "student_name",
    "batch_year",
    "course_program",
    "college_university",
    "current_status",
];

/// Errors that can occur while turning request input into a record
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingRequiredFields(Vec<&'static str>),
}

/// Raw student input as submitted by a form.
///
/// Absent fields deserialize as empty strings so the validation step can
/// report every missing field at once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudentForm {
    pub student_name: String,
    pub batch_year: String,
    pub course_program: String,
    pub college_university: String,
    pub current_status: String,
}

/// Validated, trimmed student fields. Only obtainable through `StudentForm::validate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentFields {
    student_name: String,
    batch_year: String,
    course_program: String,
    college_university: String,
    current_status: String,
}

impl StudentForm {
    pub fn new(
        student_name: impl Into<String>,
        batch_year: impl Into<String>,
        course_program: impl Into<String>,
        college_university: impl Into<String>,
        current_status: impl Into<String>,
    ) -> Self {
        Self {
            student_name: student_name.into(),
            batch_year: batch_year.into(),
            course_program: course_program.into(),
            college_university: college_university.into(),
            current_status: current_status.into(),
        }
    }

    /// Trim every field and require all of them to be non-empty
    pub fn validate(&self) -> Result<StudentFields, RecordError> {
        let values = self.values().map(str::trim);
        let missing: Vec<&'static str> = REQUIRED_FIELDS
            .iter()
            .zip(values.iter())
            .filter(|(_, value)| value.is_empty())
            .map(|(field, _)| *field)
            .collect();

        if !missing.is_empty() {
            return Err(RecordError::MissingRequiredFields(missing));
        }

        let [student_name, batch_year, course_program, college_university, current_status] =
            values.map(str::to_string);
        Ok(StudentFields {
            student_name,
            batch_year,
            course_program,
            college_university,
            current_status,
        })
    }

    fn values(&self) -> [&str; 5] {
        [
            &self.student_name,
            &self.batch_year,
            &self.course_program,
            &self.college_university,
            &self.current_status,
        ]
    }
}

impl StudentFields {
    pub fn student_name(&self) -> &str {
        &self.student_name
    }

    pub fn batch_year(&self) -> &str {
        &self.batch_year
    }

    pub fn course_program(&self) -> &str {
        &self.course_program
    }

    pub fn college_university(&self) -> &str {
        &self.college_university
    }

    pub fn current_status(&self) -> &str {
        &self.current_status
    }
}
