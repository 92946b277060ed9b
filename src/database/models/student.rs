use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Student {
    pub id: i64,
    pub student_name: String,
    pub batch_year: String,
    pub course_program: String,
    pub college_university: String,
    pub current_status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Student {
    pub const TABLE: &'static str = "students";
}

impl From<&Student> for crate::database::record::StudentForm {
    fn from(student: &Student) -> Self {
        Self::new(
            student.student_name.clone(),
            student.batch_year.clone(),
            student.course_program.clone(),
            student.college_university.clone(),
            student.current_status.clone(),
        )
    }
}
