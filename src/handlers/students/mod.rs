pub mod add;
pub mod delete;
pub mod edit;
pub mod export;
pub mod list;

pub use add::{add_form, add_submit};
pub use delete::delete;
pub use edit::{edit_form, edit_submit};
pub use export::export_csv;
pub use list::{list, not_found};

use axum::extract::rejection::FormRejection;
use axum::Form;
use serde::{Deserialize, Serialize};

use crate::database::record::REQUIRED_FIELDS;
use crate::database::{Student, StudentForm};
use crate::filter::StudentFilter;

/// `search` / `status` query parameters shared by the list view and export
#[derive(Debug, Default, Deserialize)]
pub struct FilterQuery {
    pub search: Option<String>,
    pub status: Option<String>,
}

impl FilterQuery {
    pub fn to_filter(&self) -> StudentFilter {
        StudentFilter::new(self.search.as_deref(), self.status.as_deref())
    }
}

/// Ids arrive as path text; anything that is not an integer names no student
pub fn parse_student_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// The submitted form, or an empty one when the body is not urlencoded.
/// An empty form then fails validation like any other blank submission.
pub fn form_or_empty(form: Result<Form<StudentForm>, FormRejection>) -> StudentForm {
    match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            tracing::warn!("Unreadable student form: {}", rejection);
            StudentForm::default()
        }
    }
}

/// What a presentation layer needs to render the add or edit form
#[derive(Debug, Serialize)]
pub struct StudentFormView {
    pub action: String,
    pub fields: [&'static str; 5],
    pub values: StudentForm,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student: Option<Student>,
}

impl StudentFormView {
    pub fn blank() -> Self {
        Self {
            action: "/add_student".to_string(),
            fields: REQUIRED_FIELDS,
            values: StudentForm::default(),
            student: None,
        }
    }

    pub fn for_student(student: Student) -> Self {
        Self {
            action: format!("/edit_student/{}", student.id),
            fields: REQUIRED_FIELDS,
            values: StudentForm::from(&student),
            student: Some(student),
        }
    }
}
