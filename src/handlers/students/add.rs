use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::response::Response;
use axum::Form;

use super::{form_or_empty, StudentFormView};
use crate::app::AppState;
use crate::database::StudentForm;
use crate::error::ApiError;
use crate::middleware::{redirect_with_flash, ApiResponse, Flash};
use crate::types::Operation;

/// GET /add_student - blank creation form
pub async fn add_form() -> ApiResponse<StudentFormView> {
    ApiResponse::success(StudentFormView::blank())
}

/// POST /add_student - create, then back to the list view
pub async fn add_submit(
    State(state): State<AppState>,
    form: Result<Form<StudentForm>, FormRejection>,
) -> Result<Response, ApiError> {
    let student = state
        .students
        .create(&form_or_empty(form))
        .await
        .map_err(|e| ApiError::for_operation(e, Operation::Create))?;

    Ok(redirect_with_flash(Flash::success(format!(
        "Student {} added successfully!",
        student.student_name
    ))))
}
