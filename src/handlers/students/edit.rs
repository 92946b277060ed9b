use axum::extract::rejection::FormRejection;
use axum::extract::{Path, State};
use axum::response::Response;
use axum::Form;

use super::{form_or_empty, parse_student_id, StudentFormView};
use crate::app::AppState;
use crate::database::StudentForm;
use crate::error::ApiError;
use crate::middleware::{redirect_with_flash, ApiResponse, ApiResult, Flash};
use crate::types::Operation;

fn not_found(raw: &str) -> ApiError {
    ApiError::not_found(format!("Student {} not found", raw))
}

/// GET /edit_student/:id - form populated with the stored record
pub async fn edit_form(State(state): State<AppState>, Path(raw_id): Path<String>) -> ApiResult<StudentFormView> {
    let id = parse_student_id(&raw_id).ok_or_else(|| not_found(&raw_id))?;
    let student = state.students.find(id).await?;
    Ok(ApiResponse::success(StudentFormView::for_student(student)))
}

/// POST /edit_student/:id - overwrite all five fields, then back to the list view
pub async fn edit_submit(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    form: Result<Form<StudentForm>, FormRejection>,
) -> Result<Response, ApiError> {
    let id = parse_student_id(&raw_id).ok_or_else(|| not_found(&raw_id))?;
    let student = state
        .students
        .update(id, &form_or_empty(form))
        .await
        .map_err(|e| ApiError::for_operation(e, Operation::Update))?;

    Ok(redirect_with_flash(Flash::success(format!(
        "Student {} updated successfully!",
        student.student_name
    ))))
}
