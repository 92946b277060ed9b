use axum::extract::{Path, State};
use axum::response::Response;

use super::parse_student_id;
use crate::app::AppState;
use crate::middleware::{redirect_with_flash, Flash};
use crate::services::ServiceError;
use crate::types::Operation;

/// POST /delete_student/:id - always lands back on the list view
pub async fn delete(State(state): State<AppState>, Path(raw_id): Path<String>) -> Response {
    let Some(id) = parse_student_id(&raw_id) else {
        return redirect_with_flash(Flash::warning("Student not found."));
    };

    let flash = match state.students.delete(id).await {
        Ok(student) => Flash::success(format!("Student {} deleted successfully!", student.student_name)),
        // Record vanished between page load and submit
        Err(ServiceError::NotFound(_)) => Flash::warning("Student not found."),
        Err(_) => Flash::error(Operation::Delete.failure_message()),
    };

    redirect_with_flash(flash)
}
