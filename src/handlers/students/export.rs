use axum::extract::{Query, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE, SET_COOKIE};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use super::FilterQuery;
use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::{redirect_with_flash, Flash};
use crate::services::ExportError;

const EXPORT_FAILURE: &str = "An error occurred while exporting data. Please try again.";

/// GET /export_csv - download the filtered view as CSV
pub async fn export_csv(State(state): State<AppState>, Query(query): Query<FilterQuery>) -> Response {
    match state.exports.export(query.to_filter()).await {
        Ok(export) => {
            let flash = Flash::success(format!(
                "CSV file exported successfully! ({} records)",
                export.record_count
            ));
            (
                StatusCode::OK,
                [
                    (CONTENT_TYPE, "text/csv".to_string()),
                    (CONTENT_DISPOSITION, format!("attachment; filename={}", export.filename)),
                    (SET_COOKIE, flash.to_cookie()),
                ],
                export.content,
            )
                .into_response()
        }
        Err(ExportError::NothingToExport) => {
            redirect_with_flash(Flash::warning("No student data available to export."))
        }
        Err(e) => {
            tracing::error!("Error exporting CSV: {}", e);
            ApiError::internal_server_error(EXPORT_FAILURE).into_response()
        }
    }
}
