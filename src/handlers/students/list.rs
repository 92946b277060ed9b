use axum::extract::{Query, State};
use axum::http::HeaderMap;

use super::FilterQuery;
use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, Flash};
use crate::services::StudentListView;

/// GET / - students matching `search`/`status`, newest first
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
    headers: HeaderMap,
) -> ApiResult<StudentListView> {
    let view = state.queries.list_view(query.to_filter()).await?;
    Ok(ApiResponse::success(view).with_flash(Flash::from_headers(&headers)))
}

/// Fallback for unknown routes
pub async fn not_found() -> ApiError {
    ApiError::not_found("Page not found")
}
