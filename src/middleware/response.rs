use axum::{
    http::{header::SET_COOKIE, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use serde_json::json;

use super::flash::{clear_cookie, Flash};

/// Wrapper for API responses that automatically adds success envelope
#[derive(Debug)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    /// Consumed notification to report alongside the data
    pub flash: Option<Flash>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful API response with default 200 status
    pub fn success(data: T) -> Self {
        Self { data, flash: None }
    }

    /// Attach a pending notification; the response also clears its cookie
    pub fn with_flash(mut self, flash: Option<Flash>) -> Self {
        self.flash = flash;
        self
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::OK;

        // Convert data to JSON Value for consistent envelope format
        let data_value = match serde_json::to_value(&self.data) {
            Ok(value) => value,
            Err(e) => {
                tracing::error!("Failed to serialize response data: {}", e);
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "success": false,
                        "error": "Failed to serialize response data"
                    }))
                ).into_response();
            }
        };

        let mut envelope = json!({
            "success": true,
            "data": data_value
        });

        let Some(flash) = self.flash else {
            return (status, Json(envelope)).into_response();
        };

        envelope["flash"] = json!(flash);
        let mut response = (status, Json(envelope)).into_response();
        if let Ok(value) = HeaderValue::from_str(&clear_cookie()) {
            response.headers_mut().append(SET_COOKIE, value);
        }
        response
    }
}

pub type ApiResult<T> = Result<ApiResponse<T>, crate::error::ApiError>;
