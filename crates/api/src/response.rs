//! Shared response envelope for API handlers.
//!
//! Every response, success or error, has the shape
//! `{ "message", "code", "status", "data" }` where `code` repeats the HTTP
//! status and `status` is `"success"` or `"error"`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Standard response envelope.
///
/// ```ignore
/// Ok(ApiResponse::ok("Teams retrieved successfully", teams))
/// ```
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub message: String,
    pub code: u16,
    pub status: &'static str,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 200 OK carrying `data`.
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self::success(StatusCode::OK, message, data)
    }

    /// 201 Created carrying the new resource.
    pub fn created(message: impl Into<String>, data: T) -> Self {
        Self::success(StatusCode::CREATED, message, data)
    }

    fn success(status: StatusCode, message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            code: status.as_u16(),
            status: "success",
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// 200 OK with `data: null`, for deletes and restores.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: StatusCode::OK.as_u16(),
            status: "success",
            data: None,
        }
    }

    /// Error envelope with `data: null`.
    pub fn error(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: status.as_u16(),
            status: "error",
            data: None,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, axum::Json(self)).into_response()
    }
}
