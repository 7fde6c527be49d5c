pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Error body returned for every failed request.
///
/// # JSON Example
///
/// ```json
/// {
///   "success": false,
///   "message": "Product not found"
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Always `false` for errors
    pub success: bool,
    /// Human-readable error message. Server errors are replaced with a generic
    /// message in production.
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Application error type that can be converted to HTTP responses.
///
/// The `Display` text of each variant is exactly the message that ends up in
/// the response body, so handlers and logs agree on wording.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    /// Malformed or missing input (400)
    #[error("{0}")]
    Validation(String),

    /// Request body rejected by the JSON extractor (status from the rejection)
    #[error("{}", .0.body_text())]
    JsonExtractorRejection(#[from] JsonRejection),

    /// No entity matched (404)
    #[error("{0}")]
    NotFound(String),

    /// No handler matched (404)
    #[error("Route not found")]
    RouteNotFound,

    /// Backing store failed to read, decode, or write (500)
    #[error("{0}")]
    Storage(String),

    /// Anything else, including caught panics (500)
    #[error("{0}")]
    Unknown(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::JsonExtractorRejection(e) => e.status(),
            AppError::NotFound(_) | AppError::RouteNotFound => StatusCode::NOT_FOUND,
            AppError::Storage(_) | AppError::Unknown(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation(_) => ErrorCode::ValidationError,
            AppError::JsonExtractorRejection(_) => ErrorCode::JsonExtraction,
            AppError::NotFound(_) => ErrorCode::NotFound,
            AppError::RouteNotFound => ErrorCode::RouteNotFound,
            AppError::Storage(_) => ErrorCode::StorageError,
            AppError::Unknown(_) => ErrorCode::InternalError,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(
                error_code = code.code(),
                error_kind = %code,
                "{}",
                message
            );
        } else {
            tracing::info!(
                error_code = code.code(),
                error_kind = %code,
                "{}",
                message
            );
        }

        error_response(status, message)
    }
}

/// Helper function to create error responses.
///
/// # Example
///
/// ```rust,ignore
/// use axum_helpers::errors::error_response;
/// use axum::http::StatusCode;
///
/// let response = error_response(StatusCode::BAD_REQUEST, "Invalid input");
/// ```
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorResponse::new(message))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::Validation("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::NotFound("x".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::RouteNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::Storage("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Unknown("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_display_is_the_raw_message() {
        assert_eq!(
            AppError::NotFound("Product not found".into()).to_string(),
            "Product not found"
        );
        assert_eq!(AppError::RouteNotFound.to_string(), "Route not found");
    }

    #[test]
    fn test_storage_error_code() {
        let err = AppError::Storage("gone".into());
        assert_eq!(err.code(), ErrorCode::StorageError);
        assert_eq!(err.to_string(), "gone");
    }

    #[test]
    fn test_error_response_body_shape() {
        let body = serde_json::to_value(ErrorResponse::new("nope")).unwrap();
        assert_eq!(body, serde_json::json!({ "success": false, "message": "nope" }));
    }
}
