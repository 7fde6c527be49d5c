//! Type-safe error codes for API responses.
//!
//! Every error the API can produce maps to exactly one code. The code never
//! reaches the response body (clients only see `success` and `message`); it is
//! attached to the log event so failures can be grouped and alerted on.
//!
//! # Example
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::ValidationError;
//! assert_eq!(code.as_str(), "VALIDATION_ERROR");
//! assert_eq!(code.code(), 1001);
//! assert_eq!(code.default_message(), "Request validation failed");
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standardized error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Malformed or missing request input
    ValidationError,

    /// Request body could not be read or decoded as JSON
    JsonExtraction,

    /// No entity matched the request
    NotFound,

    /// No handler matched the request path or method
    RouteNotFound,

    // Server errors
    /// Any failure not classified elsewhere, including caught panics
    InternalError,

    // Storage errors (2000-2999)
    /// Backing store could not be read, decoded, or written
    StorageError,
}

impl ErrorCode {
    /// SCREAMING_SNAKE_CASE identifier, used as the `error_kind` log field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::JsonExtraction => "JSON_EXTRACTION",
            Self::NotFound => "NOT_FOUND",
            Self::RouteNotFound => "ROUTE_NOT_FOUND",
            Self::InternalError => "INTERNAL_ERROR",
            Self::StorageError => "STORAGE_ERROR",
        }
    }

    /// Integer code for logging and monitoring.
    ///
    /// - 1000-1999: Client errors
    /// - 2000-2999: Storage errors
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::JsonExtraction => 1003,
            Self::NotFound => 1004,
            Self::InternalError => 1005,
            Self::RouteNotFound => 1012,
            Self::StorageError => 2001,
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "Request validation failed",
            Self::JsonExtraction => "Failed to parse request body",
            Self::NotFound => "Resource not found",
            Self::RouteNotFound => "Route not found",
            Self::InternalError => "Internal Server Error",
            Self::StorageError => "Storage error occurred",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
