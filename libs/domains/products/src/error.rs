use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

pub const INVALID_PRODUCT_ID: &str = "Invalid product ID";
pub const PRODUCT_NOT_FOUND: &str = "Product not found";

#[derive(Debug, Error)]
pub enum ProductError {
    /// Request input failed one of the create or query checks
    #[error("{0}")]
    Validation(String),

    #[error("Invalid product ID")]
    InvalidId(String),

    #[error("Product not found")]
    NotFound(i64),

    /// The catalog file could not be read, decoded, or written
    #[error("{0}")]
    Storage(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::Validation(msg) => AppError::Validation(msg),
            ProductError::InvalidId(raw) => {
                tracing::debug!(raw_id = %raw, "Rejected product id");
                AppError::Validation(INVALID_PRODUCT_ID.to_string())
            }
            ProductError::NotFound(id) => {
                tracing::debug!(product_id = id, "No product with this id");
                AppError::NotFound(PRODUCT_NOT_FOUND.to_string())
            }
            ProductError::Storage(msg) => AppError::Storage(msg),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
