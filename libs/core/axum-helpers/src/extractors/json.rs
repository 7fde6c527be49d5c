//! JSON body extractor whose rejections use the uniform error body.

use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;

/// Like [`axum::Json`], but a missing content type, an oversized body, or a
/// malformed document is reported as `{ "success": false, "message": ... }`
/// instead of axum's plain-text rejection.
///
/// Validation of the decoded value is left to the service layer, which knows
/// the order in which checks have to run.
///
/// # Example
/// ```ignore
/// use axum::{routing::post, Router};
/// use axum_helpers::extractors::ApiJson;
///
/// async fn create(ApiJson(input): ApiJson<CreateProduct>) -> String {
///     format!("{:?}", input)
/// }
///
/// let app = Router::new().route("/products", post(create));
/// ```
#[derive(Debug)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await?;
        Ok(ApiJson(data))
    }
}
