use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use core_config::Environment;

use crate::errors::{error_response, ErrorCode};

/// Replaces the body of every `500` response with a generic message when
/// running in production. Other statuses pass through untouched, so 4xx
/// messages still reach the client.
pub async fn mask_internal_errors(
    State(environment): State<Environment>,
    request: Request,
    next: Next,
) -> Response {
    let response = next.run(request).await;

    if environment.is_production() && response.status() == StatusCode::INTERNAL_SERVER_ERROR {
        return error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorCode::InternalError.default_message(),
        );
    }

    response
}
