use std::any::Any;

use axum::response::{IntoResponse, Response};

use super::AppError;

/// Fallback for requests no route (or no method on a route) matched.
pub async fn route_not_found() -> Response {
    AppError::RouteNotFound.into_response()
}

/// Turns a panic caught by `tower_http::catch_panic::CatchPanicLayer` into
/// the uniform error body.
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic payload".to_string()
    };

    AppError::Unknown(message).into_response()
}
