use crate::errors::handlers::{handle_panic, route_not_found};
use crate::http::{cors_headers, mask_internal_errors, security_headers, CorsConfig};
use axum::{extract::DefaultBodyLimit, middleware, routing::get, Json, Router};
use core_config::{server::ServerConfig, Environment};
use std::io;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{info, Level};
use utoipa::OpenApi;

use super::shutdown::shutdown_signal;

/// Maximum accepted request body size (10KB).
pub const DEFAULT_BODY_LIMIT: usize = 10 * 1024;

/// Settings for the cross-cutting middleware stack.
#[derive(Clone, Debug)]
pub struct PipelineConfig {
    /// Production masks 500 messages
    pub environment: Environment,
    pub cors: CorsConfig,
    /// Request bodies above this many bytes are rejected with 413
    pub body_limit: usize,
}

impl PipelineConfig {
    pub fn new(environment: Environment, cors: CorsConfig) -> Self {
        Self {
            environment,
            cors,
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }
}

/// Starts the Axum server with graceful shutdown.
///
/// # Errors
/// Returns an error if:
/// - The TCP listener fails to bind to the configured address
/// - The server encounters an error during operation
pub async fn create_app(router: Router, server_config: &ServerConfig) -> io::Result<()> {
    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;

    info!("Server starting on {}", listener.local_addr()?);
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        })?;

    Ok(())
}

/// Creates the application router with the common middleware stack.
///
/// This function sets up:
/// - The OpenAPI document at `/api-docs/openapi.json`
/// - `apis` nested under `/api`
/// - `public` routes (root banner, health) at the top level
/// - A "Route not found" fallback, also used for unsupported methods on
///   the document route
///
/// Middleware, outermost first:
/// 1. Request tracing
/// 2. CORS headers; `OPTIONS` requests are answered here
/// 3. Security headers
/// 4. Production masking of 500 messages
/// 5. Panic catching, reported as a 500
/// 6. Request body limit
///
/// Routers passed in must already have their state applied.
///
/// # Type Parameters
/// * `T` - A type implementing `utoipa::OpenApi` for API documentation
pub fn create_router<T>(apis: Router, public: Router, pipeline: &PipelineConfig) -> Router
where
    T: OpenApi + 'static,
{
    info!(
        allow_origin = ?pipeline.cors.allow_origin,
        body_limit = pipeline.body_limit,
        environment = %pipeline.environment,
        "Configuring request pipeline"
    );

    Router::new()
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(T::openapi()) }).fallback(route_not_found),
        )
        .merge(public)
        .nest("/api", apis)
        .fallback(route_not_found)
        .layer(DefaultBodyLimit::max(pipeline.body_limit))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::from_fn_with_state(
            pipeline.environment,
            mask_internal_errors,
        ))
        .layer(middleware::from_fn(security_headers))
        .layer(middleware::from_fn_with_state(
            pipeline.cors.clone(),
            cors_headers,
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}
