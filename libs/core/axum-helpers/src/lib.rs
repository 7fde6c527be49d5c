//! # Axum Helpers
//!
//! Utilities and middleware shared by the HTTP services in this workspace.
//!
//! ## Modules
//!
//! - **[`server`]**: Router assembly, health checks, graceful shutdown
//! - **[`http`]**: HTTP middleware (CORS, security headers, error masking)
//! - **[`errors`]**: The uniform `{ success: false, message }` error body
//! - **[`extractors`]**: JSON extractor reporting rejections as [`AppError`]
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_app, create_router, health_router, PipelineConfig};
//! use axum_helpers::http::CorsConfig;
//! use core_config::{app_info, server::ServerConfig, Environment};
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let pipeline = PipelineConfig::new(Environment::Development, CorsConfig::default());
//!     let router = create_router::<ApiDoc>(Router::new(), health_router(app_info!()), &pipeline);
//!     create_app(router, &ServerConfig::default()).await?;
//!     Ok(())
//! }
//! ```

// Domain modules
pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

// Re-export server types
pub use server::{
    create_app, create_router, health_router, run_health_checks, shutdown_signal,
    HealthCheckFuture, HealthResponse, PipelineConfig,
};

// Re-export HTTP middleware
pub use http::{cors_headers, mask_internal_errors, security_headers, CorsConfig};

// Re-export error types
pub use errors::{error_response, AppError, ErrorCode, ErrorResponse};

// Re-export extractors
pub use extractors::ApiJson;
