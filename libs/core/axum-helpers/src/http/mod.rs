//! HTTP middleware module.
//!
//! This module provides HTTP-level middleware for:
//! - CORS headers and `OPTIONS` short-circuiting
//! - Security headers
//! - Masking of server error messages in production
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::http::{cors_headers, security_headers, CorsConfig};
//!
//! let app = Router::new()
//!     .layer(axum::middleware::from_fn(security_headers))
//!     .layer(axum::middleware::from_fn_with_state(CorsConfig::default(), cors_headers));
//! ```

pub mod cors;
pub mod masking;
pub mod security;

// Re-export commonly used functions
pub use cors::{cors_headers, CorsConfig};
pub use masking::mask_internal_errors;
pub use security::security_headers;
