//! API routes module

pub mod health;
pub mod products;

use axum::Router;
use axum_helpers::health_router;

use crate::state::AppState;

/// Routes served under `/api`
pub fn routes(state: &AppState) -> Router {
    Router::new().nest("/products", products::router(state))
}

/// Top-level routes: banner, liveness and readiness
pub fn public_routes(state: &AppState) -> Router {
    health::router(state.clone()).merge(health_router(state.config.app))
}
