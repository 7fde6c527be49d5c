//! Root banner and readiness endpoints

use axum::{extract::State, response::IntoResponse, routing::get, Router};
use axum_helpers::{errors::handlers::route_not_found, run_health_checks, HealthCheckFuture};

use crate::state::AppState;

pub const BANNER: &str = "E-commerce Backend API is running";

async fn root() -> &'static str {
    BANNER
}

/// 200 while the catalog file can be loaded, 503 otherwise
async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    let checks: Vec<(&str, HealthCheckFuture)> = vec![(
        "store",
        Box::pin(async {
            state
                .products
                .check_store()
                .await
                .map_err(|e| e.to_string())
        }),
    )];

    run_health_checks(checks).await
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root).fallback(route_not_found))
        .route("/ready", get(ready).fallback(route_not_found))
        .with_state(state)
}
