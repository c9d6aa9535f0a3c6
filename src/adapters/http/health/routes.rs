//! HTTP routes for the health endpoint.

use axum::{routing::get, Router};

use super::handlers::{health, HealthState};

/// Creates the health router.
pub fn health_routes(state: HealthState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .with_state(state)
}
