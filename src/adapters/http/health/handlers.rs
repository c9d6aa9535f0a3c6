//! HTTP handlers for the health endpoint.

use axum::{extract::State, http::StatusCode, response::{IntoResponse, Response}, Json};

use super::dto::{HealthResponse, ServicesResponse};

/// Names of the adapters selected at startup, reported as-is.
#[derive(Debug, Clone)]
pub struct HealthState {
    pub ai_provider: String,
    pub search: String,
    pub conversation_store: String,
    pub booking_store: String,
}

/// GET /api/health - Liveness and adapter wiring report
pub async fn health(State(state): State<HealthState>) -> Response {
    let response = HealthResponse {
        status: "healthy",
        service: "wayfinder",
        version: env!("CARGO_PKG_VERSION"),
        services: ServicesResponse {
            ai_provider: state.ai_provider,
            search: state.search,
            conversation_store: state.conversation_store,
            booking_store: state.booking_store,
        },
    };

    (StatusCode::OK, Json(response)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_reports_healthy() {
        let state = HealthState {
            ai_provider: "mock".to_string(),
            search: "static".to_string(),
            conversation_store: "memory".to_string(),
            booking_store: "memory".to_string(),
        };

        let response = health(State(state)).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
