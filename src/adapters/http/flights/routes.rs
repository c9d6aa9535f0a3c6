//! HTTP routes for flight search endpoints.

use axum::{routing::post, Router};

use super::handlers::{search_flights, FlightHandlers};

/// Creates the flight router.
pub fn flight_routes(handlers: FlightHandlers) -> Router {
    Router::new()
        .route("/api/v2/flights/search", post(search_flights))
        .with_state(handlers)
}
