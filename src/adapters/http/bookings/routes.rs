//! HTTP routes for booking endpoints.

use axum::{routing::post, Router};

use super::handlers::{create_booking, list_bookings, BookingHandlers};

/// Creates the booking router.
pub fn booking_routes(handlers: BookingHandlers) -> Router {
    Router::new()
        .route("/api/v2/bookings", post(create_booking).get(list_bookings))
        .with_state(handlers)
}
