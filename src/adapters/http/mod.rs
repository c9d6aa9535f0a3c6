//! HTTP adapters - REST API implementations.
//!
//! Each feature has its own dto/handlers/routes triple; [`api_router`]
//! merges the feature routers and applies the shared middleware stack.

mod error;

pub mod bookings;
pub mod chat;
pub mod flights;
pub mod health;
pub mod payments;

pub use error::ErrorResponse;

use std::time::Duration;

use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Assembles the full API router with tracing, timeout, and CORS layers.
pub fn api_router(
    chat: chat::ChatHandlers,
    flights: flights::FlightHandlers,
    payments: payments::PaymentHandlers,
    bookings: bookings::BookingHandlers,
    health: health::HealthState,
    server: &ServerConfig,
) -> Router {
    Router::new()
        .merge(chat::chat_routes(chat))
        .merge(flights::flight_routes(flights))
        .merge(payments::payment_routes(payments))
        .merge(bookings::booking_routes(bookings))
        .merge(health::health_routes(health))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            server.request_timeout_secs,
        )))
        .layer(cors_layer(server))
}

/// Permissive CORS unless origins are configured. Streaming metadata
/// travels in response headers, so they are always exposed.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers(Any);

    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(origins)
    }
}
