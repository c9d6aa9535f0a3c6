//! HTTP adapter for the health endpoint.

mod dto;
mod handlers;
mod routes;

pub use dto::{HealthResponse, ServicesResponse};
pub use handlers::HealthState;
pub use routes::health_routes;
