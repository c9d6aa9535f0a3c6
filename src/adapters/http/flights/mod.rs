//! HTTP adapter for flight search endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{FlightOfferResponse, FlightSearchRequest, FlightSearchResponse};
pub use handlers::FlightHandlers;
pub use routes::flight_routes;
