//! HTTP handlers for flight search endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::ErrorResponse;
use crate::application::handlers::{SearchFlightsCommand, SearchFlightsError, SearchFlightsHandler};

use super::dto::{FlightSearchRequest, FlightSearchResponse};

#[derive(Clone)]
pub struct FlightHandlers {
    search_handler: Arc<SearchFlightsHandler>,
}

impl FlightHandlers {
    pub fn new(search_handler: Arc<SearchFlightsHandler>) -> Self {
        Self { search_handler }
    }
}

/// POST /api/v2/flights/search - Search synthetic flight inventory
pub async fn search_flights(
    State(handlers): State<FlightHandlers>,
    Json(req): Json<FlightSearchRequest>,
) -> Response {
    let cmd = SearchFlightsCommand {
        origin: req.origin,
        destination: req.destination,
        date: req.date,
        passengers: req.passengers,
    };

    match handlers.search_handler.handle(cmd).await {
        Ok(result) => (
            StatusCode::OK,
            Json(FlightSearchResponse::from_offers(result.flights)),
        )
            .into_response(),
        Err(e) => handle_flight_error(e),
    }
}

fn handle_flight_error(error: SearchFlightsError) -> Response {
    match error {
        SearchFlightsError::Validation(e) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(e.to_string())),
        )
            .into_response(),
        SearchFlightsError::Inventory(msg) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse::service_unavailable(msg)),
        )
            .into_response(),
    }
}
