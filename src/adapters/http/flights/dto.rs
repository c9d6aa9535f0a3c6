//! HTTP DTOs for flight search endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::travel::{Baggage, CabinClass, FlightOffer, FlightPrice};

/// Request to search flights.
#[derive(Debug, Clone, Deserialize)]
pub struct FlightSearchRequest {
    pub origin: String,
    pub destination: String,
    /// Departure date, "YYYY-MM-DD".
    pub date: String,
    #[serde(default = "default_passengers")]
    pub passengers: u32,
}

fn default_passengers() -> u32 {
    1
}

/// One flight offer in an API response.
#[derive(Debug, Clone, Serialize)]
pub struct FlightOfferResponse {
    pub flight_id: String,
    pub airline: String,
    pub flight_number: String,
    pub origin: String,
    pub destination: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub duration_minutes: i64,
    pub stops: u32,
    pub price: FlightPrice,
    pub seats_available: u32,
    pub cabin_class: CabinClass,
    pub baggage: Baggage,
}

impl From<FlightOffer> for FlightOfferResponse {
    fn from(offer: FlightOffer) -> Self {
        Self {
            flight_id: offer.flight_id,
            airline: offer.airline,
            flight_number: offer.flight_number,
            origin: offer.origin,
            destination: offer.destination,
            departure_time: offer.departure_time.to_rfc3339(),
            arrival_time: offer.arrival_time.to_rfc3339(),
            duration_minutes: offer.duration_minutes,
            stops: offer.stops,
            price: offer.price,
            seats_available: offer.seats_available,
            cabin_class: offer.cabin_class,
            baggage: offer.baggage,
        }
    }
}

/// Search response: offers sorted by total price.
#[derive(Debug, Clone, Serialize)]
pub struct FlightSearchResponse {
    pub flights: Vec<FlightOfferResponse>,
    pub count: usize,
}

impl FlightSearchResponse {
    pub fn from_offers(offers: Vec<FlightOffer>) -> Self {
        let flights: Vec<FlightOfferResponse> = offers.into_iter().map(Into::into).collect();
        let count = flights.len();
        Self { flights, count }
    }
}
