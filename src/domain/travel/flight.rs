//! Flight queries and synthetic flight offers.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Validated flight search parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightQuery {
    origin: String,
    destination: String,
    date: NaiveDate,
    passengers: u32,
}

impl FlightQuery {
    pub const MAX_PASSENGERS: u32 = 9;

    /// Validates and constructs a query. Origin and destination must be
    /// non-empty; passengers must be in 1..=9.
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        date: NaiveDate,
        passengers: u32,
    ) -> Result<Self, ValidationError> {
        let origin = origin.into().trim().to_uppercase();
        let destination = destination.into().trim().to_uppercase();

        if origin.is_empty() {
            return Err(ValidationError::empty_field("origin"));
        }
        if destination.is_empty() {
            return Err(ValidationError::empty_field("destination"));
        }
        if passengers == 0 || passengers > Self::MAX_PASSENGERS {
            return Err(ValidationError::out_of_range(
                "passengers",
                1,
                Self::MAX_PASSENGERS as i32,
                passengers as i32,
            ));
        }

        Ok(Self {
            origin,
            destination,
            date,
            passengers,
        })
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn passengers(&self) -> u32 {
        self.passengers
    }
}

/// Cabin class of an offer. Synthetic inventory is economy-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CabinClass {
    Economy,
    Premium,
    Business,
    First,
}

/// Offer price: total for the whole party plus the per-person figure
/// it was derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightPrice {
    pub amount: u32,
    pub currency: String,
    pub per_person: u32,
}

/// Included baggage allowance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Baggage {
    pub carry_on: u32,
    pub checked: u32,
}

/// A synthetic flight offer. Immutable once generated; not persisted
/// beyond the response that carries it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightOffer {
    pub flight_id: String,
    pub airline: String,
    pub flight_number: String,
    pub origin: String,
    pub destination: String,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub duration_minutes: i64,
    pub stops: u32,
    pub price: FlightPrice,
    pub seats_available: u32,
    pub cabin_class: CabinClass,
    pub baggage: Baggage,
}
