//! Flight search handler.

use std::sync::Arc;

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::foundation::ValidationError;
use crate::domain::travel::{FlightOffer, FlightQuery};
use crate::ports::FlightInventory;

/// Command to search flights.
#[derive(Debug, Clone)]
pub struct SearchFlightsCommand {
    pub origin: String,
    pub destination: String,
    /// Departure date, "YYYY-MM-DD".
    pub date: String,
    pub passengers: u32,
}

/// Result of a flight search.
#[derive(Debug, Clone)]
pub struct SearchFlightsResult {
    pub flights: Vec<FlightOffer>,
}

/// Errors from flight search.
#[derive(Debug, Clone, Error)]
pub enum SearchFlightsError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Inventory error: {0}")]
    Inventory(String),
}

/// Handler for flight searches.
pub struct SearchFlightsHandler {
    inventory: Arc<dyn FlightInventory>,
}

impl SearchFlightsHandler {
    pub fn new(inventory: Arc<dyn FlightInventory>) -> Self {
        Self { inventory }
    }

    pub async fn handle(
        &self,
        cmd: SearchFlightsCommand,
    ) -> Result<SearchFlightsResult, SearchFlightsError> {
        let date = NaiveDate::parse_from_str(&cmd.date, "%Y-%m-%d").map_err(|_| {
            ValidationError::invalid_format("date", "expected YYYY-MM-DD")
        })?;

        let query = FlightQuery::new(cmd.origin, cmd.destination, date, cmd.passengers)?;

        let flights = self
            .inventory
            .search(&query)
            .await
            .map_err(|e| SearchFlightsError::Inventory(e.to_string()))?;

        Ok(SearchFlightsResult { flights })
    }
}
