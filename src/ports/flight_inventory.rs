//! Flight inventory port.
//!
//! Supplies flight offers for a validated query. The demo implementation
//! generates synthetic offers in-process; a real implementation would call
//! a GDS or airline API, which is why the seam is async and fallible.

use async_trait::async_trait;

use crate::domain::travel::{FlightOffer, FlightQuery};

/// Port for flight availability lookups.
#[async_trait]
pub trait FlightInventory: Send + Sync {
    /// Returns offers for the query, cheapest first.
    async fn search(&self, query: &FlightQuery) -> Result<Vec<FlightOffer>, InventoryError>;
}

/// Inventory collaborator errors.
#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    /// Inventory backend is unreachable.
    #[error("inventory unavailable: {message}")]
    Unavailable { message: String },

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),
}

impl InventoryError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flight_inventory_is_object_safe() {
        fn _accepts_dyn(_inventory: &dyn FlightInventory) {}
    }
}
