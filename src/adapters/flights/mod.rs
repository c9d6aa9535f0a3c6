//! Flight inventory adapters.

mod synthetic;

pub use synthetic::SyntheticFlightInventory;
