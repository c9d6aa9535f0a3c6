//! Adapters - concrete implementations of the ports.
//!
//! Outbound adapters (AI, search, flights, payments, stores) implement the
//! collaborator ports; the `http` module is the inbound REST surface.

pub mod ai;
pub mod flights;
pub mod http;
pub mod payments;
pub mod search;
pub mod store;
