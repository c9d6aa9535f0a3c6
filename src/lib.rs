//! Wayfinder - Conversational Travel Planning Backend
//!
//! This crate implements a travel-planning assistant: a streamed chat flow
//! backed by a generative-AI provider, synthetic flight-search and payment
//! flows, and a per-user bookings listing.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
