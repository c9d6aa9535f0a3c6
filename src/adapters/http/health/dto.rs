//! HTTP DTOs for the health endpoint.

use serde::Serialize;

/// Liveness report naming the adapter wired behind each port.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub services: ServicesResponse,
}

/// Which concrete adapter serves each collaborator.
#[derive(Debug, Clone, Serialize)]
pub struct ServicesResponse {
    pub ai_provider: String,
    pub search: String,
    pub conversation_store: String,
    pub booking_store: String,
}
