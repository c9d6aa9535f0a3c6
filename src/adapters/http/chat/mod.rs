//! HTTP adapter for the streamed chat endpoint.

mod dto;
mod handlers;
mod routes;

pub use dto::ChatRequest;
pub use handlers::ChatHandlers;
pub use routes::chat_routes;
