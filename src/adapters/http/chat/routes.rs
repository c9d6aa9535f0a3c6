//! HTTP routes for the chat endpoint.

use axum::{routing::post, Router};

use super::handlers::{chat, ChatHandlers};

/// Creates the chat router.
pub fn chat_routes(handlers: ChatHandlers) -> Router {
    Router::new()
        .route("/api/chat", post(chat))
        .with_state(handlers)
}
