//! HTTP handlers for the chat endpoint.

use std::convert::Infallible;
use std::sync::Arc;

use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use futures::StreamExt;
use tracing::error;

use crate::adapters::http::ErrorResponse;
use crate::application::handlers::{StreamChatCommand, StreamChatError, StreamChatHandler, StreamChatResult};
use crate::domain::foundation::ConversationId;

use super::dto::ChatRequest;

/// Response header carrying the conversation id (minted or echoed).
pub const CONVERSATION_ID_HEADER: &str = "x-conversation-id";
/// Response header flagging booking intent for the UI.
pub const BOOKING_INTENT_HEADER: &str = "x-booking-intent";

#[derive(Clone)]
pub struct ChatHandlers {
    stream_chat: Arc<StreamChatHandler>,
}

impl ChatHandlers {
    pub fn new(stream_chat: Arc<StreamChatHandler>) -> Self {
        Self { stream_chat }
    }
}

/// POST /api/chat - Stream one assistant reply as plain text
pub async fn chat(State(handlers): State<ChatHandlers>, Json(req): Json<ChatRequest>) -> Response {
    let conversation_id = match req.conversation_id {
        Some(raw) => match raw.parse::<ConversationId>() {
            Ok(id) => id,
            Err(_) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse::bad_request("Invalid conversation ID")),
                )
                    .into_response()
            }
        },
        None => ConversationId::new(),
    };

    let cmd = StreamChatCommand {
        conversation_id,
        message: req.message,
    };

    match handlers.stream_chat.handle(cmd).await {
        Ok(result) => stream_response(conversation_id, result),
        Err(e) => handle_chat_error(e),
    }
}

fn stream_response(conversation_id: ConversationId, result: StreamChatResult) -> Response {
    let booking_intent = if result.booking_intent { "true" } else { "false" };
    let body = Body::from_stream(
        result
            .stream
            .map(|fragment| Ok::<_, Infallible>(Bytes::from(fragment))),
    );

    match Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/plain; charset=utf-8")
        .header(CONVERSATION_ID_HEADER, conversation_id.to_string())
        .header(BOOKING_INTENT_HEADER, booking_intent)
        .body(body)
    {
        Ok(response) => response,
        Err(e) => {
            error!(error = %e, "failed to build chat response");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("Failed to build response")),
            )
                .into_response()
        }
    }
}

fn handle_chat_error(error: StreamChatError) -> Response {
    match error {
        StreamChatError::EmptyMessage => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Message cannot be empty")),
        )
            .into_response(),
        StreamChatError::Store(msg) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::internal(msg)),
        )
            .into_response(),
    }
}
