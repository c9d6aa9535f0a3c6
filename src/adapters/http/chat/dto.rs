//! HTTP DTOs for the chat endpoint.

use serde::Deserialize;

/// One user chat turn. Omitting `conversation_id` starts a new
/// conversation; the minted id is echoed in the `x-conversation-id`
/// response header.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub conversation_id: Option<String>,
}
