//! Conversation store port.
//!
//! Key-value persistence for Conversation aggregates, keyed by conversation
//! identifier. Backed by process memory in the demo and by a cache with TTL
//! when one is configured.

use async_trait::async_trait;

use crate::domain::conversation::Conversation;
use crate::domain::foundation::ConversationId;

/// Port for conversation persistence.
///
/// `save` overwrites the whole aggregate; callers load, mutate, and save.
/// There is no delete: lifetime is bounded by the backing store.
#[async_trait]
pub trait ConversationStore: Send + Sync {
    /// Loads a conversation. Returns `None` if the identifier is unknown.
    async fn load(&self, id: &ConversationId) -> Result<Option<Conversation>, StoreError>;

    /// Saves a conversation, replacing any previous state for its id.
    async fn save(&self, conversation: &Conversation) -> Result<(), StoreError>;
}

/// Conversation store errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Backing store failure (connection, command, timeout).
    #[error("store backend error: {0}")]
    Backend(String),

    /// Stored payload could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl StoreError {
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend(message.into())
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }
}
