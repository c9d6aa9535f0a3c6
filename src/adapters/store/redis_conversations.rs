//! Redis-backed conversation store for multi-server deployments.
//!
//! Each conversation is one JSON value under `conversation:{id}`, written
//! with SET EX so idle conversations expire instead of accumulating.

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;

use crate::domain::conversation::Conversation;
use crate::domain::foundation::ConversationId;
use crate::ports::{ConversationStore, StoreError};

/// Conversation store over a shared Redis connection.
#[derive(Clone)]
pub struct RedisConversationStore {
    conn: MultiplexedConnection,
    ttl_secs: u64,
}

impl RedisConversationStore {
    /// Creates a store writing entries with the given TTL.
    pub fn new(conn: MultiplexedConnection, ttl_secs: u64) -> Self {
        Self { conn, ttl_secs }
    }

    fn key(id: &ConversationId) -> String {
        format!("conversation:{}", id)
    }
}

#[async_trait]
impl ConversationStore for RedisConversationStore {
    async fn load(&self, id: &ConversationId) -> Result<Option<Conversation>, StoreError> {
        let mut conn = self.conn.clone();

        let payload: Option<String> = conn
            .get(Self::key(id))
            .await
            .map_err(|e: redis::RedisError| StoreError::backend(e.to_string()))?;

        match payload {
            Some(json) => {
                let conversation = serde_json::from_str(&json)
                    .map_err(|e| StoreError::serialization(e.to_string()))?;
                Ok(Some(conversation))
            }
            None => Ok(None),
        }
    }

    async fn save(&self, conversation: &Conversation) -> Result<(), StoreError> {
        let payload = serde_json::to_string(conversation)
            .map_err(|e| StoreError::serialization(e.to_string()))?;

        let mut conn = self.conn.clone();
        let key = Self::key(&conversation.id);

        // ttl of zero means no expiry; SET EX rejects it.
        if self.ttl_secs == 0 {
            conn.set::<_, _, ()>(key, payload)
                .await
                .map_err(|e: redis::RedisError| StoreError::backend(e.to_string()))?;
        } else {
            conn.set_ex::<_, _, ()>(key, payload, self.ttl_secs)
                .await
                .map_err(|e: redis::RedisError| StoreError::backend(e.to_string()))?;
        }

        Ok(())
    }
}

impl std::fmt::Debug for RedisConversationStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisConversationStore")
            .field("ttl_secs", &self.ttl_secs)
            .finish_non_exhaustive()
    }
}
