//! In-memory stores for demo runs and tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::conversation::Conversation;
use crate::domain::foundation::{ConversationId, DomainError, UserId};
use crate::domain::travel::Booking;
use crate::ports::{BookingRepository, ConversationStore, StoreError};

/// Conversation store backed by a process-local map.
///
/// Lifetime of stored conversations is the process lifetime.
#[derive(Debug, Default, Clone)]
pub struct InMemoryConversationStore {
    conversations: Arc<RwLock<HashMap<ConversationId, Conversation>>>,
}

impl InMemoryConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored conversations.
    pub async fn len(&self) -> usize {
        self.conversations.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.conversations.read().await.is_empty()
    }
}

#[async_trait]
impl ConversationStore for InMemoryConversationStore {
    async fn load(&self, id: &ConversationId) -> Result<Option<Conversation>, StoreError> {
        Ok(self.conversations.read().await.get(id).cloned())
    }

    async fn save(&self, conversation: &Conversation) -> Result<(), StoreError> {
        self.conversations
            .write()
            .await
            .insert(conversation.id, conversation.clone());
        Ok(())
    }
}

/// Booking repository backed by a process-local vector.
#[derive(Debug, Default, Clone)]
pub struct InMemoryBookingRepository {
    bookings: Arc<RwLock<Vec<Booking>>>,
}

impl InMemoryBookingRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn create(&self, booking: &Booking) -> Result<(), DomainError> {
        self.bookings.write().await.push(booking.clone());
        Ok(())
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Booking>, DomainError> {
        let bookings = self.bookings.read().await;
        let mut result: Vec<Booking> = bookings
            .iter()
            .filter(|b| &b.user_id == user_id)
            .cloned()
            .collect();

        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::travel::BookingType;
    use serde_json::json;

    #[tokio::test]
    async fn conversation_round_trips() {
        let store = InMemoryConversationStore::new();
        let mut conv = Conversation::new(ConversationId::new());
        conv.push_user("hello");

        store.save(&conv).await.unwrap();

        let loaded = store.load(&conv.id).await.unwrap().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.messages()[0].content, "hello");
    }

    #[tokio::test]
    async fn unknown_conversation_is_none() {
        let store = InMemoryConversationStore::new();
        assert!(store.load(&ConversationId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_overwrites_previous_state() {
        let store = InMemoryConversationStore::new();
        let mut conv = Conversation::new(ConversationId::new());
        conv.push_user("first");
        store.save(&conv).await.unwrap();

        conv.push_assistant("second");
        store.save(&conv).await.unwrap();

        let loaded = store.load(&conv.id).await.unwrap().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn bookings_filter_by_user_most_recent_first() {
        let repo = InMemoryBookingRepository::new();
        let alice = UserId::new("alice").unwrap();
        let bob = UserId::new("bob").unwrap();

        let first = Booking::confirmed(
            alice.clone(),
            BookingType::Flight,
            json!({}),
            100.0,
            "USD",
            "BOOK000001",
        );
        let second = Booking::confirmed(
            alice.clone(),
            BookingType::Flight,
            json!({}),
            200.0,
            "USD",
            "BOOK000002",
        );
        let other = Booking::confirmed(
            bob,
            BookingType::Hotel,
            json!({}),
            300.0,
            "USD",
            "BOOK000003",
        );

        repo.create(&first).await.unwrap();
        repo.create(&second).await.unwrap();
        repo.create(&other).await.unwrap();

        let bookings = repo.list_by_user(&alice).await.unwrap();
        assert_eq!(bookings.len(), 2);
        assert!(bookings[0].created_at >= bookings[1].created_at);
    }

    #[tokio::test]
    async fn user_with_no_bookings_gets_empty_list() {
        let repo = InMemoryBookingRepository::new();
        let bookings = repo
            .list_by_user(&UserId::new("nobody").unwrap())
            .await
            .unwrap();
        assert!(bookings.is_empty());
    }
}
