//! Conversation and booking persistence adapters.

mod in_memory;
mod postgres_bookings;
mod redis_conversations;

pub use in_memory::{InMemoryBookingRepository, InMemoryConversationStore};
pub use postgres_bookings::PostgresBookingRepository;
pub use redis_conversations::RedisConversationStore;
