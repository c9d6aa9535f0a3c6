//! Ports: async trait seams between the application core and the outside
//! world (AI provider, search index, stores, payment gateway).

pub mod ai_provider;
pub mod booking_repository;
pub mod conversation_store;
pub mod flight_inventory;
pub mod payment_gateway;
pub mod travel_search;

pub use ai_provider::{
    AIError, AIProvider, ChunkStream, CompletionRequest, FinishReason, StreamChunk,
};
pub use booking_repository::BookingRepository;
pub use conversation_store::{ConversationStore, StoreError};
pub use flight_inventory::{FlightInventory, InventoryError};
pub use payment_gateway::{PaymentError, PaymentGateway};
pub use travel_search::{SearchError, TravelSearch};
