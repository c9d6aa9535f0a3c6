//! Conversation domain: turn history, extracted preferences, and prompt assembly.

mod conversation;
mod message;
mod preferences;
mod prompt;

pub use conversation::Conversation;
pub use message::{Message, MessageRole};
pub use preferences::{extract_preferences, BudgetTier, TravelPreferences};
pub use prompt::{build_travel_prompt, fallback_reply, SYSTEM_PROMPT};
