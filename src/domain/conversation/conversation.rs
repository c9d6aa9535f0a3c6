//! Conversation aggregate: an append-only, arrival-ordered turn sequence
//! plus the preferences extracted from it so far.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::ConversationId;

use super::{Message, MessageRole, TravelPreferences};

/// Number of trailing turns forwarded to the AI provider as context.
pub const HISTORY_WINDOW: usize = 4;

/// A conversation keyed by an opaque identifier.
///
/// Created on the first message from a given identifier and appended to on
/// every subsequent turn. There is no explicit destruction; lifetime is
/// bounded by the backing store (process memory or cache TTL).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub id: ConversationId,
    messages: Vec<Message>,
    pub preferences: TravelPreferences,
    pub created_at: DateTime<Utc>,
}

impl Conversation {
    /// Creates an empty conversation.
    pub fn new(id: ConversationId) -> Self {
        Self {
            id,
            messages: Vec::new(),
            preferences: TravelPreferences::default(),
            created_at: Utc::now(),
        }
    }

    /// Appends a user turn.
    pub fn push_user(&mut self, content: impl Into<String>) {
        self.messages.push(Message::user(content));
    }

    /// Appends an assistant turn.
    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.messages.push(Message::assistant(content));
    }

    /// Merges newly extracted preferences into the accumulated set.
    pub fn merge_preferences(&mut self, new: TravelPreferences) {
        self.preferences.merge(new);
    }

    /// All turns, in arrival order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The trailing window of turns used as AI context.
    pub fn history_window(&self) -> &[Message] {
        let len = self.messages.len();
        &self.messages[len.saturating_sub(HISTORY_WINDOW)..]
    }

    /// Number of turns so far.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// True if no turns have been recorded.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Count of user turns (used to verify the append-exactly-once contract).
    pub fn user_turn_count(&self) -> usize {
        self.messages
            .iter()
            .filter(|m| m.role == MessageRole::User)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_conversation_is_empty() {
        let conv = Conversation::new(ConversationId::new());
        assert!(conv.is_empty());
        assert_eq!(conv.len(), 0);
    }

    #[test]
    fn turns_are_appended_in_arrival_order() {
        let mut conv = Conversation::new(ConversationId::new());
        conv.push_user("first");
        conv.push_assistant("second");
        conv.push_user("third");

        let contents: Vec<&str> = conv.messages().iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["first", "second", "third"]);
    }

    #[test]
    fn history_window_returns_trailing_turns() {
        let mut conv = Conversation::new(ConversationId::new());
        for i in 0..6 {
            conv.push_user(format!("turn {}", i));
        }

        let window = conv.history_window();
        assert_eq!(window.len(), HISTORY_WINDOW);
        assert_eq!(window[0].content, "turn 2");
        assert_eq!(window[3].content, "turn 5");
    }

    #[test]
    fn history_window_handles_short_conversations() {
        let mut conv = Conversation::new(ConversationId::new());
        conv.push_user("only one");

        assert_eq!(conv.history_window().len(), 1);
    }

    #[test]
    fn user_turn_count_ignores_assistant_turns() {
        let mut conv = Conversation::new(ConversationId::new());
        conv.push_user("a");
        conv.push_assistant("b");
        conv.push_user("c");

        assert_eq!(conv.user_turn_count(), 2);
    }
}
