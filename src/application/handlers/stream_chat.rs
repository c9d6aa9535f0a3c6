//! Streaming chat handler.
//!
//! One turn of the conversation loop: classify booking intent, fold new
//! preferences into the conversation, retrieve catalog context, and relay
//! the provider's chunks to the caller as they arrive. The user turn is
//! appended exactly once per accepted message and is never rolled back;
//! the assistant turn is appended after the stream finishes.
//!
//! Turns on one conversation are serialized: the store works in whole
//! aggregates (load, mutate, save), so a second message must not load
//! until the previous turn's final save has landed.

use std::collections::HashMap;
use std::pin::Pin;
use std::sync::Arc;

use futures::{Stream, StreamExt};
use thiserror::Error;
use tokio::sync::{mpsc, Mutex, OwnedMutexGuard};
use tracing::{error, warn};

use crate::domain::conversation::{
    build_travel_prompt, extract_preferences, fallback_reply, Conversation,
};
use crate::domain::foundation::ConversationId;
use crate::domain::travel::{detect_booking_intent, TravelRecord};
use crate::ports::{AIProvider, CompletionRequest, ConversationStore, TravelSearch};

/// Stream of response text fragments, in emission order.
pub type TextStream = Pin<Box<dyn Stream<Item = String> + Send>>;

/// Command to handle one chat message.
#[derive(Debug, Clone)]
pub struct StreamChatCommand {
    /// Conversation to append to (created on first use of an id).
    pub conversation_id: ConversationId,
    /// The user's message.
    pub message: String,
}

/// Result of handling a chat message.
pub struct StreamChatResult {
    /// True if the message reads like a travel-booking request. Only a UI
    /// hint; the answer itself is unaffected.
    pub booking_intent: bool,
    /// The assistant's reply, incrementally produced.
    pub stream: TextStream,
}

/// Errors that reject the message before any streaming starts.
#[derive(Debug, Clone, Error)]
pub enum StreamChatError {
    #[error("Message cannot be empty")]
    EmptyMessage,

    #[error("Conversation store error: {0}")]
    Store(String),
}

/// Handler for streamed chat turns.
pub struct StreamChatHandler {
    provider: Arc<dyn AIProvider>,
    search: Arc<dyn TravelSearch>,
    store: Arc<dyn ConversationStore>,
    search_size: usize,
    max_output_tokens: u32,
    /// One lock per conversation, held from load until the relay task's
    /// final save. Entries without waiters are pruned on access.
    turn_locks: Mutex<HashMap<ConversationId, Arc<Mutex<()>>>>,
}

impl StreamChatHandler {
    pub fn new(
        provider: Arc<dyn AIProvider>,
        search: Arc<dyn TravelSearch>,
        store: Arc<dyn ConversationStore>,
        search_size: usize,
        max_output_tokens: u32,
    ) -> Self {
        Self {
            provider,
            search,
            store,
            search_size,
            max_output_tokens,
            turn_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Acquires this conversation's turn lock. The owned guard can travel
    /// with the relay task and is released after the final save.
    async fn lock_turn(&self, id: ConversationId) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.turn_locks.lock().await;
            locks.retain(|_, lock| Arc::strong_count(lock) > 1);
            Arc::clone(locks.entry(id).or_default())
        };
        lock.lock_owned().await
    }

    pub async fn handle(&self, cmd: StreamChatCommand) -> Result<StreamChatResult, StreamChatError> {
        let message = cmd.message.trim().to_string();
        if message.is_empty() {
            return Err(StreamChatError::EmptyMessage);
        }

        let booking_intent = detect_booking_intent(&message);

        // Overlapping turns on one conversation would clobber each other at
        // save time; hold the turn lock across load, save, and the relay
        // task's final save.
        let turn_guard = self.lock_turn(cmd.conversation_id).await;

        let mut conversation = self
            .store
            .load(&cmd.conversation_id)
            .await
            .map_err(|e| StreamChatError::Store(e.to_string()))?
            .unwrap_or_else(|| Conversation::new(cmd.conversation_id));

        conversation.merge_preferences(extract_preferences(&message));

        // Retrieval failures degrade to an ungrounded answer, never a 5xx.
        let search_results = match self.search.search(&message, self.search_size).await {
            Ok(results) => results,
            Err(e) => {
                warn!(error = %e, "catalog search failed; continuing without context");
                Vec::new()
            }
        };

        let prompt = build_travel_prompt(
            &message,
            &search_results,
            conversation.history_window(),
            &conversation.preferences,
        );

        // The user turn lands before the AI call and stays even if it fails.
        conversation.push_user(&message);
        self.store
            .save(&conversation)
            .await
            .map_err(|e| StreamChatError::Store(e.to_string()))?;

        let request = CompletionRequest::new(prompt)
            .with_max_output_tokens(self.max_output_tokens);

        let stream = self
            .relay_stream(conversation, request, search_results, turn_guard)
            .await;

        Ok(StreamChatResult {
            booking_intent,
            stream,
        })
    }

    /// Drives the provider stream on a background task, forwarding fragments
    /// to the caller and appending the assistant turn once the reply is
    /// fully assembled. Provider failure at any point degrades to a single
    /// apology fragment listing the retrieved options. The turn guard is
    /// released only after the assistant turn is persisted.
    async fn relay_stream(
        &self,
        mut conversation: Conversation,
        request: CompletionRequest,
        search_results: Vec<TravelRecord>,
        turn_guard: OwnedMutexGuard<()>,
    ) -> TextStream {
        let (tx, rx) = mpsc::channel::<String>(32);
        let provider = Arc::clone(&self.provider);
        let store = Arc::clone(&self.store);

        tokio::spawn(async move {
            let mut full_response = String::new();

            match provider.stream_complete(request).await {
                Ok(mut chunks) => {
                    while let Some(chunk_result) = chunks.next().await {
                        match chunk_result {
                            Ok(chunk) => {
                                if !chunk.delta.is_empty() {
                                    full_response.push_str(&chunk.delta);
                                    if tx.send(chunk.delta).await.is_err() {
                                        // Caller went away; still record the turn.
                                        break;
                                    }
                                }
                            }
                            Err(e) => {
                                error!(error = %e, "AI stream failed mid-response");
                                let apology = fallback_reply(&search_results);
                                full_response.push_str(&apology);
                                let _ = tx.send(apology).await;
                                break;
                            }
                        }
                    }
                }
                Err(e) => {
                    error!(error = %e, "AI provider rejected the request");
                    let apology = fallback_reply(&search_results);
                    full_response.push_str(&apology);
                    let _ = tx.send(apology).await;
                }
            }

            conversation.push_assistant(full_response);
            if let Err(e) = store.save(&conversation).await {
                error!(error = %e, "failed to persist assistant turn");
            }
            drop(turn_guard);
        });

        Box::pin(futures::stream::unfold(rx, |mut rx| async move {
            rx.recv().await.map(|fragment| (fragment, rx))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockAIProvider, MockError};
    use crate::adapters::search::StaticCatalogSearch;
    use crate::adapters::store::InMemoryConversationStore;
    use crate::ports::ConversationStore as _;

    fn handler_with(
        provider: MockAIProvider,
        store: InMemoryConversationStore,
    ) -> StreamChatHandler {
        StreamChatHandler::new(
            Arc::new(provider),
            Arc::new(StaticCatalogSearch::new()),
            Arc::new(store),
            10,
            2048,
        )
    }

    async fn collect(stream: TextStream) -> String {
        stream.collect::<Vec<String>>().await.concat()
    }

    #[tokio::test]
    async fn relays_provider_chunks_in_order() {
        let store = InMemoryConversationStore::new();
        let handler = handler_with(
            MockAIProvider::new().with_response("Kyoto is lovely in autumn"),
            store,
        );

        let result = handler
            .handle(StreamChatCommand {
                conversation_id: ConversationId::new(),
                message: "What should I see in Kyoto?".to_string(),
            })
            .await
            .unwrap();

        assert!(!result.booking_intent);
        assert_eq!(collect(result.stream).await, "Kyoto is lovely in autumn");
    }

    #[tokio::test]
    async fn booking_phrases_set_the_intent_flag() {
        let store = InMemoryConversationStore::new();
        let handler = handler_with(MockAIProvider::new().with_response("Sure!"), store);

        let result = handler
            .handle(StreamChatCommand {
                conversation_id: ConversationId::new(),
                message: "I want to fly to Tokyo".to_string(),
            })
            .await
            .unwrap();

        assert!(result.booking_intent);
    }

    #[tokio::test]
    async fn empty_message_is_rejected() {
        let store = InMemoryConversationStore::new();
        let handler = handler_with(MockAIProvider::new(), store);

        let result = handler
            .handle(StreamChatCommand {
                conversation_id: ConversationId::new(),
                message: "   ".to_string(),
            })
            .await;

        assert!(matches!(result, Err(StreamChatError::EmptyMessage)));
    }

    #[tokio::test]
    async fn user_turn_is_appended_exactly_once() {
        let store = InMemoryConversationStore::new();
        let id = ConversationId::new();
        let handler = handler_with(MockAIProvider::new().with_response("reply"), store.clone());

        let result = handler
            .handle(StreamChatCommand {
                conversation_id: id,
                message: "hello there".to_string(),
            })
            .await
            .unwrap();
        collect(result.stream).await;

        // Let the background task persist the assistant turn.
        tokio::task::yield_now().await;
        let conversation = store.load(&id).await.unwrap().unwrap();
        assert_eq!(conversation.user_turn_count(), 1);
    }

    #[tokio::test]
    async fn assistant_turn_recorded_after_stream_completes() {
        let store = InMemoryConversationStore::new();
        let id = ConversationId::new();
        let handler = handler_with(
            MockAIProvider::new().with_response("short answer"),
            store.clone(),
        );

        let result = handler
            .handle(StreamChatCommand {
                conversation_id: id,
                message: "a question".to_string(),
            })
            .await
            .unwrap();
        collect(result.stream).await;

        // The save happens on the spawned task right after the last send.
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
        let conversation = store.load(&id).await.unwrap().unwrap();
        assert_eq!(conversation.len(), 2);
        assert_eq!(conversation.messages()[1].content, "short answer");
    }

    #[tokio::test]
    async fn provider_failure_yields_single_apology_and_keeps_user_turn() {
        let store = InMemoryConversationStore::new();
        let id = ConversationId::new();
        let handler = handler_with(
            MockAIProvider::new().with_error(MockError::Unavailable {
                message: "down".to_string(),
            }),
            store.clone(),
        );

        let result = handler
            .handle(StreamChatCommand {
                conversation_id: id,
                message: "tell me about food in Tokyo".to_string(),
            })
            .await
            .unwrap();

        let reply = collect(result.stream).await;
        assert!(reply.contains("I encountered an error"));

        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
        let conversation = store.load(&id).await.unwrap().unwrap();
        assert_eq!(conversation.user_turn_count(), 1);
    }

    #[tokio::test]
    async fn history_accumulates_across_turns() {
        let store = InMemoryConversationStore::new();
        let id = ConversationId::new();
        let handler = handler_with(
            MockAIProvider::new()
                .with_response("first reply")
                .with_response("second reply"),
            store.clone(),
        );

        for message in ["first question", "second question"] {
            let result = handler
                .handle(StreamChatCommand {
                    conversation_id: id,
                    message: message.to_string(),
                })
                .await
                .unwrap();
            collect(result.stream).await;
            for _ in 0..10 {
                tokio::task::yield_now().await;
            }
        }

        let conversation = store.load(&id).await.unwrap().unwrap();
        assert_eq!(conversation.len(), 4);
        assert_eq!(conversation.user_turn_count(), 2);
    }

    #[tokio::test]
    async fn overlapping_turns_on_one_conversation_all_survive() {
        let store = InMemoryConversationStore::new();
        let id = ConversationId::new();
        // More chunks than the relay channel holds, so the first turn's
        // background task is still parked when the second message arrives.
        let long_reply = "word ".repeat(60).trim_end().to_string();
        let handler = Arc::new(handler_with(
            MockAIProvider::new()
                .with_response(long_reply)
                .with_response("second reply"),
            store.clone(),
        ));

        let first = handler
            .handle(StreamChatCommand {
                conversation_id: id,
                message: "first question".to_string(),
            })
            .await
            .unwrap();

        let second = {
            let handler = Arc::clone(&handler);
            tokio::spawn(async move {
                let result = handler
                    .handle(StreamChatCommand {
                        conversation_id: id,
                        message: "second question".to_string(),
                    })
                    .await
                    .unwrap();
                collect(result.stream).await
            })
        };

        collect(first.stream).await;
        assert_eq!(second.await.unwrap(), "second reply");

        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
        let conversation = store.load(&id).await.unwrap().unwrap();
        assert_eq!(conversation.user_turn_count(), 2);
        assert_eq!(conversation.len(), 4);
        assert_eq!(conversation.messages()[2].content, "second question");
    }

    #[tokio::test]
    async fn preferences_accumulate_from_messages() {
        let store = InMemoryConversationStore::new();
        let id = ConversationId::new();
        let handler = handler_with(MockAIProvider::new().with_response("ok"), store.clone());

        let result = handler
            .handle(StreamChatCommand {
                conversation_id: id,
                message: "looking for cheap food tours".to_string(),
            })
            .await
            .unwrap();
        collect(result.stream).await;
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }

        let conversation = store.load(&id).await.unwrap().unwrap();
        assert!(conversation.preferences.budget.is_some());
        assert!(conversation
            .preferences
            .interests
            .contains(&"food".to_string()));
    }
}
