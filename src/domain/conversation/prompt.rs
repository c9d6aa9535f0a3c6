//! Prompt assembly for the travel assistant.
//!
//! The model sees a single flattened prompt: persona, recent history,
//! accumulated preferences, retrieved catalog context, then the question.

use std::fmt::Write;

use crate::domain::travel::TravelRecord;

use super::{Message, TravelPreferences};

/// Persona and response guidelines sent ahead of every request.
pub const SYSTEM_PROMPT: &str = "You are an enthusiastic and knowledgeable travel planning assistant. Your goal is to help users plan amazing trips by providing personalized recommendations based on their preferences and interests.

Key guidelines:
- Be conversational, friendly, and helpful
- Ask clarifying questions when user preferences are unclear (budget, travel dates, interests, group size)
- Use the provided travel data to make specific recommendations with names, locations, and details
- Explain WHY you're recommending something based on user preferences
- Include practical information like price ranges, ratings, and best times to visit
- If you don't have information in the search results, be honest and suggest alternatives
- Format responses clearly with recommendations organized by type (destinations, activities, hotels, restaurants)";

/// Assembles the full grounded prompt for one chat turn.
///
/// `history` is the trailing conversation window, already truncated by the
/// caller. An empty `search_results` slice still produces the context header
/// so the model knows retrieval came back empty.
pub fn build_travel_prompt(
    user_message: &str,
    search_results: &[TravelRecord],
    history: &[Message],
    preferences: &TravelPreferences,
) -> String {
    let mut prompt = String::with_capacity(2048);
    prompt.push_str(SYSTEM_PROMPT);
    prompt.push_str("\n\n");

    if !history.is_empty() {
        prompt.push_str("CONVERSATION HISTORY:\n");
        for msg in history {
            let role = match msg.role {
                super::MessageRole::User => "USER",
                super::MessageRole::Assistant => "ASSISTANT",
            };
            let _ = writeln!(prompt, "{}: {}", role, msg.content);
        }
        prompt.push('\n');
    }

    if !preferences.is_empty() {
        prompt.push_str("USER PREFERENCES:\n");
        if let Some(budget) = preferences.budget {
            let _ = writeln!(
                prompt,
                "- Budget: {} ({})",
                budget.as_str(),
                budget.price_range()
            );
        }
        if !preferences.interests.is_empty() {
            let _ = writeln!(prompt, "- Interests: {}", preferences.interests.join(", "));
        }
        prompt.push('\n');
    }

    prompt.push_str("AVAILABLE TRAVEL OPTIONS:\n\n");
    for (i, record) in search_results.iter().enumerate() {
        let _ = writeln!(
            prompt,
            "{}. {} ({})",
            i + 1,
            record.name,
            record.record_type.to_uppercase()
        );
        let _ = writeln!(prompt, "   Location: {}, {}", record.city, record.country);
        let _ = writeln!(prompt, "   Description: {}", record.description);
        let _ = writeln!(
            prompt,
            "   Price: {} | Rating: {}/5",
            record.price_range.as_deref().unwrap_or("N/A"),
            record
                .rating
                .map(|r| r.to_string())
                .unwrap_or_else(|| "N/A".to_string())
        );
        if !record.categories.is_empty() {
            let _ = writeln!(prompt, "   Categories: {}", record.categories.join(", "));
        }
        if !record.highlights.is_empty() {
            let _ = writeln!(prompt, "   Highlights: {}", record.highlights.join(", "));
        }
        prompt.push('\n');
    }

    let _ = write!(
        prompt,
        "\nUSER QUESTION: {}\n\nProvide a helpful, conversational response with specific \
         recommendations from the available options. Explain why each recommendation matches \
         the user's needs.",
        user_message
    );

    prompt
}

/// Degraded reply used when the AI provider fails mid-request: acknowledges
/// the error and lists whatever retrieval found, truncated per record.
pub fn fallback_reply(search_results: &[TravelRecord]) -> String {
    let mut reply =
        String::from("I encountered an error, but here are the search results I found:\n\n");
    for record in search_results.iter().take(5) {
        let summary: String = record.description.chars().take(100).collect();
        let _ = writeln!(reply, "\u{2022} {} - {}...", record.name, summary);
    }
    reply
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::conversation::{extract_preferences, Message};

    fn sample_record() -> TravelRecord {
        TravelRecord {
            name: "Fushimi Inari Shrine".to_string(),
            record_type: "activity".to_string(),
            city: "Kyoto".to_string(),
            country: "Japan".to_string(),
            description: "Thousands of vermilion torii gates winding up a forested mountain"
                .to_string(),
            price_range: Some("$".to_string()),
            rating: Some(4.8),
            categories: vec!["cultural".to_string()],
            highlights: vec!["torii gates".to_string(), "hiking trails".to_string()],
        }
    }

    #[test]
    fn prompt_contains_all_sections() {
        let history = vec![
            Message::user("I'd like to visit Japan"),
            Message::assistant("Great choice! When are you planning to travel?"),
        ];
        let prefs = extract_preferences("something cheap and cultural");

        let prompt = build_travel_prompt(
            "What should I see in Kyoto?",
            &[sample_record()],
            &history,
            &prefs,
        );

        assert!(prompt.starts_with(SYSTEM_PROMPT));
        assert!(prompt.contains("CONVERSATION HISTORY:"));
        assert!(prompt.contains("USER: I'd like to visit Japan"));
        assert!(prompt.contains("USER PREFERENCES:"));
        assert!(prompt.contains("- Budget: low ($)"));
        assert!(prompt.contains("- Interests: cultural"));
        assert!(prompt.contains("1. Fushimi Inari Shrine (ACTIVITY)"));
        assert!(prompt.contains("Location: Kyoto, Japan"));
        assert!(prompt.contains("USER QUESTION: What should I see in Kyoto?"));
    }

    #[test]
    fn prompt_omits_empty_sections() {
        let prompt = build_travel_prompt(
            "Hello",
            &[],
            &[],
            &TravelPreferences::default(),
        );

        assert!(!prompt.contains("CONVERSATION HISTORY:"));
        assert!(!prompt.contains("USER PREFERENCES:"));
        // Context header stays even when retrieval found nothing.
        assert!(prompt.contains("AVAILABLE TRAVEL OPTIONS:"));
    }

    #[test]
    fn fallback_lists_up_to_five_results() {
        let records: Vec<TravelRecord> = (0..7)
            .map(|i| {
                let mut r = sample_record();
                r.name = format!("Option {}", i);
                r
            })
            .collect();

        let reply = fallback_reply(&records);
        assert!(reply.contains("Option 0"));
        assert!(reply.contains("Option 4"));
        assert!(!reply.contains("Option 5"));
    }

    #[test]
    fn fallback_truncates_long_descriptions() {
        let mut record = sample_record();
        record.description = "x".repeat(300);

        let reply = fallback_reply(&[record]);
        assert!(reply.contains(&format!("{}...", "x".repeat(100))));
        assert!(!reply.contains(&"x".repeat(101)));
    }
}
