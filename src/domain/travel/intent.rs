//! Booking-intent detection.
//!
//! A message flagged as booking intent is still answered by the chat flow;
//! the flag only tells the caller to surface the flight-search form.

/// Phrases that signal the user wants to search or reserve travel.
/// Matched as case-insensitive substrings.
const BOOKING_PHRASES: &[&str] = &[
    "book a flight",
    "book flight",
    "book a trip",
    "fly to",
    "flight to",
    "flights to",
    "search flights",
    "find flights",
    "find a flight",
    "plane ticket",
    "airfare",
    "reserve a flight",
];

/// Returns true if the message matches any booking phrase.
///
/// No error path: absence of a match is the default outcome, not a failure.
pub fn detect_booking_intent(message: &str) -> bool {
    let lower = message.to_lowercase();
    BOOKING_PHRASES.iter().any(|phrase| lower.contains(phrase))
}
