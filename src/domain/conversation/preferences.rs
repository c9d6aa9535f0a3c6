//! Keyword-derived travel preferences.
//!
//! Mirrors the intent heuristics of the dispatcher: plain case-insensitive
//! keyword matching, no model call. Abstractly this is a classification step
//! and could be swapped for a real classifier without changing callers.

use serde::{Deserialize, Serialize};

/// Coarse budget tier inferred from the user's wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    Low,
    Moderate,
    High,
}

impl BudgetTier {
    /// Lowercase name as it appears in prompts and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetTier::Low => "low",
            BudgetTier::Moderate => "moderate",
            BudgetTier::High => "high",
        }
    }

    /// Display marker used in prompts ("$", "$$", "$$$").
    pub fn price_range(&self) -> &'static str {
        match self {
            BudgetTier::Low => "$",
            BudgetTier::Moderate => "$$",
            BudgetTier::High => "$$$",
        }
    }
}

/// Preferences accumulated over a conversation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelPreferences {
    pub budget: Option<BudgetTier>,
    pub interests: Vec<String>,
}

impl TravelPreferences {
    /// Merges newer extractions into this set. A newly detected budget wins;
    /// interests are unioned, preserving first-seen order.
    pub fn merge(&mut self, other: TravelPreferences) {
        if other.budget.is_some() {
            self.budget = other.budget;
        }
        for interest in other.interests {
            if !self.interests.contains(&interest) {
                self.interests.push(interest);
            }
        }
    }

    /// True if nothing has been extracted yet.
    pub fn is_empty(&self) -> bool {
        self.budget.is_none() && self.interests.is_empty()
    }
}

const LOW_BUDGET_WORDS: &[&str] = &["cheap", "budget", "affordable", "inexpensive"];
const HIGH_BUDGET_WORDS: &[&str] = &["luxury", "expensive", "high-end", "upscale"];
const MODERATE_BUDGET_WORDS: &[&str] = &["moderate", "mid-range", "reasonable"];

const INTEREST_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "cultural",
        &["culture", "cultural", "temple", "museum", "history", "historical"],
    ),
    (
        "nature",
        &["nature", "hiking", "mountain", "beach", "outdoor", "scenic"],
    ),
    ("food", &["food", "restaurant", "cuisine", "dining", "eat"]),
    ("adventure", &["adventure", "exciting", "thrill", "active"]),
    ("relaxation", &["relax", "spa", "peaceful", "calm", "quiet"]),
    ("romantic", &["romantic", "honeymoon", "couple"]),
    ("photography", &["photo", "photography", "instagram"]),
];

/// Extracts budget and interest preferences from a single message.
pub fn extract_preferences(message: &str) -> TravelPreferences {
    let lower = message.to_lowercase();
    let mut prefs = TravelPreferences::default();

    if LOW_BUDGET_WORDS.iter().any(|w| lower.contains(w)) {
        prefs.budget = Some(BudgetTier::Low);
    } else if HIGH_BUDGET_WORDS.iter().any(|w| lower.contains(w)) {
        prefs.budget = Some(BudgetTier::High);
    } else if MODERATE_BUDGET_WORDS.iter().any(|w| lower.contains(w)) {
        prefs.budget = Some(BudgetTier::Moderate);
    }

    for (interest, keywords) in INTEREST_KEYWORDS {
        if keywords.iter().any(|k| lower.contains(k)) {
            prefs.interests.push((*interest).to_string());
        }
    }

    prefs
}
