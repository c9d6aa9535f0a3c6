//! In-process travel catalog used when no search index is configured.
//!
//! A small curated set of records scored by naive keyword overlap. Good
//! enough to keep the assistant grounded in demo runs.

use async_trait::async_trait;
use once_cell::sync::Lazy;

use crate::domain::travel::TravelRecord;
use crate::ports::{SearchError, TravelSearch};

/// Keyword-scored search over a built-in catalog.
pub struct StaticCatalogSearch {
    records: Vec<TravelRecord>,
}

impl Default for StaticCatalogSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl StaticCatalogSearch {
    /// Creates the search with the built-in catalog.
    pub fn new() -> Self {
        Self {
            records: BUILTIN_CATALOG.clone(),
        }
    }

    /// Creates the search over a caller-supplied catalog.
    pub fn with_records(records: Vec<TravelRecord>) -> Self {
        Self { records }
    }

    /// Counts query terms appearing in the record's text fields.
    fn score(record: &TravelRecord, terms: &[String]) -> usize {
        let haystack = format!(
            "{} {} {} {} {} {}",
            record.name,
            record.record_type,
            record.city,
            record.country,
            record.description,
            record.categories.join(" ")
        )
        .to_lowercase();

        terms.iter().filter(|t| haystack.contains(t.as_str())).count()
    }
}

#[async_trait]
impl TravelSearch for StaticCatalogSearch {
    async fn search(&self, query: &str, size: usize) -> Result<Vec<TravelRecord>, SearchError> {
        let terms: Vec<String> = query
            .to_lowercase()
            .split_whitespace()
            .filter(|t| t.len() > 2)
            .map(str::to_string)
            .collect();

        let mut scored: Vec<(usize, &TravelRecord)> = self
            .records
            .iter()
            .map(|r| (Self::score(r, &terms), r))
            .filter(|(score, _)| *score > 0)
            .collect();

        scored.sort_by(|a, b| b.0.cmp(&a.0));

        Ok(scored
            .into_iter()
            .take(size)
            .map(|(_, r)| r.clone())
            .collect())
    }
}

fn record(
    name: &str,
    record_type: &str,
    city: &str,
    country: &str,
    description: &str,
    price_range: &str,
    rating: f32,
    categories: &[&str],
    highlights: &[&str],
) -> TravelRecord {
    TravelRecord {
        name: name.to_string(),
        record_type: record_type.to_string(),
        city: city.to_string(),
        country: country.to_string(),
        description: description.to_string(),
        price_range: Some(price_range.to_string()),
        rating: Some(rating),
        categories: categories.iter().map(|s| s.to_string()).collect(),
        highlights: highlights.iter().map(|s| s.to_string()).collect(),
    }
}

static BUILTIN_CATALOG: Lazy<Vec<TravelRecord>> = Lazy::new(|| {
    vec![
        record(
            "Fushimi Inari Shrine",
            "activity",
            "Kyoto",
            "Japan",
            "Thousands of vermilion torii gates winding up a forested mountainside",
            "$",
            4.8,
            &["cultural", "nature"],
            &["torii gates", "hiking trails", "sunrise visits"],
        ),
        record(
            "Shibuya Crossing",
            "destination",
            "Tokyo",
            "Japan",
            "The world's busiest pedestrian crossing, surrounded by neon and department stores",
            "$",
            4.5,
            &["cultural", "photography"],
            &["neon lights", "people watching"],
        ),
        record(
            "Tsukiji Outer Market",
            "restaurant",
            "Tokyo",
            "Japan",
            "Street food stalls and fresh seafood counters in the old fish market district",
            "$$",
            4.6,
            &["food"],
            &["sushi breakfast", "knife shops"],
        ),
        record(
            "Park Hyatt Tokyo",
            "hotel",
            "Tokyo",
            "Japan",
            "Quiet luxury hotel above Shinjuku with skyline views and a famous bar",
            "$$$",
            4.7,
            &["relaxation", "romantic"],
            &["skyline views", "spa"],
        ),
        record(
            "Le Marais Food Walk",
            "activity",
            "Paris",
            "France",
            "Guided tasting walk through bakeries, fromageries, and falafel stands",
            "$$",
            4.6,
            &["food", "cultural"],
            &["cheese tasting", "historic streets"],
        ),
        record(
            "Louvre Museum",
            "destination",
            "Paris",
            "France",
            "The world's largest art museum, home to the Mona Lisa and ancient antiquities",
            "$$",
            4.7,
            &["cultural"],
            &["Mona Lisa", "Egyptian wing"],
        ),
        record(
            "Uluwatu Cliff Temple",
            "destination",
            "Bali",
            "Indonesia",
            "Sea temple perched on a limestone cliff with sunset kecak dance performances",
            "$",
            4.6,
            &["cultural", "nature", "photography"],
            &["sunset views", "kecak dance"],
        ),
        record(
            "Ubud Jungle Spa Retreat",
            "hotel",
            "Bali",
            "Indonesia",
            "Riverside villas with open-air spa pavilions in the rainforest",
            "$$",
            4.8,
            &["relaxation", "romantic", "nature"],
            &["jungle views", "massage pavilions"],
        ),
        record(
            "Torres del Paine W Trek",
            "activity",
            "Puerto Natales",
            "Chile",
            "Multi-day hiking circuit past glaciers, granite towers, and turquoise lakes",
            "$$",
            4.9,
            &["nature", "adventure"],
            &["glacier views", "mountain refugios"],
        ),
        record(
            "Marrakech Medina Souks",
            "destination",
            "Marrakech",
            "Morocco",
            "Labyrinth of market alleys selling spices, lanterns, leather, and carpets",
            "$",
            4.4,
            &["cultural", "food", "photography"],
            &["spice stalls", "lantern shops"],
        ),
    ]
});
