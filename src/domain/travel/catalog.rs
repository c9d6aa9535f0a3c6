//! Catalog records returned by travel retrieval.

use serde::{Deserialize, Serialize};

/// A destination, activity, hotel, or restaurant from the travel catalog.
///
/// Used as grounding context for the assistant; the `record_type` field is
/// free-form ("destination", "activity", "hotel", "restaurant") because the
/// catalog schema is owned by the search index, not this service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub city: String,
    pub country: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub highlights: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_type_serializes_as_type() {
        let record = TravelRecord {
            name: "Shinjuku Gyoen".to_string(),
            record_type: "activity".to_string(),
            city: "Tokyo".to_string(),
            country: "Japan".to_string(),
            description: "Sprawling garden mixing Japanese, English, and French styles"
                .to_string(),
            price_range: None,
            rating: None,
            categories: vec![],
            highlights: vec![],
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "activity");
        assert!(json.get("price_range").is_none());
    }

    #[test]
    fn deserializes_with_missing_optional_fields() {
        let record: TravelRecord = serde_json::from_str(
            r#"{
                "name": "Tsukiji Outer Market",
                "type": "restaurant",
                "city": "Tokyo",
                "country": "Japan",
                "description": "Street food and fresh seafood stalls"
            }"#,
        )
        .unwrap();

        assert_eq!(record.record_type, "restaurant");
        assert!(record.categories.is_empty());
    }
}
