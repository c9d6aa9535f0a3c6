//! Travel catalog search port.
//!
//! Ranked retrieval over the travel catalog. Treated as an opaque
//! collaborator: implementations may hit a real index or serve a static
//! in-process catalog.

use async_trait::async_trait;

use crate::domain::travel::TravelRecord;

/// Port for catalog retrieval.
#[async_trait]
pub trait TravelSearch: Send + Sync {
    /// Returns up to `size` records ranked by relevance to the query.
    ///
    /// An empty result is a valid outcome, not an error.
    async fn search(&self, query: &str, size: usize) -> Result<Vec<TravelRecord>, SearchError>;
}

/// Search collaborator errors.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Index is unreachable or refused the request.
    #[error("search unavailable: {message}")]
    Unavailable { message: String },

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Failed to parse the index response.
    #[error("parse error: {0}")]
    Parse(String),
}

impl SearchError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn travel_search_is_object_safe() {
        fn _accepts_dyn(_search: &dyn TravelSearch) {}
    }
}
