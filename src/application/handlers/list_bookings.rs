//! Booking listing handler.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::foundation::{DomainError, UserId, ValidationError};
use crate::domain::travel::Booking;
use crate::ports::BookingRepository;

/// Query for a user's bookings.
#[derive(Debug, Clone)]
pub struct ListBookingsQuery {
    pub user_id: String,
}

/// Result of listing bookings.
#[derive(Debug, Clone)]
pub struct ListBookingsResult {
    pub bookings: Vec<Booking>,
}

/// Errors from listing bookings.
#[derive(Debug, Clone, Error)]
pub enum ListBookingsError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Repository error: {0}")]
    Repository(String),
}

impl From<DomainError> for ListBookingsError {
    fn from(err: DomainError) -> Self {
        ListBookingsError::Repository(err.to_string())
    }
}

/// Handler for booking listings.
pub struct ListBookingsHandler {
    repository: Arc<dyn BookingRepository>,
}

impl ListBookingsHandler {
    pub fn new(repository: Arc<dyn BookingRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: ListBookingsQuery,
    ) -> Result<ListBookingsResult, ListBookingsError> {
        let user_id = UserId::new(query.user_id)?;
        let bookings = self.repository.list_by_user(&user_id).await?;
        Ok(ListBookingsResult { bookings })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::store::InMemoryBookingRepository;
    use crate::domain::travel::{Booking, BookingType};
    use serde_json::json;

    #[tokio::test]
    async fn returns_only_the_users_bookings() {
        let repo = Arc::new(InMemoryBookingRepository::new());
        let booking = Booking::confirmed(
            UserId::new("alice").unwrap(),
            BookingType::Flight,
            json!({}),
            100.0,
            "USD",
            "BOOK111111",
        );
        repo.create(&booking).await.unwrap();

        let handler = ListBookingsHandler::new(repo);

        let mine = handler
            .handle(ListBookingsQuery {
                user_id: "alice".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(mine.bookings.len(), 1);

        let theirs = handler
            .handle(ListBookingsQuery {
                user_id: "bob".to_string(),
            })
            .await
            .unwrap();
        assert!(theirs.bookings.is_empty());
    }

    #[tokio::test]
    async fn empty_user_id_is_rejected() {
        let handler = ListBookingsHandler::new(Arc::new(InMemoryBookingRepository::new()));

        let result = handler
            .handle(ListBookingsQuery {
                user_id: "  ".to_string(),
            })
            .await;

        assert!(matches!(result, Err(ListBookingsError::Validation(_))));
    }
}
