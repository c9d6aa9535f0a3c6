//! Booking creation handler.

use std::sync::Arc;

use rand::Rng;
use thiserror::Error;

use crate::domain::foundation::{DomainError, UserId, ValidationError};
use crate::domain::travel::{Booking, BookingType};
use crate::ports::BookingRepository;

/// Command to create a booking.
#[derive(Debug, Clone)]
pub struct CreateBookingCommand {
    pub user_id: String,
    pub booking_type: BookingType,
    /// Free-form reservation payload (flight offer, passengers, etc.).
    pub details: serde_json::Value,
    pub amount: f64,
    pub currency: String,
}

/// Result of creating a booking.
#[derive(Debug, Clone)]
pub struct CreateBookingResult {
    pub booking: Booking,
}

/// Errors from booking creation.
#[derive(Debug, Clone, Error)]
pub enum CreateBookingError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Repository error: {0}")]
    Repository(String),
}

impl From<DomainError> for CreateBookingError {
    fn from(err: DomainError) -> Self {
        CreateBookingError::Repository(err.to_string())
    }
}

/// Handler for booking creation.
pub struct CreateBookingHandler {
    repository: Arc<dyn BookingRepository>,
}

impl CreateBookingHandler {
    pub fn new(repository: Arc<dyn BookingRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: CreateBookingCommand,
    ) -> Result<CreateBookingResult, CreateBookingError> {
        let user_id = UserId::new(cmd.user_id)?;

        if !cmd.amount.is_finite() || cmd.amount <= 0.0 {
            return Err(
                ValidationError::invalid_format("amount", "must be a positive number").into(),
            );
        }
        if cmd.currency.trim().is_empty() {
            return Err(ValidationError::empty_field("currency").into());
        }

        let booking = Booking::confirmed(
            user_id,
            cmd.booking_type,
            cmd.details,
            cmd.amount,
            cmd.currency,
            mint_confirmation_number(),
        );

        self.repository.create(&booking).await?;

        Ok(CreateBookingResult { booking })
    }
}

/// Confirmation numbers look like "BOOK483920".
fn mint_confirmation_number() -> String {
    format!("BOOK{}", rand::thread_rng().gen_range(100_000..=999_999))
}
