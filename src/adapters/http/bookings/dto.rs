//! HTTP DTOs for booking endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::travel::{Booking, BookingStatus, BookingType};

/// Request to record a booking.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBookingRequest {
    pub user_id: String,
    #[serde(rename = "type")]
    pub booking_type: BookingType,
    /// Free-form reservation payload (the chosen flight offer, passenger
    /// names, etc.).
    #[serde(default)]
    pub details: Value,
    pub amount: f64,
    #[serde(default)]
    pub currency: Option<String>,
}

/// Query parameters for listing bookings.
#[derive(Debug, Clone, Deserialize)]
pub struct ListBookingsParams {
    pub user_id: String,
}

/// One booking in an API response.
#[derive(Debug, Clone, Serialize)]
pub struct BookingResponse {
    pub id: String,
    pub user_id: String,
    #[serde(rename = "type")]
    pub booking_type: BookingType,
    pub status: BookingStatus,
    pub details: Value,
    pub amount: f64,
    pub currency: String,
    pub confirmation_number: String,
    pub created_at: String,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id.to_string(),
            user_id: booking.user_id.to_string(),
            booking_type: booking.booking_type,
            status: booking.status,
            details: booking.details,
            amount: booking.amount,
            currency: booking.currency,
            confirmation_number: booking.confirmation_number,
            created_at: booking.created_at.to_rfc3339(),
        }
    }
}

/// A user's bookings, newest first.
#[derive(Debug, Clone, Serialize)]
pub struct BookingListResponse {
    pub bookings: Vec<BookingResponse>,
    pub count: usize,
}

impl BookingListResponse {
    pub fn from_bookings(bookings: Vec<Booking>) -> Self {
        let bookings: Vec<BookingResponse> = bookings.into_iter().map(Into::into).collect();
        let count = bookings.len();
        Self { bookings, count }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;
    use serde_json::json;

    #[test]
    fn create_request_deserializes_with_defaults() {
        let json = r#"{"user_id": "alice", "type": "flight", "amount": 880.0}"#;
        let req: CreateBookingRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.booking_type, BookingType::Flight);
        assert!(req.currency.is_none());
        assert_eq!(req.details, Value::Null);
    }

    #[test]
    fn booking_response_conversion() {
        let booking = Booking::confirmed(
            UserId::new("alice").unwrap(),
            BookingType::Flight,
            json!({"flight_id": "FL1234"}),
            880.0,
            "USD",
            "BOOK482913",
        );

        let response: BookingResponse = booking.into();
        assert_eq!(response.user_id, "alice");
        assert_eq!(response.confirmation_number, "BOOK482913");

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["type"], "flight");
        assert_eq!(json["status"], "confirmed");
    }
}
