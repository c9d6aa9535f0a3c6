//! Persisted booking records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::foundation::{BookingId, UserId};

/// What the booking reserves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingType {
    Flight,
    Hotel,
    Package,
}

/// Booking lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

/// A booking linking a user to a reserved item and the amount paid.
///
/// `details` is schemaless JSON (the flight offer, passenger names, etc.)
/// because its shape differs per booking type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub user_id: UserId,
    #[serde(rename = "type")]
    pub booking_type: BookingType,
    pub status: BookingStatus,
    pub details: Value,
    pub amount: f64,
    pub currency: String,
    pub confirmation_number: String,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Creates a new confirmed booking stamped with the current time.
    pub fn confirmed(
        user_id: UserId,
        booking_type: BookingType,
        details: Value,
        amount: f64,
        currency: impl Into<String>,
        confirmation_number: impl Into<String>,
    ) -> Self {
        Self {
            id: BookingId::new(),
            user_id,
            booking_type,
            status: BookingStatus::Confirmed,
            details,
            amount,
            currency: currency.into(),
            confirmation_number: confirmation_number.into(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn confirmed_booking_has_confirmed_status() {
        let booking = Booking::confirmed(
            UserId::new("user-1").unwrap(),
            BookingType::Flight,
            json!({"flight_id": "FL1234"}),
            880.0,
            "USD",
            "BOOK482913",
        );

        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert_eq!(booking.amount, 880.0);
        assert_eq!(booking.confirmation_number, "BOOK482913");
    }

    #[test]
    fn booking_type_serializes_as_type_field() {
        let booking = Booking::confirmed(
            UserId::new("user-1").unwrap(),
            BookingType::Flight,
            json!({}),
            1.0,
            "USD",
            "BOOK000001",
        );

        let json = serde_json::to_value(&booking).unwrap();
        assert_eq!(json["type"], "flight");
        assert_eq!(json["status"], "confirmed");
    }

    #[test]
    fn status_round_trips_through_json() {
        let status: BookingStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(status, BookingStatus::Cancelled);
    }
}
