//! PostgreSQL implementation of the booking repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{BookingId, DomainError, ErrorCode, UserId};
use crate::domain::travel::{Booking, BookingStatus, BookingType};
use crate::ports::BookingRepository;

/// Booking repository over a sqlx connection pool.
pub struct PostgresBookingRepository {
    pool: PgPool,
}

impl PostgresBookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a booking.
#[derive(Debug, sqlx::FromRow)]
struct BookingRow {
    id: Uuid,
    user_id: String,
    booking_type: String,
    status: String,
    details: serde_json::Value,
    amount: f64,
    currency: String,
    confirmation_number: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<BookingRow> for Booking {
    type Error = DomainError;

    fn try_from(row: BookingRow) -> Result<Self, Self::Error> {
        Ok(Booking {
            id: BookingId::from_uuid(row.id),
            user_id: UserId::new(row.user_id).map_err(|e| {
                DomainError::new(ErrorCode::DatabaseError, format!("Invalid user_id: {}", e))
            })?,
            booking_type: parse_type(&row.booking_type)?,
            status: parse_status(&row.status)?,
            details: row.details,
            amount: row.amount,
            currency: row.currency,
            confirmation_number: row.confirmation_number,
            created_at: row.created_at,
        })
    }
}

fn parse_type(s: &str) -> Result<BookingType, DomainError> {
    match s {
        "flight" => Ok(BookingType::Flight),
        "hotel" => Ok(BookingType::Hotel),
        "package" => Ok(BookingType::Package),
        _ => Err(DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid booking type: {}", s),
        )),
    }
}

fn parse_status(s: &str) -> Result<BookingStatus, DomainError> {
    match s {
        "pending" => Ok(BookingStatus::Pending),
        "confirmed" => Ok(BookingStatus::Confirmed),
        "cancelled" => Ok(BookingStatus::Cancelled),
        "completed" => Ok(BookingStatus::Completed),
        _ => Err(DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid booking status: {}", s),
        )),
    }
}

fn type_to_string(booking_type: &BookingType) -> &'static str {
    match booking_type {
        BookingType::Flight => "flight",
        BookingType::Hotel => "hotel",
        BookingType::Package => "package",
    }
}

fn status_to_string(status: &BookingStatus) -> &'static str {
    match status {
        BookingStatus::Pending => "pending",
        BookingStatus::Confirmed => "confirmed",
        BookingStatus::Cancelled => "cancelled",
        BookingStatus::Completed => "completed",
    }
}

#[async_trait]
impl BookingRepository for PostgresBookingRepository {
    async fn create(&self, booking: &Booking) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO bookings (
                id, user_id, booking_type, status, details, amount, currency,
                confirmation_number, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(booking.id.as_uuid())
        .bind(booking.user_id.as_str())
        .bind(type_to_string(&booking.booking_type))
        .bind(status_to_string(&booking.status))
        .bind(&booking.details)
        .bind(booking.amount)
        .bind(&booking.currency)
        .bind(&booking.confirmation_number)
        .bind(booking.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to save booking: {}", e),
            )
        })?;

        Ok(())
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Booking>, DomainError> {
        let rows: Vec<BookingRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, booking_type, status, details, amount, currency,
                   confirmation_number, created_at
            FROM bookings
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to list bookings: {}", e),
            )
        })?;

        rows.into_iter().map(Booking::try_from).collect()
    }
}
