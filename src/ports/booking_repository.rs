//! Booking repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::travel::Booking;

/// Repository port for booking persistence.
///
/// Bookings are insert-only in this service; there is no update or
/// cancellation surface.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Persists a new booking.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn create(&self, booking: &Booking) -> Result<(), DomainError>;

    /// Lists a user's bookings, most recent first.
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Booking>, DomainError>;
}
