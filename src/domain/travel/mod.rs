//! Travel domain: intent detection, catalog records, flight offers,
//! payments, and bookings.

mod booking;
mod catalog;
mod flight;
mod intent;
mod payment;

pub use booking::{Booking, BookingStatus, BookingType};
pub use catalog::TravelRecord;
pub use flight::{Baggage, CabinClass, FlightOffer, FlightPrice, FlightQuery};
pub use intent::detect_booking_intent;
pub use payment::{PaymentMethod, PaymentRequest, PaymentResult, PaymentStatus};
