//! Command handlers. One file per operation, each exposing a
//! command/result/error triple and a `handle` entry point.

mod create_booking;
mod list_bookings;
mod process_payment;
mod search_flights;
mod stream_chat;

pub use create_booking::{
    CreateBookingCommand, CreateBookingError, CreateBookingHandler, CreateBookingResult,
};
pub use list_bookings::{
    ListBookingsError, ListBookingsHandler, ListBookingsQuery, ListBookingsResult,
};
pub use process_payment::{
    ProcessPaymentCommand, ProcessPaymentError, ProcessPaymentHandler, ProcessPaymentResult,
};
pub use search_flights::{
    SearchFlightsCommand, SearchFlightsError, SearchFlightsHandler, SearchFlightsResult,
};
pub use stream_chat::{
    StreamChatCommand, StreamChatError, StreamChatHandler, StreamChatResult, TextStream,
};
