//! HTTP adapter for payment endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{PaymentMethodRequest, PaymentResponse, ProcessPaymentRequest};
pub use handlers::PaymentHandlers;
pub use routes::payment_routes;
