//! HTTP routes for payment endpoints.

use axum::{routing::post, Router};

use super::handlers::{process_payment, PaymentHandlers};

/// Creates the payment router.
pub fn payment_routes(handlers: PaymentHandlers) -> Router {
    Router::new()
        .route("/api/v2/payment/process", post(process_payment))
        .with_state(handlers)
}
