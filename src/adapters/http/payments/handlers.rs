//! HTTP handlers for payment endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::ErrorResponse;
use crate::application::handlers::{ProcessPaymentCommand, ProcessPaymentError, ProcessPaymentHandler};

use super::dto::{PaymentResponse, ProcessPaymentRequest};

#[derive(Clone)]
pub struct PaymentHandlers {
    process_handler: Arc<ProcessPaymentHandler>,
}

impl PaymentHandlers {
    pub fn new(process_handler: Arc<ProcessPaymentHandler>) -> Self {
        Self { process_handler }
    }
}

/// POST /api/v2/payment/process - Process a simulated payment
pub async fn process_payment(
    State(handlers): State<PaymentHandlers>,
    Json(req): Json<ProcessPaymentRequest>,
) -> Response {
    let (amount, payment_method) = match (req.amount, req.payment_method) {
        (Some(amount), Some(method)) => (amount, method),
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request(
                    "amount and payment_method are required",
                )),
            )
                .into_response()
        }
    };

    let cmd = ProcessPaymentCommand {
        amount,
        currency: req.currency,
        payment_method: payment_method.into(),
        metadata: req.metadata,
    };

    match handlers.process_handler.handle(cmd).await {
        Ok(result) => {
            let response: PaymentResponse = result.payment.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_payment_error(e),
    }
}

fn handle_payment_error(error: ProcessPaymentError) -> Response {
    match error {
        ProcessPaymentError::Validation(e) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(e.to_string())),
        )
            .into_response(),
        ProcessPaymentError::Declined(reason) => (
            StatusCode::PAYMENT_REQUIRED,
            Json(ErrorResponse::new("PAYMENT_DECLINED", reason)),
        )
            .into_response(),
        ProcessPaymentError::Gateway(msg) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse::service_unavailable(msg)),
        )
            .into_response(),
    }
}
