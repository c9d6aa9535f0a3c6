//! Payment gateway port.

use async_trait::async_trait;

use crate::domain::travel::{PaymentRequest, PaymentResult};

/// Port for payment processing.
///
/// The request is already validated; implementations only decide the
/// outcome and mint the transaction identifier. A declined payment is an
/// error here, not a `failed` result, so callers can map it distinctly.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Processes a payment and returns its result.
    async fn process(&self, request: &PaymentRequest) -> Result<PaymentResult, PaymentError>;
}

/// Payment gateway errors.
#[derive(Debug, thiserror::Error)]
pub enum PaymentError {
    /// Gateway declined the payment.
    #[error("payment declined: {reason}")]
    Declined { reason: String },

    /// Gateway is unreachable.
    #[error("gateway unavailable: {message}")]
    Unavailable { message: String },

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),
}

impl PaymentError {
    pub fn declined(reason: impl Into<String>) -> Self {
        Self::Declined {
            reason: reason.into(),
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}
