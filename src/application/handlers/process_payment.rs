//! Payment processing handler.

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;

use crate::domain::foundation::ValidationError;
use crate::domain::travel::{PaymentMethod, PaymentRequest, PaymentResult};
use crate::ports::{PaymentError, PaymentGateway};

const DEFAULT_CURRENCY: &str = "USD";

/// Command to process a payment.
#[derive(Debug, Clone)]
pub struct ProcessPaymentCommand {
    pub amount: f64,
    /// Defaults to USD when absent.
    pub currency: Option<String>,
    pub payment_method: PaymentMethod,
    pub metadata: HashMap<String, String>,
}

/// Result of processing a payment.
#[derive(Debug, Clone)]
pub struct ProcessPaymentResult {
    pub payment: PaymentResult,
}

/// Errors from payment processing.
#[derive(Debug, Clone, Error)]
pub enum ProcessPaymentError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Payment declined: {0}")]
    Declined(String),

    #[error("Gateway error: {0}")]
    Gateway(String),
}

impl From<PaymentError> for ProcessPaymentError {
    fn from(err: PaymentError) -> Self {
        match err {
            PaymentError::Declined { reason } => ProcessPaymentError::Declined(reason),
            other => ProcessPaymentError::Gateway(other.to_string()),
        }
    }
}

/// Handler for payments.
pub struct ProcessPaymentHandler {
    gateway: Arc<dyn PaymentGateway>,
}

impl ProcessPaymentHandler {
    pub fn new(gateway: Arc<dyn PaymentGateway>) -> Self {
        Self { gateway }
    }

    pub async fn handle(
        &self,
        cmd: ProcessPaymentCommand,
    ) -> Result<ProcessPaymentResult, ProcessPaymentError> {
        let currency = cmd
            .currency
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

        let request = PaymentRequest::new(cmd.amount, currency, cmd.payment_method, cmd.metadata)?;

        let payment = self.gateway.process(&request).await?;

        Ok(ProcessPaymentResult { payment })
    }
}
