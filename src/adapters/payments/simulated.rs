//! Simulated payment gateway.
//!
//! Every validated request completes successfully with a minted transaction
//! identifier and a receipt URL. No real money moves; a production
//! deployment would swap this for a Stripe or PayPal adapter behind the
//! same port.

use async_trait::async_trait;
use tracing::info;

use crate::domain::foundation::PaymentId;
use crate::domain::travel::{PaymentRequest, PaymentResult, PaymentStatus};
use crate::ports::{PaymentError, PaymentGateway};

const RECEIPT_BASE_URL: &str = "https://example.com/receipt";

/// Gateway that approves every request.
#[derive(Debug, Default, Clone)]
pub struct SimulatedPaymentGateway;

impl SimulatedPaymentGateway {
    pub fn new() -> Self {
        Self
    }

    /// Mints a transaction identifier: "txn_" plus 16 hex characters.
    fn mint_transaction_id() -> String {
        let hex = uuid::Uuid::new_v4().simple().to_string();
        format!("txn_{}", &hex[..16])
    }
}

#[async_trait]
impl PaymentGateway for SimulatedPaymentGateway {
    async fn process(&self, request: &PaymentRequest) -> Result<PaymentResult, PaymentError> {
        let payment_id = PaymentId::new();
        let transaction_id = Self::mint_transaction_id();

        info!(
            payment_id = %payment_id,
            amount = request.amount(),
            currency = request.currency(),
            "processing simulated payment"
        );

        Ok(PaymentResult {
            payment_id,
            status: PaymentStatus::Completed,
            receipt_url: format!("{}/{}", RECEIPT_BASE_URL, transaction_id),
            transaction_id,
            amount: request.amount(),
            currency: request.currency().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::travel::PaymentMethod;
    use std::collections::HashMap;

    fn request() -> PaymentRequest {
        PaymentRequest::new(
            880.0,
            "USD",
            PaymentMethod {
                method_type: "card".to_string(),
                token: "tok_visa".to_string(),
                last_four: Some("4242".to_string()),
                brand: Some("visa".to_string()),
            },
            HashMap::new(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn payment_completes_with_transaction_id() {
        let gateway = SimulatedPaymentGateway::new();

        let result = gateway.process(&request()).await.unwrap();

        assert_eq!(result.status, PaymentStatus::Completed);
        assert!(result.transaction_id.starts_with("txn_"));
        assert_eq!(result.transaction_id.len(), "txn_".len() + 16);
        assert_eq!(result.amount, 880.0);
        assert_eq!(result.currency, "USD");
    }

    #[tokio::test]
    async fn receipt_url_references_transaction() {
        let gateway = SimulatedPaymentGateway::new();

        let result = gateway.process(&request()).await.unwrap();
        assert_eq!(
            result.receipt_url,
            format!("{}/{}", RECEIPT_BASE_URL, result.transaction_id)
        );
    }

    #[tokio::test]
    async fn transaction_ids_are_unique_per_payment() {
        let gateway = SimulatedPaymentGateway::new();

        let a = gateway.process(&request()).await.unwrap();
        let b = gateway.process(&request()).await.unwrap();
        assert_ne!(a.transaction_id, b.transaction_id);
    }

    #[test]
    fn minted_id_is_lowercase_hex() {
        let id = SimulatedPaymentGateway::mint_transaction_id();
        let suffix = id.strip_prefix("txn_").unwrap();
        assert_eq!(suffix.len(), 16);
        assert!(suffix
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
