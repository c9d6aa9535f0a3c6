//! HTTP DTOs for payment endpoints.

use std::collections::HashMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::domain::travel::{PaymentMethod, PaymentResult, PaymentStatus};

/// Request to process a payment. `amount` and `payment_method` are
/// required; the handler rejects requests missing either with a 400.
#[derive(Debug, Clone, Deserialize)]
pub struct ProcessPaymentRequest {
    pub amount: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    pub payment_method: Option<PaymentMethodRequest>,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

/// Tokenized payment instrument.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentMethodRequest {
    #[serde(rename = "type", default = "default_method_type")]
    pub method_type: String,
    pub token: String,
    #[serde(default)]
    pub last_four: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
}

fn default_method_type() -> String {
    "card".to_string()
}

impl From<PaymentMethodRequest> for PaymentMethod {
    fn from(req: PaymentMethodRequest) -> Self {
        Self {
            method_type: req.method_type,
            token: req.token,
            last_four: req.last_four,
            brand: req.brand,
        }
    }
}

/// Outcome of a processed payment.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentResponse {
    pub payment_id: String,
    pub status: PaymentStatus,
    pub transaction_id: String,
    pub amount: f64,
    pub currency: String,
    pub receipt_url: String,
    pub timestamp: String,
}

impl From<PaymentResult> for PaymentResponse {
    fn from(result: PaymentResult) -> Self {
        Self {
            payment_id: result.payment_id.to_string(),
            status: result.status,
            transaction_id: result.transaction_id,
            amount: result.amount,
            currency: result.currency,
            receipt_url: result.receipt_url,
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_request_without_method_deserializes() {
        let json = r#"{"amount": 880.0}"#;
        let req: ProcessPaymentRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.amount, Some(880.0));
        assert!(req.payment_method.is_none());
    }

    #[test]
    fn method_type_defaults_to_card() {
        let json = r#"{"token": "tok_visa"}"#;
        let req: PaymentMethodRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.method_type, "card");
    }

    #[test]
    fn payment_response_serializes_lowercase_status() {
        let response = PaymentResponse {
            payment_id: "p-1".to_string(),
            status: PaymentStatus::Completed,
            transaction_id: "txn_abc".to_string(),
            amount: 100.0,
            currency: "USD".to_string(),
            receipt_url: "https://example.com/receipt/txn_abc".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "completed");
    }
}
