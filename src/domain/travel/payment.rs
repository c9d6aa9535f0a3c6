//! Payment requests and results.
//!
//! Processing is simulated: no real monetary movement, no retries, no
//! idempotency keys. The types still model the full status set a real
//! gateway would report so callers never branch on free-form strings.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{PaymentId, ValidationError};

/// Closed set of payment states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Processing,
    Completed,
    Failed,
    Refunded,
    Cancelled,
}

/// Tokenized payment instrument supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    #[serde(rename = "type")]
    pub method_type: String,
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_four: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
}

impl PaymentMethod {
    /// A method is usable only with a non-empty token.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.token.trim().is_empty() {
            return Err(ValidationError::empty_field("payment_method.token"));
        }
        Ok(())
    }
}

/// Validated payment request.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRequest {
    amount: f64,
    currency: String,
    method: PaymentMethod,
    metadata: HashMap<String, String>,
}

impl PaymentRequest {
    /// Validates and constructs a request. Amount must be positive and
    /// the payment method must carry a token.
    pub fn new(
        amount: f64,
        currency: impl Into<String>,
        method: PaymentMethod,
        metadata: HashMap<String, String>,
    ) -> Result<Self, ValidationError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(ValidationError::invalid_format(
                "amount",
                "must be a positive number",
            ));
        }
        let currency = currency.into();
        if currency.trim().is_empty() {
            return Err(ValidationError::empty_field("currency"));
        }
        method.validate()?;

        Ok(Self {
            amount,
            currency,
            method,
            metadata,
        })
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn method(&self) -> &PaymentMethod {
        &self.method
    }

    pub fn metadata(&self) -> &HashMap<String, String> {
        &self.metadata
    }

    /// Booking this payment settles, when the caller supplied one.
    pub fn booking_id(&self) -> Option<&str> {
        self.metadata.get("booking_id").map(String::as_str)
    }
}

/// Outcome of a processed payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentResult {
    pub payment_id: PaymentId,
    pub status: PaymentStatus,
    pub transaction_id: String,
    pub amount: f64,
    pub currency: String,
    pub receipt_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> PaymentMethod {
        PaymentMethod {
            method_type: "card".to_string(),
            token: "tok_visa".to_string(),
            last_four: Some("4242".to_string()),
            brand: Some("visa".to_string()),
        }
    }

    #[test]
    fn valid_request_is_accepted() {
        let request = PaymentRequest::new(450.0, "USD", card(), HashMap::new()).unwrap();
        assert_eq!(request.amount(), 450.0);
        assert_eq!(request.currency(), "USD");
        assert!(request.booking_id().is_none());
    }

    #[test]
    fn missing_token_is_rejected() {
        let mut method = card();
        method.token = "  ".to_string();
        let err = PaymentRequest::new(100.0, "USD", method, HashMap::new()).unwrap_err();
        assert!(matches!(err, ValidationError::EmptyField { .. }));
    }

    #[test]
    fn non_positive_amount_is_rejected() {
        assert!(PaymentRequest::new(0.0, "USD", card(), HashMap::new()).is_err());
        assert!(PaymentRequest::new(-10.0, "USD", card(), HashMap::new()).is_err());
        assert!(PaymentRequest::new(f64::NAN, "USD", card(), HashMap::new()).is_err());
    }

    #[test]
    fn booking_id_read_from_metadata() {
        let mut metadata = HashMap::new();
        metadata.insert("booking_id".to_string(), "bk-123".to_string());
        let request = PaymentRequest::new(99.0, "USD", card(), metadata).unwrap();
        assert_eq!(request.booking_id(), Some("bk-123"));
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&PaymentStatus::Completed).unwrap();
        assert_eq!(json, "\"completed\"");
        let json = serde_json::to_string(&PaymentStatus::Refunded).unwrap();
        assert_eq!(json, "\"refunded\"");
    }

    #[test]
    fn method_type_serializes_as_type() {
        let json = serde_json::to_value(card()).unwrap();
        assert_eq!(json["type"], "card");
    }
}
