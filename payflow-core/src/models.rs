//! Data models for the payflow demo.
//!
//! # Models
//!
//! - [`Currency`] - The closed set of cryptocurrencies a payment is funded from
//! - [`PaymentRequest`] - A validated payment, built fresh per submission attempt
//! - [`PaymentResult`] - Outcome of a submission, discarded after feedback renders
//!
//! # Examples
//!
//! ```
//! use payflow_core::{Currency, PaymentRequest};
//!
//! let request = PaymentRequest::new("alice@example.com", Currency::Btc, 1.5)
//!     .with_description("Coffee fund");
//!
//! assert_eq!(request.currency.ticker(), "BTC");
//! ```

use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Cryptocurrency a payment is funded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Btc,
    Eth,
}

impl Currency {
    /// All supported currencies, in display order.
    pub const ALL: [Currency; 2] = [Currency::Btc, Currency::Eth];

    /// Upper-case ticker symbol, as used on the wire and in notices.
    pub fn ticker(&self) -> &'static str {
        match self {
            Currency::Btc => "BTC",
            Currency::Eth => "ETH",
        }
    }

    /// Human-readable label for selection menus.
    pub fn label(&self) -> &'static str {
        match self {
            Currency::Btc => "Bitcoin (BTC)",
            Currency::Eth => "Ethereum (ETH)",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ticker())
    }
}

/// Error returned when parsing a currency ticker fails.
#[derive(Debug, thiserror::Error)]
#[error("unknown currency: {0}")]
pub struct UnknownCurrency(String);

impl FromStr for Currency {
    type Err = UnknownCurrency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "BTC" => Ok(Currency::Btc),
            "ETH" => Ok(Currency::Eth),
            _ => Err(UnknownCurrency(s.to_string())),
        }
    }
}

/// A validated payment request.
///
/// Only ever constructed from input that passed the form schema in
/// [`crate::validate`]; the submission service still re-checks the
/// structural invariants before doing any work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRequest {
    /// Recipient email address
    pub recipient: String,
    /// Currency the payment is made in
    pub currency: Currency,
    /// Amount to send, strictly positive
    pub amount: f64,
    /// Optional free-text note
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PaymentRequest {
    pub fn new(recipient: impl Into<String>, currency: Currency, amount: f64) -> Self {
        Self {
            recipient: recipient.into(),
            currency,
            amount,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Outcome of a payment submission.
///
/// Invariant: `success == true` always comes with a non-empty
/// `transaction_id`; the service rejects backend responses that break this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentResult {
    /// Whether the payment went through
    pub success: bool,
    /// Opaque transaction identifier, present on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    /// Optional human-readable status message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl PaymentResult {
    /// Build a successful result carrying the given transaction id.
    pub fn succeeded(transaction_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: true,
            transaction_id: Some(transaction_id.into()),
            message: Some(message.into()),
        }
    }
}

/// Generate a fresh opaque transaction identifier.
///
/// Format: `TX-` followed by 8 upper-case alphanumeric characters.
pub fn new_transaction_id() -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(8)
        .map(|b| (b as char).to_ascii_uppercase())
        .collect();
    format!("TX-{}", suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_parsing() {
        assert_eq!("BTC".parse::<Currency>().unwrap(), Currency::Btc);
        assert_eq!("btc".parse::<Currency>().unwrap(), Currency::Btc);
        assert_eq!("ETH".parse::<Currency>().unwrap(), Currency::Eth);
        assert!("DOGE".parse::<Currency>().is_err());
        assert!("".parse::<Currency>().is_err());
    }

    #[test]
    fn test_currency_display() {
        assert_eq!(format!("{}", Currency::Btc), "BTC");
        assert_eq!(format!("{}", Currency::Eth), "ETH");
    }

    #[test]
    fn test_currency_serde_uses_ticker() {
        let json = serde_json::to_string(&Currency::Btc).unwrap();
        assert_eq!(json, "\"BTC\"");

        let parsed: Currency = serde_json::from_str("\"ETH\"").unwrap();
        assert_eq!(parsed, Currency::Eth);
    }

    #[test]
    fn test_request_builder() {
        let request = PaymentRequest::new("a@b.com", Currency::Eth, 2.0).with_description("rent");
        assert_eq!(request.recipient, "a@b.com");
        assert_eq!(request.description, Some("rent".to_string()));
    }

    #[test]
    fn test_request_serialization_skips_empty_description() {
        let request = PaymentRequest::new("a@b.com", Currency::Btc, 1.0);
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("description"));
    }

    #[test]
    fn test_transaction_id_format() {
        let id = new_transaction_id();
        assert!(id.starts_with("TX-"));
        assert_eq!(id.len(), 11);
        assert!(id[3..]
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_transaction_ids_are_fresh() {
        assert_ne!(new_transaction_id(), new_transaction_id());
    }
}
