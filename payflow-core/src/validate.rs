//! Form validation for payment requests.
//!
//! Given the raw strings a form collects, produce either a typed
//! [`PaymentRequest`] or a field-keyed set of human-readable error messages.
//! Validation is synchronous and pure; the dialog re-runs the per-field
//! validators on every edit, so they are exposed individually alongside the
//! whole-form [`validate`].

use crate::models::{Currency, PaymentRequest};
use std::fmt;

/// Field names used as keys in [`FieldErrors`].
pub const RECIPIENT: &str = "recipient";
pub const CURRENCY: &str = "currency";
pub const AMOUNT: &str = "amount";

/// Raw form values as entered, before validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentForm {
    pub recipient: String,
    pub currency: String,
    pub amount: String,
    pub description: String,
}

/// Validation failures keyed by field, in form order.
///
/// One message per failing field; the first failing rule for a field wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    errors: Vec<(&'static str, String)>,
}

impl FieldErrors {
    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push((field, message.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// The message for a field, if it failed.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, message)| message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.errors
            .iter()
            .map(|(field, message)| (*field, message.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.errors {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

/// Check whether the input is syntactically a valid email address.
///
/// Deliberately modest: one `@`, a non-empty local part, a dotted domain,
/// and no whitespace. This matches what the payment form needs; it is not
/// an RFC 5322 parser.
pub fn is_valid_email(input: &str) -> bool {
    if input.chars().any(char::is_whitespace) {
        return false;
    }
    let (local, domain) = match input.split_once('@') {
        Some(parts) => parts,
        None => return false,
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    if !domain.contains('.') {
        return false;
    }
    domain.split('.').all(|label| !label.is_empty())
}

/// Validate the recipient field.
pub fn validate_recipient(input: &str) -> Result<(), String> {
    if is_valid_email(input) {
        Ok(())
    } else {
        Err("Please enter a valid email address".to_string())
    }
}

/// Validate the currency field against the closed set of tickers.
pub fn validate_currency(input: &str) -> Result<Currency, String> {
    input
        .parse::<Currency>()
        .map_err(|_| "Please select a cryptocurrency".to_string())
}

/// Validate the amount field: a finite number strictly greater than zero.
pub fn validate_amount(input: &str) -> Result<f64, String> {
    let amount: f64 = input
        .trim()
        .parse()
        .map_err(|_| "Amount must be a number".to_string())?;
    if !amount.is_finite() {
        return Err("Amount must be a number".to_string());
    }
    if amount <= 0.0 {
        return Err("Amount must be greater than 0".to_string());
    }
    Ok(amount)
}

/// Validate a whole form, producing a typed request or every field's error.
pub fn validate(form: &PaymentForm) -> Result<PaymentRequest, FieldErrors> {
    let mut errors = FieldErrors::default();

    if let Err(message) = validate_recipient(&form.recipient) {
        errors.push(RECIPIENT, message);
    }
    let currency = match validate_currency(&form.currency) {
        Ok(currency) => Some(currency),
        Err(message) => {
            errors.push(CURRENCY, message);
            None
        }
    };
    let amount = match validate_amount(&form.amount) {
        Ok(amount) => Some(amount),
        Err(message) => {
            errors.push(AMOUNT, message);
            None
        }
    };

    match (currency, amount) {
        (Some(currency), Some(amount)) if errors.is_empty() => {
            let mut request = PaymentRequest::new(form.recipient.clone(), currency, amount);
            if !form.description.trim().is_empty() {
                request = request.with_description(form.description.clone());
            }
            Ok(request)
        }
        _ => Err(errors),
    }
}
