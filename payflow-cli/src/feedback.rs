//! Maps submission outcomes to the notices the dialog shows.
//!
//! Kept as pure functions so every feedback branch is testable without a
//! terminal: unauthorized → auth notice plus login redirect, 5xx → generic
//! try-again-later, anything else → the service message with a fallback.

use payflow_core::{PaymentError, PaymentRequest};

/// Fallback detail when the service gives no usable message.
const GENERIC_FAILURE: &str = "Please check your payment details and try again.";

/// A user-visible notice for a submission outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub detail: String,
    /// Whether the dialog should send the user to the login flow.
    pub redirect_to_login: bool,
}

/// The notice shown when a submission is attempted without a session.
///
/// Used both for the dialog's own short circuit and for the service's
/// `Unauthorized` error.
pub fn auth_required() -> Notice {
    Notice {
        title: "Authentication required",
        detail: "You need to login to make a payment".to_string(),
        redirect_to_login: true,
    }
}

/// The notice for a failed submission, by error classification.
pub fn failure_notice(error: &PaymentError) -> Notice {
    if matches!(error, PaymentError::Unauthorized(_)) {
        return auth_required();
    }

    if error.status() >= 500 {
        return Notice {
            title: "Server Error",
            detail: "Something went wrong on our end. Please try again later.".to_string(),
            redirect_to_login: false,
        };
    }

    let message = error.message();
    Notice {
        title: "Payment Failed",
        detail: if message.is_empty() {
            GENERIC_FAILURE.to_string()
        } else {
            message.to_string()
        },
        redirect_to_login: false,
    }
}

/// The detail line for a successful submission.
pub fn success_detail(request: &PaymentRequest) -> String {
    format!(
        "You sent {} {} to {}",
        request.amount, request.currency, request.recipient
    )
}
