//! Pay command - the payment dialog
//!
//! Collects recipient, currency, amount, and description with live
//! validation, gates on the session, submits through the payment service,
//! and maps the outcome to user feedback. Fields given as flags skip their
//! prompts; with all required fields present the dialog runs
//! non-interactively.

use anyhow::{Context, Result};
use payflow_core::validate::{self, PaymentForm};
use payflow_core::{Currency, HttpBackendConfig, PaymentRequest, PaymentService};
use std::path::Path;

use crate::feedback;
use crate::ui;

#[allow(clippy::too_many_arguments)]
pub async fn run(
    storage_dir: &Path,
    recipient: Option<String>,
    currency: Option<String>,
    amount: Option<String>,
    description: Option<String>,
    endpoint: Option<String>,
    verbose: bool,
) -> Result<()> {
    ui::header("Make a Payment");
    ui::info("Fill in the details to complete your payment");

    let service = match &endpoint {
        Some(url) => PaymentService::over_http(HttpBackendConfig::new(url.clone()))
            .context("Failed to set up the HTTP payment backend")?,
        None => PaymentService::simulated(),
    };
    if verbose {
        match &endpoint {
            Some(url) => ui::info(&format!("Submitting to {}", url)),
            None => ui::info("Using the simulated backend"),
        }
    }

    let interactive = recipient.is_none() || currency.is_none() || amount.is_none();
    let request = collect_request(recipient, currency, amount, description)?;

    let store = super::session_store(storage_dir);
    let session = store.load();

    // The service re-checks the session, but an unauthenticated user never
    // reaches it from the dialog.
    if !session.is_authenticated() {
        let notice = feedback::auth_required();
        ui::error(notice.title);
        ui::info(&notice.detail);
        return redirect_to_login(storage_dir, interactive, verbose).await;
    }

    loop {
        let spinner = ui::spinner("Processing payment...");
        let outcome = service.submit(&request, &session).await;
        spinner.finish_and_clear();

        match outcome {
            Ok(result) => {
                ui::success("Payment successful!");
                ui::info(&feedback::success_detail(&request));
                if let Some(id) = result.transaction_id.as_deref() {
                    ui::key_value("Transaction", id);
                }
                return Ok(());
            }
            Err(error) => {
                tracing::debug!(status = error.status(), "payment failed");
                let notice = feedback::failure_notice(&error);
                ui::error(notice.title);
                ui::info(&notice.detail);

                if notice.redirect_to_login {
                    return redirect_to_login(storage_dir, interactive, verbose).await;
                }

                if !interactive {
                    anyhow::bail!("payment failed: {}", error);
                }
                // The form keeps its values; the user decides whether to
                // submit them again.
                if ui::confirm("Try again with the same details?", false)? {
                    continue;
                }
                return Ok(());
            }
        }
    }
}

/// Build a validated request from flags, prompting for whatever is missing.
fn collect_request(
    recipient: Option<String>,
    currency: Option<String>,
    amount: Option<String>,
    description: Option<String>,
) -> Result<PaymentRequest> {
    let form = if recipient.is_some() && currency.is_some() && amount.is_some() {
        PaymentForm {
            recipient: recipient.unwrap_or_default(),
            currency: currency.unwrap_or_default(),
            amount: amount.unwrap_or_default(),
            description: description.unwrap_or_default(),
        }
    } else {
        prompt_form(recipient, currency, amount, description)?
    };

    match validate::validate(&form) {
        Ok(request) => Ok(request),
        Err(errors) => {
            for (field, message) in errors.iter() {
                ui::error(&format!("{}: {}", field, message));
            }
            anyhow::bail!("invalid payment details")
        }
    }
}

/// Prompt for the missing fields, validating each one live.
fn prompt_form(
    recipient: Option<String>,
    currency: Option<String>,
    amount: Option<String>,
    description: Option<String>,
) -> Result<PaymentForm> {
    let recipient = match recipient {
        Some(value) => value,
        None => ui::input_validated("To (email)", |input: &String| {
            validate::validate_recipient(input)
        })?,
    };

    let currency = match currency {
        Some(value) => value,
        None => {
            let labels: Vec<&str> = Currency::ALL.iter().map(|c| c.label()).collect();
            let index = ui::select("From", &labels)?;
            Currency::ALL[index].ticker().to_string()
        }
    };

    let amount = match amount {
        Some(value) => value,
        None => ui::input_validated("Amount", |input: &String| {
            validate::validate_amount(input).map(|_| ())
        })?,
    };

    let description = match description {
        Some(value) => Some(value),
        None => ui::optional_input("Description (optional)")?,
    };

    Ok(PaymentForm {
        recipient,
        currency,
        amount,
        description: description.unwrap_or_default(),
    })
}

/// The deferred "navigation" to the login view after an auth failure.
async fn redirect_to_login(storage_dir: &Path, interactive: bool, verbose: bool) -> Result<()> {
    if !interactive {
        anyhow::bail!("authentication required");
    }
    tokio::time::sleep(super::LOGIN_REDIRECT_DELAY).await;
    super::login::run(storage_dir, verbose).await
}
