//! Payment submission service.
//!
//! [`PaymentService::submit`] runs the full flow: structural check, session
//! gate, then the backend call. Backends are pluggable behind
//! [`PaymentBackend`]: the simulated backend sleeps a fixed latency and
//! draws an outcome from an injectable [`OutcomeProvider`], the HTTP
//! backend POSTs the request to a local endpoint and maps the response
//! status onto the error taxonomy.

use crate::errors::{PaymentError, Result};
use crate::models::{new_transaction_id, Currency, PaymentRequest, PaymentResult};
use crate::session::Session;
use async_trait::async_trait;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// Latency of the simulated network step.
const DEFAULT_LATENCY: Duration = Duration::from_millis(1000);
/// Endpoint of the local payment service in the HTTP variant.
const DEFAULT_ENDPOINT: &str = "http://localhost:3001/payments";

/// Outcome of a simulated submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulatedOutcome {
    Success,
    BadRequest,
    ServerError,
}

/// Draws the outcome for a simulated submission.
///
/// The default implementation draws at random from a configurable
/// distribution; the test suite substitutes a fixed provider.
pub trait OutcomeProvider: Send + Sync {
    fn draw(&self) -> SimulatedOutcome;
}

/// Probability split for the random outcome draw.
///
/// `success` and `bad_request` must each be in `[0, 1]` and sum to at most
/// 1; the remainder is the server-error probability.
#[derive(Debug, Clone, Copy)]
pub struct OutcomeSplit {
    pub success: f64,
    pub bad_request: f64,
}

impl Default for OutcomeSplit {
    fn default() -> Self {
        Self {
            success: 0.80,
            bad_request: 0.10,
        }
    }
}

/// Default provider: a uniform draw against the configured split.
#[derive(Debug, Clone, Default)]
pub struct RandomOutcomes {
    split: OutcomeSplit,
}

impl RandomOutcomes {
    pub fn new(split: OutcomeSplit) -> Self {
        Self { split }
    }
}

impl OutcomeProvider for RandomOutcomes {
    fn draw(&self) -> SimulatedOutcome {
        let roll: f64 = rand::thread_rng().gen();
        if roll < self.split.success {
            SimulatedOutcome::Success
        } else if roll < self.split.success + self.split.bad_request {
            SimulatedOutcome::BadRequest
        } else {
            SimulatedOutcome::ServerError
        }
    }
}

/// Executes the network step of a submission.
#[async_trait]
pub trait PaymentBackend: Send + Sync {
    /// Attempt the payment, using the client-generated transaction id.
    async fn execute(
        &self,
        request: &PaymentRequest,
        transaction_id: &str,
    ) -> Result<PaymentResult>;
}

/// Backend that simulates the network step locally.
///
/// Sleeps a fixed latency, then resolves to the drawn outcome. The
/// non-determinism is intentional: it exercises all three feedback paths
/// in the dialog.
pub struct SimulatedBackend {
    latency: Duration,
    outcomes: Box<dyn OutcomeProvider>,
}

impl SimulatedBackend {
    pub fn new() -> Self {
        Self {
            latency: DEFAULT_LATENCY,
            outcomes: Box::new(RandomOutcomes::default()),
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn with_outcomes(mut self, outcomes: impl OutcomeProvider + 'static) -> Self {
        self.outcomes = Box::new(outcomes);
        self
    }
}

impl Default for SimulatedBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PaymentBackend for SimulatedBackend {
    async fn execute(
        &self,
        _request: &PaymentRequest,
        transaction_id: &str,
    ) -> Result<PaymentResult> {
        tokio::time::sleep(self.latency).await;

        match self.outcomes.draw() {
            SimulatedOutcome::Success => Ok(PaymentResult::succeeded(
                transaction_id,
                "Payment processed successfully",
            )),
            SimulatedOutcome::BadRequest => {
                Err(PaymentError::BadRequest("Invalid payment details".to_string()))
            }
            SimulatedOutcome::ServerError => Err(PaymentError::ServerError {
                status: 500,
                message: "Server error occurred".to_string(),
            }),
        }
    }
}

/// Configuration for the HTTP submission backend.
#[derive(Debug, Clone)]
pub struct HttpBackendConfig {
    /// Full URL the request body is POSTed to.
    pub endpoint: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl HttpBackendConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout_secs: 10,
        }
    }

    /// The fixed local endpoint the demo's backend variant talks to.
    pub fn local() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl Default for HttpBackendConfig {
    fn default() -> Self {
        Self::local()
    }
}

/// JSON body POSTed to the payment endpoint.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SubmissionBody<'a> {
    recipient: &'a str,
    currency: Currency,
    amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    transaction_id: &'a str,
}

/// JSON body expected back on a 2xx response.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubmissionReply {
    transaction_id: String,
    #[serde(default)]
    message: Option<String>,
}

/// Backend that POSTs the request to a real payment endpoint.
pub struct HttpBackend {
    config: HttpBackendConfig,
    client: reqwest::Client,
}

impl HttpBackend {
    pub fn new(config: HttpBackendConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| PaymentError::ServerError {
                status: 500,
                message: format!("failed to build HTTP client: {}", e),
            })?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &HttpBackendConfig {
        &self.config
    }

    fn map_transport_error(&self, error: reqwest::Error) -> PaymentError {
        if error.is_timeout() {
            PaymentError::ServerError {
                status: 504,
                message: format!("payment endpoint timed out after {}s", self.config.timeout_secs),
            }
        } else if error.is_connect() {
            PaymentError::ServerError {
                status: 503,
                message: format!("could not reach {}: {}", self.config.endpoint, error),
            }
        } else {
            PaymentError::ServerError {
                status: 502,
                message: format!("payment request failed: {}", error),
            }
        }
    }
}

#[async_trait]
impl PaymentBackend for HttpBackend {
    async fn execute(
        &self,
        request: &PaymentRequest,
        transaction_id: &str,
    ) -> Result<PaymentResult> {
        let body = SubmissionBody {
            recipient: &request.recipient,
            currency: request.currency,
            amount: request.amount,
            description: request.description.as_deref(),
            transaction_id,
        };

        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            tracing::debug!(status = status.as_u16(), "payment endpoint rejected request");
            return Err(PaymentError::from_status(status.as_u16(), text));
        }

        let reply: SubmissionReply =
            response.json().await.map_err(|_| PaymentError::ServerError {
                status: 500,
                message: "malformed response from payment endpoint".to_string(),
            })?;
        if reply.transaction_id.is_empty() {
            return Err(PaymentError::ServerError {
                status: 500,
                message: "payment endpoint returned no transaction id".to_string(),
            });
        }

        Ok(PaymentResult {
            success: true,
            transaction_id: Some(reply.transaction_id),
            message: reply.message,
        })
    }
}

/// Runs validated payment requests through the configured backend.
pub struct PaymentService {
    backend: Arc<dyn PaymentBackend>,
}

impl PaymentService {
    pub fn new(backend: Arc<dyn PaymentBackend>) -> Self {
        Self { backend }
    }

    /// Service over the simulated backend with default latency and split.
    pub fn simulated() -> Self {
        Self::new(Arc::new(SimulatedBackend::default()))
    }

    /// Service over the HTTP backend for the given endpoint.
    pub fn over_http(config: HttpBackendConfig) -> Result<Self> {
        Ok(Self::new(Arc::new(HttpBackend::new(config)?)))
    }

    /// Submit a payment request.
    ///
    /// Fails fast with `BadRequest` on structurally broken requests and
    /// with `Unauthorized` when the session snapshot is not authenticated;
    /// neither path reaches the backend. A failed submission has no
    /// observable side effect beyond the returned error.
    pub async fn submit(
        &self,
        request: &PaymentRequest,
        session: &Session,
    ) -> Result<PaymentResult> {
        if request.recipient.is_empty() || !request.amount.is_finite() || request.amount <= 0.0 {
            return Err(PaymentError::BadRequest(
                "Missing required payment information".to_string(),
            ));
        }

        if !session.is_authenticated() {
            return Err(PaymentError::Unauthorized(
                "Authentication required".to_string(),
            ));
        }

        let transaction_id = new_transaction_id();
        tracing::debug!(%transaction_id, recipient = %request.recipient, "submitting payment");

        let result = self.backend.execute(request, &transaction_id).await?;
        if result.success && result.transaction_id.as_deref().unwrap_or("").is_empty() {
            return Err(PaymentError::ServerError {
                status: 500,
                message: "backend reported success without a transaction id".to_string(),
            });
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FixedOutcomes;

    fn request() -> PaymentRequest {
        PaymentRequest::new("a@b.com", Currency::Btc, 1.5)
    }

    fn fast_service(outcome: SimulatedOutcome) -> PaymentService {
        PaymentService::new(Arc::new(
            SimulatedBackend::new()
                .with_latency(Duration::from_millis(0))
                .with_outcomes(FixedOutcomes::new(outcome)),
        ))
    }

    #[test]
    fn test_empty_recipient_is_a_bad_request() {
        let service = fast_service(SimulatedOutcome::Success);
        let broken = PaymentRequest::new("", Currency::Btc, 1.0);

        let err = tokio_test::block_on(service.submit(&broken, &Session::authenticated()))
            .unwrap_err();
        assert_eq!(err.status(), 400);
        assert_eq!(err.message(), "Missing required payment information");
    }

    #[test]
    fn test_unauthenticated_submission_is_rejected() {
        let service = fast_service(SimulatedOutcome::Success);

        let err =
            tokio_test::block_on(service.submit(&request(), &Session::anonymous())).unwrap_err();
        assert_eq!(err, PaymentError::Unauthorized("Authentication required".to_string()));
    }

    #[test]
    fn test_forced_success_carries_transaction_id() {
        let service = fast_service(SimulatedOutcome::Success);

        let result =
            tokio_test::block_on(service.submit(&request(), &Session::authenticated())).unwrap();
        assert!(result.success);
        let id = result.transaction_id.unwrap();
        assert!(id.starts_with("TX-"));
        assert_eq!(result.message.as_deref(), Some("Payment processed successfully"));
    }

    #[test]
    fn test_forced_failures_map_to_their_kinds() {
        let err = tokio_test::block_on(
            fast_service(SimulatedOutcome::BadRequest).submit(&request(), &Session::authenticated()),
        )
        .unwrap_err();
        assert_eq!(err, PaymentError::BadRequest("Invalid payment details".to_string()));

        let err = tokio_test::block_on(
            fast_service(SimulatedOutcome::ServerError)
                .submit(&request(), &Session::authenticated()),
        )
        .unwrap_err();
        assert_eq!(err.status(), 500);
    }

    #[test]
    fn test_outcome_split_boundaries() {
        // An all-success split can never draw a failure, and vice versa.
        let always_success = RandomOutcomes::new(OutcomeSplit {
            success: 1.0,
            bad_request: 0.0,
        });
        let never_success = RandomOutcomes::new(OutcomeSplit {
            success: 0.0,
            bad_request: 0.0,
        });

        for _ in 0..100 {
            assert_eq!(always_success.draw(), SimulatedOutcome::Success);
            assert_eq!(never_success.draw(), SimulatedOutcome::ServerError);
        }
    }
}
