//! Mock submission backends for testing without randomness or a network.

use crate::errors::{PaymentError, Result};
use crate::models::{PaymentRequest, PaymentResult};
use crate::service::{OutcomeProvider, PaymentBackend, SimulatedOutcome};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Outcome provider that always returns the same outcome.
#[derive(Debug, Clone, Copy)]
pub struct FixedOutcomes {
    outcome: SimulatedOutcome,
}

impl FixedOutcomes {
    pub fn new(outcome: SimulatedOutcome) -> Self {
        Self { outcome }
    }

    pub fn success() -> Self {
        Self::new(SimulatedOutcome::Success)
    }

    pub fn bad_request() -> Self {
        Self::new(SimulatedOutcome::BadRequest)
    }

    pub fn server_error() -> Self {
        Self::new(SimulatedOutcome::ServerError)
    }
}

impl OutcomeProvider for FixedOutcomes {
    fn draw(&self) -> SimulatedOutcome {
        self.outcome
    }
}

/// Backend that counts invocations and resolves instantly to a canned
/// outcome.
///
/// Useful for asserting that a flow did (or did not) reach the network
/// step.
pub struct RecordingBackend {
    calls: AtomicUsize,
    outcome: SimulatedOutcome,
}

impl RecordingBackend {
    pub fn new(outcome: SimulatedOutcome) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            outcome,
        }
    }

    pub fn succeeding() -> Self {
        Self::new(SimulatedOutcome::Success)
    }

    /// Number of times `execute` was invoked.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PaymentBackend for RecordingBackend {
    async fn execute(
        &self,
        _request: &PaymentRequest,
        transaction_id: &str,
    ) -> Result<PaymentResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match self.outcome {
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
