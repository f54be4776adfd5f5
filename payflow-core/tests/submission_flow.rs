//! Integration tests for the payment submission flow.
//!
//! Covers the full path from a validated request through the session gate
//! to the backend, with deterministic outcome providers.

use payflow_core::testing::{FixedOutcomes, RecordingBackend};
use payflow_core::{
    Currency, PaymentError, PaymentRequest, PaymentResult, PaymentService, Session,
    SimulatedBackend,
};
use std::sync::Arc;
use std::time::{Duration, Instant};

fn request() -> PaymentRequest {
    PaymentRequest::new("a@b.com", Currency::Btc, 1.5)
}

#[tokio::test]
async fn forced_success_returns_a_transaction_id() {
    let backend = SimulatedBackend::new()
        .with_latency(Duration::from_millis(10))
        .with_outcomes(FixedOutcomes::success());
    let service = PaymentService::new(Arc::new(backend));

    let result = service
        .submit(&request(), &Session::authenticated())
        .await
        .unwrap();

    assert!(result.success);
    let id = result.transaction_id.expect("success carries an id");
    assert!(!id.is_empty());
    assert!(id.starts_with("TX-"));
}

#[tokio::test]
async fn unauthenticated_submission_never_reaches_the_backend() {
    let backend = Arc::new(RecordingBackend::succeeding());
    let service = PaymentService::new(backend.clone());

    let err = service
        .submit(&request(), &Session::anonymous())
        .await
        .unwrap_err();

    assert!(matches!(err, PaymentError::Unauthorized(_)));
    assert_eq!(err.status(), 401);
    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn unauthenticated_submission_fails_before_the_simulated_delay() {
    // A long-latency backend: if the auth check were after the network
    // step, this test would take seconds.
    let backend = SimulatedBackend::new()
        .with_latency(Duration::from_secs(5))
        .with_outcomes(FixedOutcomes::success());
    let service = PaymentService::new(Arc::new(backend));

    let started = Instant::now();
    let err = service
        .submit(&request(), &Session::anonymous())
        .await
        .unwrap_err();

    assert_eq!(err.status(), 401);
    assert!(started.elapsed() < Duration::from_secs(1));
}

#[tokio::test]
async fn structurally_broken_requests_never_reach_the_backend() {
    let backend = Arc::new(RecordingBackend::succeeding());
    let service = PaymentService::new(backend.clone());

    for broken in [
        PaymentRequest::new("", Currency::Btc, 1.0),
        PaymentRequest::new("a@b.com", Currency::Btc, 0.0),
        PaymentRequest::new("a@b.com", Currency::Btc, -1.0),
        PaymentRequest::new("a@b.com", Currency::Btc, f64::NAN),
    ] {
        let err = service
            .submit(&broken, &Session::authenticated())
            .await
            .unwrap_err();
        assert_eq!(err.status(), 400);
    }

    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn forced_server_error_surfaces_as_a_server_error() {
    let backend = SimulatedBackend::new()
        .with_latency(Duration::ZERO)
        .with_outcomes(FixedOutcomes::server_error());
    let service = PaymentService::new(Arc::new(backend));

    let err = service
        .submit(&request(), &Session::authenticated())
        .await
        .unwrap_err();

    assert_eq!(err.status(), 500);
    assert_eq!(err.message(), "Server error occurred");
}

#[tokio::test]
async fn forced_bad_request_carries_the_service_message() {
    let backend = SimulatedBackend::new()
        .with_latency(Duration::ZERO)
        .with_outcomes(FixedOutcomes::bad_request());
    let service = PaymentService::new(Arc::new(backend));

    let err = service
        .submit(&request(), &Session::authenticated())
        .await
        .unwrap_err();

    assert_eq!(
        err,
        PaymentError::BadRequest("Invalid payment details".to_string())
    );
}

#[tokio::test]
async fn authenticated_session_reaches_the_backend_once() {
    let backend = Arc::new(RecordingBackend::succeeding());
    let service = PaymentService::new(backend.clone());

    service
        .submit(&request(), &Session::authenticated())
        .await
        .unwrap();

    assert_eq!(backend.call_count(), 1);
}

#[tokio::test]
async fn success_without_transaction_id_is_rejected() {
    // A backend that violates the success invariant.
    struct BrokenBackend;

    #[async_trait::async_trait]
    impl payflow_core::PaymentBackend for BrokenBackend {
        async fn execute(
            &self,
            _request: &PaymentRequest,
            _transaction_id: &str,
        ) -> payflow_core::Result<PaymentResult> {
            Ok(PaymentResult {
                success: true,
                transaction_id: None,
                message: None,
            })
        }
    }

    let service = PaymentService::new(Arc::new(BrokenBackend));
    let err = service
        .submit(&request(), &Session::authenticated())
        .await
        .unwrap_err();

    assert_eq!(err.status(), 500);
}
