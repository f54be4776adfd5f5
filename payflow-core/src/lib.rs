//! Payflow Demo Core Library
//!
//! Shared business logic for the payflow demo applications: session state
//! backed by a local marker file, payment form validation, and the payment
//! submission service with pluggable backends (simulated or HTTP).

pub mod errors;
pub mod models;
pub mod service;
pub mod session;
pub mod testing;
pub mod validate;

pub use errors::{PaymentError, Result};
pub use models::{Currency, PaymentRequest, PaymentResult};
pub use service::{
    HttpBackend, HttpBackendConfig, OutcomeProvider, OutcomeSplit, PaymentBackend, PaymentService,
    SimulatedBackend, SimulatedOutcome,
};
pub use session::{Session, SessionStore};
pub use validate::{FieldErrors, PaymentForm};
