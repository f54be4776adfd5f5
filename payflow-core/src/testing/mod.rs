//! Testing utilities for payflow demos.
//!
//! Mock backends and outcome providers so submission flows can be
//! exercised deterministically, without latency, randomness, or a real
//! endpoint.
//!
//! # Usage
//!
//! ```
//! use payflow_core::testing::FixedOutcomes;
//! use payflow_core::{PaymentService, SimulatedBackend};
//! use std::sync::Arc;
//!
//! let backend = SimulatedBackend::new()
//!     .with_latency(std::time::Duration::ZERO)
//!     .with_outcomes(FixedOutcomes::success());
//! let _service = PaymentService::new(Arc::new(backend));
//! ```

pub mod mock_backend;

pub use mock_backend::{FixedOutcomes, RecordingBackend};
