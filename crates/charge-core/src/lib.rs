//! # charge-core
//!
//! Core types and traits for stripe-charge-rs.
//!
//! This crate provides:
//! - `PaymentBackend` trait for anything that can submit a charge
//! - `ChargeRequest` and `Charge` for the request/result pair
//! - `create_charge`, the adapter that builds and submits a charge
//! - `PaymentError` for typed error handling
//! - `testing::FixedResponseBackend`, a backend with a canned outcome
//!   (behind the `testing` feature)
//!
//! ## Example
//!
//! ```rust,ignore
//! use charge_core::{create_charge, PaymentBackend};
//! use charge_stripe::StripeChargeBackend;
//!
//! let backend = StripeChargeBackend::from_env()?;
//!
//! // 10.00 EUR from a tokenized card
//! create_charge(&backend, 1000, "eur", "tok_visa").await?;
//! ```

pub mod adapter;
pub mod backend;
pub mod charge;
pub mod error;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

// Re-exports for convenience
pub use adapter::create_charge;
pub use backend::{BoxedPaymentBackend, PaymentBackend};
pub use charge::{Charge, ChargeRequest, ChargeStatus};
pub use error::{PaymentError, PaymentResult};
