//! # charge-stripe
//!
//! Stripe payment backend for stripe-charge-rs.
//!
//! **StripeChargeBackend** creates charges through the Charges API
//! (`POST /v1/charges`) from an amount, a currency and a tokenized source.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use charge_core::create_charge;
//! use charge_stripe::StripeChargeBackend;
//!
//! // Reads STRIPE_SECRET_KEY (and optionally .env)
//! let backend = StripeChargeBackend::from_env()?;
//!
//! create_charge(&backend, 1000, "eur", "tok_visa").await?;
//! ```

pub mod charge;
pub mod config;

// Re-exports
pub use charge::StripeChargeBackend;
pub use config::StripeConfig;
