//! # Payment Backend Trait
//!
//! The seam between the charge adapter and whatever actually moves money.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   PaymentBackend (trait)                    │
//! │  ├── build_params()                                         │
//! │  ├── submit()                                               │
//! │  └── provider_name()                                        │
//! └─────────────────────────────────────────────────────────────┘
//!                            ▲
//!               ┌────────────┴────────────┐
//!               │                         │
//!  ┌────────────┴───────────┐ ┌───────────┴────────────┐
//!  │  StripeChargeBackend   │ │  FixedResponseBackend  │
//!  │   (charge-stripe)      │ │   (testing)            │
//!  └────────────────────────┘ └────────────────────────┘
//! ```

use crate::charge::{Charge, ChargeRequest};
use crate::error::PaymentResult;
use async_trait::async_trait;
use std::sync::Arc;

/// Core trait for payment backends.
///
/// Implementations hold no per-call state; one handle can serve any number
/// of concurrent charges.
#[async_trait]
pub trait PaymentBackend: Send + Sync {
    /// Build the charge request for this backend.
    ///
    /// The default copies the three values verbatim.
    fn build_params(&self, amount: i64, currency: &str, source_id: &str) -> ChargeRequest {
        ChargeRequest::new(amount, currency, source_id)
    }

    /// Submit a charge request to the payment network.
    ///
    /// # Returns
    /// The created `Charge`, or the provider's failure.
    async fn submit(&self, request: ChargeRequest) -> PaymentResult<Charge>;

    /// Get the provider name (for logging and identification).
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a shared payment backend (dynamic dispatch)
pub type BoxedPaymentBackend = Arc<dyn PaymentBackend>;
