//! # Test Double
//!
//! A backend that never touches the network: it answers every `submit` with
//! a canned charge or a canned error and remembers what it was asked.

use crate::backend::PaymentBackend;
use crate::charge::{Charge, ChargeRequest};
use crate::error::{PaymentError, PaymentResult};
use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard};

/// A call received by [`FixedResponseBackend`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCall {
    /// `build_params` was called; holds the request it returned
    BuildParams(ChargeRequest),
    /// `submit` was called with this request
    Submit(ChargeRequest),
}

/// Fixed-response payment backend
pub struct FixedResponseBackend {
    outcome: PaymentResult<Charge>,
    calls: Mutex<Vec<BackendCall>>,
}

impl FixedResponseBackend {
    /// Backend whose submissions always succeed with a placeholder charge
    pub fn succeeding() -> Self {
        Self::succeeding_with(Charge::new("ch_fixed", "fixed", 0, ""))
    }

    /// Backend whose submissions always succeed with `charge`
    pub fn succeeding_with(charge: Charge) -> Self {
        Self {
            outcome: Ok(charge),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Backend whose submissions always fail with `error`
    pub fn failing(error: PaymentError) -> Self {
        Self {
            outcome: Err(error),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Calls received so far, oldest first
    pub fn calls(&self) -> Vec<BackendCall> {
        self.lock_calls().clone()
    }

    fn record(&self, call: BackendCall) {
        self.lock_calls().push(call);
    }

    fn lock_calls(&self) -> MutexGuard<'_, Vec<BackendCall>> {
        // a panicking test thread must not hide the log from the others
        self.calls.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl PaymentBackend for FixedResponseBackend {
    fn build_params(&self, amount: i64, currency: &str, source_id: &str) -> ChargeRequest {
        let request = ChargeRequest::new(amount, currency, source_id);
        self.record(BackendCall::BuildParams(request.clone()));
        request
    }

    async fn submit(&self, request: ChargeRequest) -> PaymentResult<Charge> {
        self.record(BackendCall::Submit(request));
        self.outcome.clone()
    }

    fn provider_name(&self) -> &'static str {
        "fixed"
    }
}
