//! # Charge Adapter
//!
//! Builds a charge request through a backend and submits it, reporting only
//! whether the submission failed.

use crate::backend::PaymentBackend;
use crate::error::PaymentResult;

/// Create a charge through `backend`.
///
/// Calls `build_params` once, then `submit` once. Inputs are not validated;
/// zero or negative amounts and unknown currencies go to the backend as-is.
/// The created charge is dropped. A failed submission comes back as the exact
/// error the backend returned.
///
/// # Example
///
/// ```rust,ignore
/// use charge_core::create_charge;
///
/// create_charge(&backend, 1, "EUR", "123456789").await?;
/// ```
pub async fn create_charge<B>(
    backend: &B,
    amount: i64,
    currency: &str,
    source_id: &str,
) -> PaymentResult<()>
where
    B: PaymentBackend + ?Sized,
{
    let request = backend.build_params(amount, currency, source_id);
    backend.submit(request).await.map(|_charge| ())
}
