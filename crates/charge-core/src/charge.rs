//! # Charge Types
//!
//! The charge request handed to a backend and the charge it reports back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Parameters for a single charge.
///
/// Built once per adapter call and consumed by the backend's `submit`.
/// Values are kept exactly as given: no amount, currency or source checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChargeRequest {
    amount: i64,
    currency: String,
    source_id: String,
}

impl ChargeRequest {
    /// Create a charge request
    ///
    /// # Arguments
    /// * `amount` - Amount in the currency's smallest unit (cents for EUR/USD)
    /// * `currency` - Currency code, forwarded as-is
    /// * `source_id` - Tokenized payment source (card token, source id)
    pub fn new(amount: i64, currency: impl Into<String>, source_id: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
            source_id: source_id.into(),
        }
    }

    /// Amount in smallest currency unit
    pub fn amount(&self) -> i64 {
        self.amount
    }

    /// Currency code
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Payment source identifier
    pub fn source_id(&self) -> &str {
        &self.source_id
    }
}

/// Status of a charge as reported by the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChargeStatus {
    /// Funds captured
    Succeeded,
    /// Awaiting asynchronous confirmation
    Pending,
    /// Charge attempt failed
    Failed,
}

impl Default for ChargeStatus {
    fn default() -> Self {
        ChargeStatus::Pending
    }
}

/// A charge created by a payment backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Charge {
    /// Provider's charge ID (e.g. "ch_...")
    pub id: String,

    /// Provider name (e.g. "stripe")
    pub provider: String,

    /// Amount in smallest currency unit
    pub amount: i64,

    /// Currency code as echoed by the provider
    pub currency: String,

    /// Charge status
    #[serde(default)]
    pub status: ChargeStatus,

    /// Whether the charge succeeded or was authorized for later capture
    #[serde(default)]
    pub paid: bool,

    /// Provider's explanation when the charge failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_message: Option<String>,

    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Charge {
    /// Create a succeeded charge
    pub fn new(
        id: impl Into<String>,
        provider: impl Into<String>,
        amount: i64,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            provider: provider.into(),
            amount,
            currency: currency.into(),
            status: ChargeStatus::Succeeded,
            paid: true,
            failure_message: None,
            created_at: Utc::now(),
        }
    }

    /// Check if the charge went through
    pub fn is_successful(&self) -> bool {
        matches!(self.status, ChargeStatus::Succeeded) && self.paid
    }
}
