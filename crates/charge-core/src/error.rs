//! # Payment Error Types
//!
//! Typed error handling for charge submission.
//! Every backend operation returns `Result<T, PaymentError>`.

use thiserror::Error;

/// Error type for all backend operations.
///
/// Cloneable and comparable so a backend's failure can be handed back to the
/// caller untouched and checked for identity in tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentError {
    /// Configuration errors (missing keys, invalid config)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Payment provider API error
    #[error("Provider error [{provider}]: {message}")]
    ProviderError { provider: String, message: String },

    /// Network/HTTP error communicating with provider
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Payment was declined
    #[error("Payment declined: {reason}")]
    PaymentDeclined { reason: String },

    /// Rate limited by provider
    #[error("Rate limited by {provider}, retry after {retry_after_secs} seconds")]
    RateLimited {
        provider: String,
        retry_after_secs: u64,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Opaque backend failure, displayed exactly as the backend reported it
    #[error("{0}")]
    Backend(String),
}

impl PaymentError {
    /// Returns true if this error is worth retrying.
    ///
    /// Nothing in this crate retries; callers decide.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            PaymentError::NetworkError(_)
                | PaymentError::RateLimited { .. }
                | PaymentError::ProviderError { .. }
        )
    }
}

/// Result type alias for payment operations
pub type PaymentResult<T> = Result<T, PaymentError>;
