//! # Stripe Charges
//!
//! Network-backed `PaymentBackend` on top of Stripe's Charges API
//! (`POST /v1/charges`).

use crate::config::StripeConfig;
use async_trait::async_trait;
use charge_core::{
    Charge, ChargeRequest, ChargeStatus, PaymentBackend, PaymentError, PaymentResult,
};
use chrono::{DateTime, Utc};
use reqwest::{header::RETRY_AFTER, Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, error, info, instrument};

const PROVIDER: &str = "stripe";

/// Stripe Charges backend
///
/// Sends one form-encoded request per charge. No retries; the only time
/// limit is the HTTP client timeout from `StripeConfig`.
pub struct StripeChargeBackend {
    config: StripeConfig,
    client: Client,
}

impl StripeChargeBackend {
    /// Create a new Stripe charge backend
    pub fn new(config: StripeConfig) -> PaymentResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                PaymentError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { config, client })
    }

    /// Create from environment variables
    pub fn from_env() -> PaymentResult<Self> {
        let config = StripeConfig::from_env()?;
        Self::new(config)
    }

    /// Configuration this backend was built with
    pub fn config(&self) -> &StripeConfig {
        &self.config
    }

    /// Form fields for the Charges API
    fn form_params(request: &ChargeRequest) -> Vec<(&'static str, String)> {
        vec![
            ("amount", request.amount().to_string()),
            ("currency", request.currency().to_string()),
            ("source", request.source_id().to_string()),
        ]
    }
}

#[async_trait]
impl PaymentBackend for StripeChargeBackend {
    #[instrument(
        skip(self, request),
        fields(provider = PROVIDER, amount = request.amount(), currency = %request.currency())
    )]
    async fn submit(&self, request: ChargeRequest) -> PaymentResult<Charge> {
        let url = self.config.charges_url();

        debug!("Submitting Stripe charge to {}", url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", self.config.auth_header())
            .header("Stripe-Version", &self.config.api_version)
            .form(&Self::form_params(&request))
            .send()
            .await
            .map_err(|e| PaymentError::NetworkError(e.to_string()))?;

        let status = response.status();
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let body = response
            .text()
            .await
            .map_err(|e| PaymentError::NetworkError(e.to_string()))?;

        if !status.is_success() {
            let api_error = parse_error_body(&body);
            error!(
                "Stripe API error: status={}, type={}, code={}",
                status,
                api_error.error_type.as_deref().unwrap_or("unknown"),
                api_error.code.as_deref().unwrap_or("none")
            );
            return Err(error_from_response(status, retry_after.as_deref(), &body));
        }

        let charge_response: StripeChargeResponse = serde_json::from_str(&body).map_err(|e| {
            PaymentError::Serialization(format!("Failed to parse Stripe response: {}", e))
        })?;

        info!(
            "Created Stripe charge: id={}, status={}",
            charge_response.id, charge_response.status
        );

        Ok(charge_response.into_charge())
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER
    }
}

// =============================================================================
// Stripe API Types
// =============================================================================

#[derive(Debug, Deserialize)]
struct StripeChargeResponse {
    id: String,
    amount: i64,
    currency: String,
    #[serde(default)]
    status: String,
    #[serde(default)]
    paid: bool,
    #[serde(default)]
    created: Option<i64>,
    #[serde(default)]
    failure_message: Option<String>,
}

impl StripeChargeResponse {
    fn into_charge(self) -> Charge {
        let status = match self.status.as_str() {
            "succeeded" => ChargeStatus::Succeeded,
            "failed" => ChargeStatus::Failed,
            _ => ChargeStatus::Pending,
        };

        Charge {
            id: self.id,
            provider: PROVIDER.to_string(),
            amount: self.amount,
            currency: self.currency,
            status,
            paid: self.paid,
            failure_message: self.failure_message,
            created_at: self
                .created
                .and_then(|ts| DateTime::from_timestamp(ts, 0))
                .unwrap_or_else(Utc::now),
        }
    }
}

#[derive(Debug, Deserialize)]
struct StripeErrorResponse {
    error: StripeError,
}

#[derive(Debug, Default, Deserialize)]
struct StripeError {
    #[serde(rename = "type", default)]
    error_type: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    decline_code: Option<String>,
}

// =============================================================================
// Error Mapping
// =============================================================================

/// Stripe's error object, or an empty one when the body isn't one
fn parse_error_body(body: &str) -> StripeError {
    serde_json::from_str::<StripeErrorResponse>(body)
        .map(|r| r.error)
        .unwrap_or_default()
}

/// Turn a non-2xx Stripe response into a `PaymentError`
fn error_from_response(status: StatusCode, retry_after: Option<&str>, body: &str) -> PaymentError {
    if status == StatusCode::TOO_MANY_REQUESTS {
        return PaymentError::RateLimited {
            provider: PROVIDER.to_string(),
            retry_after_secs: retry_after
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(1),
        };
    }

    let api_error = parse_error_body(body);

    let is_card_error = status == StatusCode::PAYMENT_REQUIRED
        || api_error.error_type.as_deref() == Some("card_error");

    if is_card_error {
        let code = api_error.decline_code.or(api_error.code);
        let reason = match (api_error.message, code) {
            (Some(message), Some(code)) => format!("{} ({})", message, code),
            (Some(message), None) => message,
            (None, Some(code)) => code,
            (None, None) => format!("HTTP {}", status),
        };
        return PaymentError::PaymentDeclined { reason };
    }

    PaymentError::ProviderError {
        provider: PROVIDER.to_string(),
        message: api_error
            .message
            .unwrap_or_else(|| format!("HTTP {}: {}", status, body)),
    }
}
