//! # Stripe Configuration
//!
//! Configuration management for the Stripe charge backend.
//! Secrets are loaded from environment variables.

use charge_core::PaymentError;
use std::env;
use std::fmt;
use std::time::Duration;

const DEFAULT_API_BASE_URL: &str = "https://api.stripe.com";
const DEFAULT_API_VERSION: &str = "2024-12-18.acacia";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Stripe API configuration
#[derive(Clone)]
pub struct StripeConfig {
    /// Secret API key (sk_test_... or sk_live_...)
    pub secret_key: String,

    /// API base URL (for testing/mocking)
    pub api_base_url: String,

    /// API version
    pub api_version: String,

    /// HTTP request timeout
    pub timeout: Duration,
}

impl StripeConfig {
    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `STRIPE_SECRET_KEY`
    ///
    /// Optional env vars:
    /// - `STRIPE_API_BASE_URL` (default `https://api.stripe.com`)
    /// - `STRIPE_TIMEOUT_SECS` (default 30)
    pub fn from_env() -> Result<Self, PaymentError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let secret_key = env::var("STRIPE_SECRET_KEY").map_err(|_| {
            PaymentError::Configuration("STRIPE_SECRET_KEY not set".to_string())
        })?;
        validate_secret_key(&secret_key)?;

        let mut config = Self::new(secret_key);

        if let Ok(url) = env::var("STRIPE_API_BASE_URL") {
            config.api_base_url = url;
        }

        if let Ok(secs) = env::var("STRIPE_TIMEOUT_SECS") {
            config.timeout = parse_timeout_secs(&secs)?;
        }

        Ok(config)
    }

    /// Create config with an explicit secret key (for testing)
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Check if using test keys
    pub fn is_test_mode(&self) -> bool {
        self.secret_key.starts_with("sk_test_")
    }

    /// Check if using live keys
    pub fn is_live_mode(&self) -> bool {
        self.secret_key.starts_with("sk_live_")
    }

    /// Get authorization header value
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.secret_key)
    }

    /// Charges endpoint URL
    pub fn charges_url(&self) -> String {
        format!("{}/v1/charges", self.api_base_url.trim_end_matches('/'))
    }

    /// Builder: set custom API base URL (for testing)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Builder: pin a different API version
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Builder: set HTTP request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl fmt::Debug for StripeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StripeConfig")
            .field("secret_key", &"[REDACTED]")
            .field("api_base_url", &self.api_base_url)
            .field("api_version", &self.api_version)
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn validate_secret_key(key: &str) -> Result<(), PaymentError> {
    if !key.starts_with("sk_test_") && !key.starts_with("sk_live_") {
        return Err(PaymentError::Configuration(
            "STRIPE_SECRET_KEY must start with sk_test_ or sk_live_".to_string(),
        ));
    }
    Ok(())
}

fn parse_timeout_secs(value: &str) -> Result<Duration, PaymentError> {
    value
        .trim()
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|_| {
            PaymentError::Configuration(format!(
                "STRIPE_TIMEOUT_SECS must be a whole number of seconds, got {:?}",
                value
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, MutexGuard};

    #[test]
    fn test_config_modes() {
        let config = StripeConfig::new("sk_test_abc123");
        assert!(config.is_test_mode());
        assert!(!config.is_live_mode());

        let config = StripeConfig::new("sk_live_abc123");
        assert!(!config.is_test_mode());
        assert!(config.is_live_mode());
    }

    #[test]
    fn test_auth_header() {
        let config = StripeConfig::new("sk_test_abc123");
        assert_eq!(config.auth_header(), "Bearer sk_test_abc123");
    }

    #[test]
    fn test_charges_url() {
        let config = StripeConfig::new("sk_test_abc123");
        assert_eq!(config.charges_url(), "https://api.stripe.com/v1/charges");

        let config = config.with_api_base_url("http://127.0.0.1:9999/");
        assert_eq!(config.charges_url(), "http://127.0.0.1:9999/v1/charges");
    }

    #[test]
    fn test_secret_key_validation() {
        assert!(validate_secret_key("sk_test_abc").is_ok());
        assert!(validate_secret_key("sk_live_abc").is_ok());
        assert!(validate_secret_key("pk_test_abc").is_err());
        assert!(validate_secret_key("").is_err());
    }

    #[test]
    fn test_parse_timeout() {
        assert_eq!(parse_timeout_secs("5").unwrap(), Duration::from_secs(5));
        assert_eq!(parse_timeout_secs(" 60 ").unwrap(), Duration::from_secs(60));
        assert!(matches!(
            parse_timeout_secs("soon"),
            Err(PaymentError::Configuration(_))
        ));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = StripeConfig::new("sk_test_very_secret");
        let debug = format!("{:?}", config);

        assert!(!debug.contains("sk_test_very_secret"));
        assert!(debug.contains("[REDACTED]"));
    }

    // env vars are process-wide; tests touching them take this lock
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const ENV_VARS: [&str; 3] = [
        "STRIPE_SECRET_KEY",
        "STRIPE_API_BASE_URL",
        "STRIPE_TIMEOUT_SECS",
    ];

    fn lock_env() -> MutexGuard<'static, ()> {
        let guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        for var in ENV_VARS {
            env::remove_var(var);
        }
        guard
    }

    #[test]
    fn test_from_env_missing_key() {
        let _env = lock_env();

        let result = StripeConfig::from_env();
        assert!(matches!(result, Err(PaymentError::Configuration(_))));
    }

    #[test]
    fn test_from_env_defaults() {
        let _env = lock_env();
        env::set_var("STRIPE_SECRET_KEY", "sk_test_from_env");

        let config = StripeConfig::from_env().unwrap();
        assert_eq!(config.secret_key, "sk_test_from_env");
        assert_eq!(config.api_base_url, "https://api.stripe.com");
        assert_eq!(config.timeout, Duration::from_secs(30));

        env::remove_var("STRIPE_SECRET_KEY");
    }

    #[test]
    fn test_from_env_overrides() {
        let _env = lock_env();
        env::set_var("STRIPE_SECRET_KEY", "sk_live_from_env");
        env::set_var("STRIPE_API_BASE_URL", "http://localhost:12111");
        env::set_var("STRIPE_TIMEOUT_SECS", "5");

        let config = StripeConfig::from_env().unwrap();
        assert!(config.is_live_mode());
        assert_eq!(config.api_base_url, "http://localhost:12111");
        assert_eq!(config.charges_url(), "http://localhost:12111/v1/charges");
        assert_eq!(config.timeout, Duration::from_secs(5));

        for var in ENV_VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_from_env_rejects_publishable_key() {
        let _env = lock_env();
        env::set_var("STRIPE_SECRET_KEY", "pk_test_wrong_kind");

        let err = StripeConfig::from_env().unwrap_err();
        assert_eq!(
            err,
            PaymentError::Configuration(
                "STRIPE_SECRET_KEY must start with sk_test_ or sk_live_".to_string()
            )
        );

        env::remove_var("STRIPE_SECRET_KEY");
    }

    #[test]
    fn test_from_env_rejects_bad_timeout() {
        let _env = lock_env();
        env::set_var("STRIPE_SECRET_KEY", "sk_test_from_env");
        env::set_var("STRIPE_TIMEOUT_SECS", "soon");

        let err = StripeConfig::from_env().unwrap_err();
        assert!(matches!(err, PaymentError::Configuration(ref msg) if msg.contains("soon")));

        for var in ENV_VARS {
            env::remove_var(var);
        }
    }
}
