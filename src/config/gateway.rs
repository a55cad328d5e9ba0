//! Gateway configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;

/// Braintree gateway configuration
///
/// Holds the merchant identity and the credential pair used to sign
/// transparent redirect descriptors. The private key never leaves
/// `SecretString` except when the signing key is derived.
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    /// Gateway environment
    #[serde(default)]
    pub environment: Environment,

    /// Merchant ID from the Braintree control panel
    pub merchant_id: String,

    /// Public API key
    pub public_key: String,

    /// Private API key
    pub private_key: SecretString,
}

/// Braintree gateway environment
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Qa,
    #[default]
    Sandbox,
    Production,
}

impl Environment {
    /// Base URL of the gateway API for this environment
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Development => "http://localhost:3000",
            Environment::Qa => "https://gateway.qa.braintreepayments.com:443",
            Environment::Sandbox => "https://api.sandbox.braintreegateway.com:443",
            Environment::Production => "https://api.braintreegateway.com:443",
        }
    }
}

impl GatewayConfig {
    /// Create a gateway configuration from explicit values
    pub fn new(
        environment: Environment,
        merchant_id: impl Into<String>,
        public_key: impl Into<String>,
        private_key: impl Into<String>,
    ) -> Self {
        Self {
            environment,
            merchant_id: merchant_id.into(),
            public_key: public_key.into(),
            private_key: SecretString::new(private_key.into()),
        }
    }

    /// URL of this merchant on the gateway
    pub fn merchant_url(&self) -> String {
        format!(
            "{}/merchants/{}",
            self.environment.base_url(),
            self.merchant_id
        )
    }

    /// Check if pointed at the production gateway
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Validate gateway configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.merchant_id.is_empty() {
            return Err(ValidationError::MissingRequired("MERCHANT_ID"));
        }
        if self.public_key.is_empty() {
            return Err(ValidationError::MissingRequired("PUBLIC_KEY"));
        }
        if self.private_key.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("PRIVATE_KEY"));
        }

        // The merchant ID becomes a URL path segment
        if !self
            .merchant_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(ValidationError::InvalidMerchantId);
        }

        Ok(())
    }
}
