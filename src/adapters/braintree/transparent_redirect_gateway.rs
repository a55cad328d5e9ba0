//! Transparent redirect gateway.
//!
//! Binds the redirect codec to a merchant: knows where the redirect form
//! posts and offers typed encoders for each supported redirect kind.
//!
//! # Usage
//!
//! ```ignore
//! let gateway = TransparentRedirectGateway::from_config(&config.gateway);
//! let tr_data = gateway.transaction_data(&data)?;
//! // <form method="post" action="{gateway.form_url()}">
//! //   <input type="hidden" name="braintree" value="{tr_data}">
//! ```

use std::sync::Arc;

use crate::config::GatewayConfig;
use crate::domain::transparent_redirect::{
    update_customer_form, CallbackQuery, CustomerRedirectData, RedirectCodec, RedirectError,
    RedirectKind, ToForm, TransactionRedirectData,
};
use crate::ports::PayloadSigner;

use super::hmac_signer::{Credentials, HmacSigner};

/// Transparent redirect entry point for one merchant.
#[derive(Debug, Clone)]
pub struct TransparentRedirectGateway {
    merchant_url: String,
    codec: RedirectCodec,
}

impl TransparentRedirectGateway {
    /// Name of the hidden form field carrying the signed descriptor.
    pub const FORM_FIELD_NAME: &'static str = "braintree";

    /// Path, relative to the merchant URL, the redirect form posts to.
    const FORM_PATH: &'static str = "/transparent_redirect_requests";

    /// Create a gateway for `merchant_url` signing with `signer`.
    pub fn new(merchant_url: impl Into<String>, signer: Arc<dyn PayloadSigner>) -> Self {
        Self {
            merchant_url: merchant_url.into(),
            codec: RedirectCodec::new(signer),
        }
    }

    /// Create a gateway from configuration, signing with HMAC-SHA1.
    pub fn from_config(config: &GatewayConfig) -> Self {
        let signer = HmacSigner::new(&Credentials::from_config(config));
        Self::new(config.merchant_url(), Arc::new(signer))
    }

    pub fn merchant_url(&self) -> &str {
        &self.merchant_url
    }

    /// URL the redirect form must post to.
    pub fn form_url(&self) -> String {
        format!("{}{}", self.merchant_url, Self::FORM_PATH)
    }

    pub fn codec(&self) -> &RedirectCodec {
        &self.codec
    }

    /// Signed descriptor for creating a transaction.
    ///
    /// # Errors
    ///
    /// Returns an encoding error if the redirect URL is empty or a custom
    /// field key cannot be encoded.
    pub fn transaction_data(&self, data: &TransactionRedirectData) -> Result<String, RedirectError> {
        self.codec.build_request_descriptor(
            RedirectKind::CreateTransaction,
            &data.redirect_url,
            &data.to_form(),
        )
    }

    /// Signed descriptor for creating a customer.
    pub fn customer_data(&self, data: &CustomerRedirectData) -> Result<String, RedirectError> {
        self.codec.build_request_descriptor(
            RedirectKind::CreateCustomer,
            &data.redirect_url,
            &data.to_form(),
        )
    }

    /// Signed descriptor for updating the customer `customer_id`.
    pub fn update_customer_data(
        &self,
        customer_id: &str,
        data: &CustomerRedirectData,
    ) -> Result<String, RedirectError> {
        self.codec.build_request_descriptor(
            RedirectKind::UpdateCustomer,
            &data.redirect_url,
            &update_customer_form(customer_id, data),
        )
    }

    /// See [`RedirectCodec::validate_query_string`].
    pub fn validate_query_string(&self, query: &str) -> Result<bool, RedirectError> {
        self.codec.validate_query_string(query)
    }

    /// See [`RedirectCodec::parse_query_string`].
    pub fn parse_query_string(&self, query: &str) -> Result<CallbackQuery, RedirectError> {
        self.codec.parse_query_string(query)
    }
}
