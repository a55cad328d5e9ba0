//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `braintree` - HMAC signer and transparent redirect gateway

pub mod braintree;

pub use braintree::{Credentials, HmacSigner, TransparentRedirectGateway};
