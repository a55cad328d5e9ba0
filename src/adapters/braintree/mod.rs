//! Braintree gateway adapter.
//!
//! Implements the `PayloadSigner` port with Braintree's HMAC-SHA1 scheme and
//! exposes the transparent redirect flow for a configured merchant.
//!
//! # Security
//!
//! - Signatures are compared in constant time
//! - The private key is held in `secrecy` types and only used to derive the
//!   HMAC key
//!
//! # Configuration
//!
//! Required environment variables:
//! - `BRAINTREE__GATEWAY__MERCHANT_ID`
//! - `BRAINTREE__GATEWAY__PUBLIC_KEY`
//! - `BRAINTREE__GATEWAY__PRIVATE_KEY`

mod hmac_signer;
mod transparent_redirect_gateway;

pub use hmac_signer::{Credentials, HmacSigner};
pub use transparent_redirect_gateway::TransparentRedirectGateway;
