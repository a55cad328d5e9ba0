//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `transaction` - Transaction requests and the gateway's transaction model
//! - `transparent_redirect` - Descriptor encoding and callback validation

pub mod transaction;
pub mod transparent_redirect;
