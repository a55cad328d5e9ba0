//! Braintree Redirect - Transparent Redirect Client
//!
//! This crate builds signed transparent redirect descriptors for the
//! Braintree gateway and validates the signed callback queries it returns.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
